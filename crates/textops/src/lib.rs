//! Stateless text-manipulation primitives.
//!
//! Every operation is a pure function over a character sequence: inputs are
//! borrowed, outputs are freshly allocated, and nothing survives a call, so
//! the whole surface is safe to use from any number of threads without
//! synchronization.
//!
//! Case mapping is ASCII-only and "whitespace" means exactly the set
//! {space, tab, newline, carriage return}. See the individual operations for
//! their precise contracts, including the unchecked preconditions on
//! [`slice`] and [`expand_tabs`].

pub mod distance;
pub mod text;

pub use distance::edit_distance;
pub use text::{
    capitalize, center, expand_tabs, join, pad_end, pad_start, replace_all, slice, split,
    to_lower, to_upper, trim, trim_end, trim_start,
};
