//! The linear-time transforms: slicing, casing, trimming, padding,
//! replacement, splitting/joining, and tab expansion.

/// The whitespace set recognized by the trimming and splitting operations.
const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

pub(crate) fn is_whitespace(ch: char) -> bool {
    WHITESPACE.contains(&ch)
}

/// Extracts the characters in `[start, end)`.
///
/// An `end` of 0 means "end of text" rather than the literal index 0.
/// Negative values for `start` or `end` address from the end of the text: the
/// effective index is `length + value`. An `end` past the text length, or one
/// that lands before `start`, clamps to rest-of-string.
///
/// # Panics
///
/// A `start` beyond the text length after normalization is an unchecked
/// precondition and panics.
pub fn slice(text: &str, start: isize, end: isize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len() as isize;
    let mut start = start;
    let mut end = if end == 0 { len } else { end };
    if start < 0 {
        start += len;
    }
    if end < 0 {
        end += len;
    }
    // Count clamp: an end past the text or before `start` falls back to
    // rest-of-string. Only an out-of-range `start` is left to panic.
    if end > len || end < start {
        end = len;
    }
    chars[start as usize..end as usize].iter().collect()
}

/// Upper-cases every ASCII letter; everything else passes through.
pub fn to_upper(text: &str) -> String {
    text.chars().map(|ch| ch.to_ascii_uppercase()).collect()
}

/// Lower-cases every ASCII letter; everything else passes through.
pub fn to_lower(text: &str) -> String {
    text.chars().map(|ch| ch.to_ascii_lowercase()).collect()
}

/// Upper-cases the first character and lower-cases the entire tail.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|ch| ch.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// Removes the maximal leading run of whitespace.
pub fn trim_start(text: &str) -> String {
    text.trim_start_matches(WHITESPACE).to_string()
}

/// Removes the maximal trailing run of whitespace.
pub fn trim_end(text: &str) -> String {
    text.trim_end_matches(WHITESPACE).to_string()
}

/// Removes whitespace from both ends. All-whitespace input reduces to empty.
pub fn trim(text: &str) -> String {
    trim_start(&trim_end(text))
}

/// Centers `text` in `width` columns, padding with `fill` (conventionally a
/// space). Odd padding puts the extra fill character on the right. Text at or
/// above `width` comes back unchanged; nothing is ever truncated.
pub fn center(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let mut out = String::with_capacity(text.len() + padding);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(padding - left));
    out
}

/// Left-justifies: appends `fill` until the text is `width` characters long.
pub fn pad_end(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let mut out = String::from(text);
    out.extend(std::iter::repeat(fill).take(width - len));
    out
}

/// Right-justifies: prepends `fill` until the text is `width` characters long.
pub fn pad_start(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let mut out: String = std::iter::repeat(fill).take(width - len).collect();
    out.push_str(text);
    out
}

/// Replaces every non-overlapping occurrence of `old` with `rep`, scanning
/// left to right and resuming after each replacement, so a `rep` containing
/// `old` is never re-matched.
///
/// An empty `old` is a no-op: the input comes back unchanged.
pub fn replace_all(text: &str, old: &str, rep: &str) -> String {
    if old.is_empty() {
        return text.to_string();
    }
    text.replace(old, rep)
}

/// Splits `text` into tokens.
///
/// An empty `delim` selects whitespace mode: tokens are the maximal
/// non-whitespace runs, so leading, trailing, and repeated separators never
/// produce empty tokens. A non-empty `delim` is literal substring splitting,
/// which does produce empty tokens for leading, trailing, or adjacent
/// delimiters; the final segment is always emitted. Empty `text` yields no
/// tokens in either mode.
pub fn split(text: &str, delim: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if delim.is_empty() {
        return text
            .split(is_whitespace)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
    }
    text.split(delim).map(str::to_string).collect()
}

/// Concatenates `tokens` with `delim` between consecutive tokens (never
/// before the first or after the last). An empty list yields empty text.
pub fn join(delim: &str, tokens: &[String]) -> String {
    tokens.join(delim)
}

/// Replaces each tab with enough spaces to reach the next multiple of
/// `tabsize` (at least one). The column count starts at 0, advances by one for
/// every non-tab character, and resets to 0 after a newline. The conventional
/// tab size is 4.
///
/// # Panics
///
/// `tabsize` must be positive; a tab size of 0 panics.
pub fn expand_tabs(text: &str, tabsize: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        if ch == '\t' {
            let spaces = tabsize - column % tabsize;
            for _ in 0..spaces {
                out.push(' ');
            }
            column += spaces;
        } else {
            out.push(ch);
            column += 1;
            if ch == '\n' {
                column = 0;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_end_zero_means_end_of_text() {
        assert_eq!(slice("hello world", 0, 0), "hello world");
        assert_eq!(slice("hello world", 6, 0), "world");
    }

    #[test]
    fn slice_negative_indices_address_from_the_end() {
        assert_eq!(slice("hello world", -5, 0), "world");
        assert_eq!(slice("hello world", 2, -3), "llo wo");
    }

    #[test]
    fn slice_clamps_an_end_past_the_text() {
        assert_eq!(slice("hello", 1, 100), "ello");
        assert_eq!(slice("hello", 0, 6), "hello");
    }

    #[test]
    fn slice_treats_an_inverted_range_as_rest_of_string() {
        assert_eq!(slice("hello", 3, 1), "lo");
        assert_eq!(slice("hello", 0, -10), "hello");
    }

    #[test]
    fn capitalize_lower_cases_the_whole_tail() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn case_mapping_leaves_non_alphabetic_units_alone() {
        assert_eq!(to_upper("ab1 c!"), "AB1 C!");
        assert_eq!(to_lower("AB1 C!"), "ab1 c!");
    }

    #[test]
    fn trim_recognizes_exactly_the_four_whitespace_characters() {
        assert_eq!(trim_start(" \t\n\rx"), "x");
        assert_eq!(trim_end("x \t\n\r"), "x");
        assert_eq!(trim("\u{b}x\u{b}"), "\u{b}x\u{b}");
    }

    #[test]
    fn trim_reduces_all_whitespace_input_to_empty() {
        assert_eq!(trim(" \t\r\n"), "");
        assert_eq!(trim(""), "");
    }

    #[test]
    fn center_puts_the_smaller_half_on_the_left() {
        assert_eq!(center("hello", 10, '*'), "**hello***");
        assert_eq!(center("hello", 7, '_'), "_hello_");
    }

    #[test]
    fn pads_never_truncate() {
        assert_eq!(center("hello", 3, '-'), "hello");
        assert_eq!(pad_end("hello", 5, '-'), "hello");
        assert_eq!(pad_start("hello", 0, '-'), "hello");
    }

    #[test]
    fn replace_all_does_not_rescan_the_replacement() {
        assert_eq!(replace_all("aa", "a", "aa"), "aaaa");
        assert_eq!(replace_all("abab", "ab", "b"), "bb");
    }

    #[test]
    fn replace_all_with_empty_pattern_is_a_no_op() {
        assert_eq!(replace_all("hello", "", "x"), "hello");
    }

    #[test]
    fn whitespace_split_collapses_separator_runs() {
        assert_eq!(split("  a \t b\n", ""), vec!["a", "b"]);
        assert_eq!(split("", ""), Vec::<String>::new());
    }

    #[test]
    fn literal_split_keeps_empty_tokens() {
        assert_eq!(split(",a,,b,", ","), vec!["", "a", "", "b", ""]);
        assert_eq!(split("", ","), Vec::<String>::new());
    }

    #[test]
    fn join_places_the_delimiter_only_between_tokens() {
        let tokens = vec!["a".to_string(), "b".to_string()];
        assert_eq!(join("-", &tokens), "a-b");
        assert_eq!(join("-", &[]), "");
    }

    #[test]
    fn expand_tabs_advances_to_the_next_stop() {
        assert_eq!(expand_tabs("hello\tworld", 4), "hello    world");
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        // A tab on a stop still produces a full run of spaces.
        assert_eq!(expand_tabs("abcd\te", 4), "abcd    e");
    }

    #[test]
    fn expand_tabs_resets_the_column_after_a_newline() {
        assert_eq!(expand_tabs("ab\n\tc", 4), "ab\n    c");
    }
}
