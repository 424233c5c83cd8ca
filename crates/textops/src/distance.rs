//! Levenshtein edit distance, the one quadratic operation in the crate.

use std::borrow::Cow;

use crate::text::to_lower;

/// Minimum number of single-character insertions, deletions, or substitutions
/// transforming `left` into `right`.
///
/// With `ignorecase`, both inputs are lower-cased (ASCII, like
/// [`to_lower`](crate::to_lower)) before comparison; otherwise they are
/// borrowed as-is. Runs in O(|left| * |right|) time and space.
pub fn edit_distance(left: &str, right: &str, ignorecase: bool) -> usize {
    let (left, right): (Cow<'_, str>, Cow<'_, str>) = if ignorecase {
        (Cow::Owned(to_lower(left)), Cow::Owned(to_lower(right)))
    } else {
        (Cow::Borrowed(left), Cow::Borrowed(right))
    };
    let l: Vec<char> = left.chars().collect();
    let r: Vec<char> = right.chars().collect();

    let mut table = vec![vec![0usize; r.len() + 1]; l.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=l.len() {
        for j in 1..=r.len() {
            let cost = usize::from(l[i - 1] != r[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[l.len()][r.len()]
}
