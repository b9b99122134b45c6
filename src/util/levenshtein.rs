//! Levenshtein edit distance and normalized similarity.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions, or
/// substitutions required to change one string into the other. Operates on
/// Unicode scalar values, not bytes. Uses a two-row dynamic programming table
/// so memory stays proportional to the shorter dimension.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

/// Normalized Levenshtein similarity between 0.0 and 1.0.
///
/// 1.0 means identical strings; 0.0 means no character survives the edit.
/// Defined as `1 - distance / max(len1, len2)`. Both strings empty yields 0.0.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let max_len = len1.max(len2);

    if max_len == 0 {
        return 0.0;
    }

    let distance = levenshtein_distance(s1, s2);
    1.0 - (distance as f64 / max_len as f64)
}
