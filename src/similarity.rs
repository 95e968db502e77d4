// ==============================================================================
// String Similarity
// ==============================================================================
//
// Edit-distance scoring used by the organizer to decide whether two base names
// belong in the same group.

/// Compute the Levenshtein edit distance between two strings.
///
/// Lengths and positions are counted in `char`s, not bytes, so a single
/// accented letter is one edit. Uses the standard dynamic programming recurrence
/// with a two-row buffer; only the previous row of the grid is ever read.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j] + cost) // substitution
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b_len]
}

/// Normalized similarity of two strings in `[0.0, 1.0]`.
///
/// Computed as `1 - distance / max(len(a) + 1, len(b) + 1)`. The denominator
/// is the side of the edit-distance grid rather than the longer string's
/// length, so two completely different strings of length `L` score
/// `1 / (L + 1)` instead of `0`, and two empty strings score `1.0`.
///
/// ```
/// assert_eq!(simfold::similarity("kitten", "sitting"), 0.625);
/// assert_eq!(simfold::similarity("", ""), 1.0);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let rows = a.chars().count() + 1;
    let cols = b.chars().count() + 1;
    let distance = levenshtein(a, b);
    1.0 - distance as f64 / rows.max(cols) as f64
}
