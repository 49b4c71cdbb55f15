//! Edit distance helpers used to check word ladders and rank neighbors.

use std::cmp::min;

/// Levenshtein distance between two strings, counted in characters.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `s1` into `s2`.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, &c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
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

    prev_row[s2_chars.len()]
}

/// Check whether two strings are exactly one insertion, deletion or
/// substitution apart. Runs in linear time.
pub fn is_one_edit_apart(s1: &str, s2: &str) -> bool {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    if longer.len() - shorter.len() > 1 {
        return false;
    }

    let prefix = shorter
        .iter()
        .zip(longer.iter())
        .take_while(|(x, y)| x == y)
        .count();

    if shorter.len() == longer.len() {
        // Substitution: exactly one mismatch, the rest equal.
        prefix < shorter.len() && shorter[prefix + 1..] == longer[prefix + 1..]
    } else {
        // Insertion: skip one char of the longer string at the first mismatch.
        shorter[prefix..] == longer[prefix + 1..]
    }
}

/// Check that every consecutive pair of a ladder is one edit apart.
pub fn is_ladder<S: AsRef<str>>(words: &[S]) -> bool {
    words
        .windows(2)
        .all(|pair| is_one_edit_apart(pair[0].as_ref(), pair[1].as_ref()))
}
