//! Spelling Comparator
//!
//! Scores a typed attempt against the target word: an exact-match check for
//! the success banner, and a per-character diff for failure feedback.

/// Per-character comparison of an attempt against a target word
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// One flag per character of the target word
    pub matches: Vec<bool>,
    /// Percentage of target characters matched, in [0, 100]
    pub accuracy: f64,
}

/// Case-insensitive exact match. Only the attempt is trimmed; the target is
/// expected to be a clean token already.
pub fn check_spelling(target: &str, attempt: &str) -> bool {
    attempt.trim().to_lowercase() == target.to_lowercase()
}

/// Compare an attempt character by character against the target.
///
/// The match vector always has one entry per target character. Positions past
/// the end of the attempt count as misses; extra trailing characters in the
/// attempt are ignored entirely. Accuracy divides by the target's length.
pub fn compare(target: &str, attempt: &str) -> Comparison {
    let attempt_chars: Vec<char> = attempt.chars().collect();
    let matches: Vec<bool> = target
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            attempt_chars
                .get(i)
                .is_some_and(|a| a.eq_ignore_ascii_case(&ch))
        })
        .collect();

    let hits = matches.iter().filter(|m| **m).count();
    let accuracy = (hits as f64 / matches.len() as f64) * 100.0;

    Comparison { matches, accuracy }
}
