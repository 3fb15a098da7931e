use crate::session::diff::{self, Diff};

/// Standard typing convention: one word is five characters.
pub const CHARS_PER_WORD: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub wpm: u32,
    /// Whole percent, 0..=100.
    pub accuracy: u32,
    pub errors: usize,
    pub correct_keystrokes: usize,
    pub total_keystrokes: usize,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            wpm: 0,
            accuracy: 100,
            errors: 0,
            correct_keystrokes: 0,
            total_keystrokes: 0,
        }
    }
}

impl Metrics {
    /// Characters typed past the passage end count as errors and are part of
    /// the accuracy denominator, so `correct + errors == total` always holds.
    pub fn from_diff(diff: &Diff, elapsed_secs: u32) -> Self {
        let correct = diff.correct_count();
        let errors = diff.incorrect_count() + diff.overflow.len();
        let total = diff.typed_len();

        Self {
            wpm: wpm(correct, elapsed_secs),
            accuracy: accuracy(correct, total),
            errors,
            correct_keystrokes: correct,
            total_keystrokes: total,
        }
    }
}

pub fn compute(passage: &[char], typed: &[char], elapsed_secs: u32) -> Metrics {
    Metrics::from_diff(&diff::diff(passage, typed), elapsed_secs)
}

/// Only correctly typed characters count toward speed.
pub fn wpm(correct_chars: usize, elapsed_secs: u32) -> u32 {
    if elapsed_secs == 0 {
        return 0;
    }
    let words = correct_chars as f64 / CHARS_PER_WORD;
    let minutes = elapsed_secs as f64 / 60.0;
    (words / minutes).round() as u32
}

pub fn accuracy(correct_chars: usize, typed_chars: usize) -> u32 {
    if typed_chars == 0 {
        return 100;
    }
    let pct = (correct_chars as f64 / typed_chars as f64 * 100.0).round();
    (pct as u32).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_defaults_before_typing() {
        let m = compute(&chars("hello"), &[], 0);
        assert_eq!(m, Metrics::default());
        assert_eq!(m.accuracy, 100);
    }

    #[test]
    fn test_the_cat_accuracy_rounds() {
        let m = compute(&chars("the cat"), &chars("the dog"), 10);
        assert_eq!(m.correct_keystrokes, 4);
        assert_eq!(m.errors, 3);
        assert_eq!(m.total_keystrokes, 7);
        assert_eq!(m.accuracy, 57);
    }

    #[test]
    fn test_wpm_counts_correct_chars_only() {
        // 50 correct chars in 60s = 10 words per minute
        assert_eq!(wpm(50, 60), 10);
        // 50 correct chars in 30s = 20 wpm
        assert_eq!(wpm(50, 30), 20);
        // 7 chars in 60s = 1.4 -> 1
        assert_eq!(wpm(7, 60), 1);
        // 8 chars in 60s = 1.6 -> 2
        assert_eq!(wpm(8, 60), 2);
    }

    #[test]
    fn test_wpm_zero_without_elapsed_time() {
        assert_eq!(wpm(500, 0), 0);
    }

    #[test]
    fn test_accuracy_bounds() {
        assert_eq!(accuracy(0, 0), 100);
        assert_eq!(accuracy(0, 12), 0);
        assert_eq!(accuracy(12, 12), 100);
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(2, 3), 67);
    }

    #[test]
    fn test_overflow_counts_as_errors() {
        let m = compute(&chars("hi"), &chars("hi!!"), 60);
        assert_eq!(m.correct_keystrokes, 2);
        assert_eq!(m.errors, 2);
        assert_eq!(m.total_keystrokes, 4);
        assert_eq!(m.accuracy, 50);
    }

    #[test]
    fn test_correct_plus_errors_is_total() {
        let passage = chars("the quick brown fox");
        for typed in ["", "the", "thx quick", "the quick brown fox jumps", "qqqqqqqqqqqqqqqqqqqqqqqq"] {
            let m = compute(&passage, &chars(typed), 17);
            assert_eq!(m.correct_keystrokes + m.errors, m.total_keystrokes);
            assert!(m.accuracy <= 100);
        }
    }
}
