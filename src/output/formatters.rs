//! Formatting utilities for terminal output

use crate::game::Outcome;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short label for a round outcome
#[must_use]
pub const fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Correct => "Correct!",
        Outcome::CorrectWithHint => "Correct! (with hint)",
        Outcome::Incorrect => "Incorrect.",
    }
}

/// "1 flag" / "3 flags"
#[must_use]
pub fn flag_count(count: usize) -> String {
    if count == 1 {
        "1 flag".to_string()
    } else {
        format!("{count} flags")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn labels() {
        assert_eq!(outcome_label(Outcome::CorrectWithHint), "Correct! (with hint)");
        assert_eq!(flag_count(1), "1 flag");
        assert_eq!(flag_count(195), "195 flags");
    }
}
