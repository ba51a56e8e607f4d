//! Guess evaluation
//!
//! Comparison is exact after trimming and lowercasing both sides. There is no
//! fuzzy matching and no accent folding.

use super::Round;

/// How a submitted guess resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    CorrectWithHint,
    Incorrect,
}

impl Outcome {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::CorrectWithHint)
    }
}

/// Normalize text for comparison: trim, lowercase
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Judge a guess against the round's target
///
/// Returns `None` for a guess that is empty after trimming; such a
/// submission is ignored rather than counted as wrong.
///
/// ```
/// use flag_game::core::{Country, CountryCode};
/// use flag_game::game::{Outcome, Round, evaluate};
///
/// let round = Round::new(Country::new("Chad", CountryCode::new("TD").unwrap()));
/// assert_eq!(evaluate(&round, "  CHAD "), Some(Outcome::Correct));
/// assert_eq!(evaluate(&round, "Chile"), Some(Outcome::Incorrect));
/// assert_eq!(evaluate(&round, "   "), None);
/// ```
#[must_use]
pub fn evaluate(round: &Round, raw_guess: &str) -> Option<Outcome> {
    let guess = normalize(raw_guess);
    if guess.is_empty() {
        return None;
    }

    let outcome = if guess != normalize(&round.target().name) {
        Outcome::Incorrect
    } else if round.hint_used() {
        Outcome::CorrectWithHint
    } else {
        Outcome::Correct
    };
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::country;
    use crate::game::request_hint;

    #[test]
    fn exact_match_ignoring_case_and_whitespace() {
        let round = Round::new(country("Canada", "CA"));
        assert_eq!(evaluate(&round, "canada"), Some(Outcome::Correct));
        assert_eq!(evaluate(&round, "\tCANADA\n"), Some(Outcome::Correct));
    }

    #[test]
    fn near_misses_are_incorrect() {
        let round = Round::new(country("Canada", "CA"));
        assert_eq!(evaluate(&round, "canad"), Some(Outcome::Incorrect));
        assert_eq!(evaluate(&round, "canadaa"), Some(Outcome::Incorrect));
    }

    #[test]
    fn accents_are_not_folded() {
        let round = Round::new(country("Côte d'Ivoire", "CI"));
        assert_eq!(evaluate(&round, "cote d'ivoire"), Some(Outcome::Incorrect));
        assert_eq!(evaluate(&round, "CÔTE D'IVOIRE"), Some(Outcome::Correct));
    }

    #[test]
    fn hinted_round_scores_correct_with_hint() {
        let round = request_hint(&Round::new(country("Canada", "CA"))).round;
        assert_eq!(evaluate(&round, "Canada"), Some(Outcome::CorrectWithHint));
        assert_eq!(evaluate(&round, "Chad"), Some(Outcome::Incorrect));
    }

    #[test]
    fn empty_guess_has_no_outcome() {
        let round = Round::new(country("Canada", "CA"));
        assert_eq!(evaluate(&round, ""), None);
        assert_eq!(evaluate(&round, "    "), None);
    }

    #[test]
    fn outcome_correctness() {
        assert!(Outcome::Correct.is_correct());
        assert!(Outcome::CorrectWithHint.is_correct());
        assert!(!Outcome::Incorrect.is_correct());
    }
}
