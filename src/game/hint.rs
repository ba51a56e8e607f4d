//! Progressive name reveal
//!
//! Each hint discloses one more leading character of the answer and puts the
//! disclosed prefix into the guess input. Hints never submit anything.

use super::Round;

/// What a hint request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintReveal {
    /// The round with its hint progress advanced
    pub round: Round,
    /// Text that replaces the player's current input
    pub input: String,
    /// True on the round's first hint, which costs the streak
    pub first_use: bool,
}

/// Reveal one more character of the target name
///
/// Once the whole name is shown further requests change nothing but are
/// still answered.
///
/// ```
/// use flag_game::core::{Country, CountryCode};
/// use flag_game::game::{Round, request_hint};
///
/// let round = Round::new(Country::new("Chad", CountryCode::new("TD").unwrap()));
/// let first = request_hint(&round);
/// assert_eq!(first.input, "C");
/// assert!(first.first_use);
///
/// let second = request_hint(&first.round);
/// assert_eq!(second.input, "Ch");
/// assert!(!second.first_use);
/// ```
#[must_use]
pub fn request_hint(round: &Round) -> HintReveal {
    let first_use = !round.hint_used();
    let mut round = round.clone();
    round.reveal_one();

    HintReveal {
        input: round.target().name_prefix(round.letters_revealed()),
        round,
        first_use,
    }
}
