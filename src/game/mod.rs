//! Game rules
//!
//! Pure functions over the catalog and the session state: autocomplete,
//! flag selection, guess evaluation and hints. [`GameState::apply`] ties
//! them together into one transition per player action.

pub mod evaluator;
pub mod hint;
pub mod matcher;
mod round;
pub mod selector;
mod state;

pub use evaluator::{Outcome, evaluate};
pub use hint::{HintReveal, request_hint};
pub use matcher::{MAX_SUGGESTIONS, suggest};
pub use round::Round;
pub use selector::{Selection, select_next};
pub use state::{Effect, Event, GameState, Resolution, Streak, Transition};
