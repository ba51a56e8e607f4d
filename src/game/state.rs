//! Session state and its transitions
//!
//! Everything that changes while playing lives in one [`GameState`] value.
//! [`GameState::apply`] consumes the state and an [`Event`] and returns the
//! next state together with whatever the front end has to act on. Storage is
//! never touched here; persisting is requested through [`Effect`]s.

use super::{Outcome, Round, Selection, evaluate, request_hint, select_next};
use crate::catalog::Catalog;
use crate::session::CompletedSet;
use rand::Rng;

/// Consecutive hint-free correct answers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    current: u32,
    best: u32,
}

impl Streak {
    #[inline]
    #[must_use]
    pub const fn current(self) -> u32 {
        self.current
    }

    /// Longest streak reached since the program started
    #[inline]
    #[must_use]
    pub const fn best(self) -> u32 {
        self.best
    }

    fn increment(&mut self) {
        self.current += 1;
        self.best = self.best.max(self.current);
    }

    fn reset(&mut self) {
        self.current = 0;
    }
}

/// Player actions and timer ticks that drive the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Catalog and daily session are ready: pick the first flag
    Start,
    /// A guess was submitted
    Submit(String),
    /// The hint button was pressed
    Hint,
    /// The rollover poll loaded a different completion set
    DayRolledOver(CompletedSet),
    /// Stale codes were pruned from the completion set
    Reconciled(CompletedSet),
}

/// Work a transition asks the front end to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Save the completion set under today's key
    PersistCompleted(CompletedSet),
}

/// How a finished round went, for the transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    /// Canonical name of the flag that was just guessed
    pub answer: String,
    /// Streak after the guess was scored
    pub streak: u32,
}

/// Result of applying one event
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: GameState,
    /// Present when a guess was scored
    pub resolution: Option<Resolution>,
    /// Replacement text for the guess input, if the input should change
    pub input: Option<String>,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: GameState) -> Self {
        Self {
            state,
            resolution: None,
            input: None,
            effects: Vec::new(),
        }
    }
}

/// All session-scoped state of one player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    streak: Streak,
    round: Option<Round>,
    completed: CompletedSet,
    all_complete: Option<usize>,
}

impl GameState {
    /// A state with today's completions loaded and no round yet
    #[must_use]
    pub fn new(completed: CompletedSet) -> Self {
        Self {
            completed,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub const fn streak(&self) -> Streak {
        self.streak
    }

    #[inline]
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    /// Catalog size, once every flag has been completed today
    #[inline]
    #[must_use]
    pub const fn all_complete(&self) -> Option<usize> {
        self.all_complete
    }

    /// Flags still available today
    #[must_use]
    pub fn remaining(&self, catalog: &Catalog) -> usize {
        catalog
            .countries()
            .iter()
            .filter(|country| !self.completed.contains(&country.code))
            .count()
    }

    /// Apply one event
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(self, event: Event, catalog: &Catalog, rng: &mut R) -> Transition {
        match event {
            Event::Start => {
                let state = self.advance(catalog, rng);
                Transition {
                    input: Some(String::new()),
                    ..Transition::unchanged(state)
                }
            }
            Event::Submit(guess) => self.submit(&guess, catalog, rng),
            Event::Hint => self.hint(),
            Event::DayRolledOver(completed) => self.roll_over(completed, catalog, rng),
            Event::Reconciled(completed) => Transition::unchanged(Self { completed, ..self }),
        }
    }

    fn advance<R: Rng + ?Sized>(mut self, catalog: &Catalog, rng: &mut R) -> Self {
        match select_next(catalog, &self.completed, rng) {
            Selection::Round(round) => {
                self.round = Some(round);
                self.all_complete = None;
            }
            Selection::AllComplete { total } => {
                tracing::info!(total, "every flag completed today");
                self.round = None;
                self.all_complete = Some(total);
            }
        }
        self
    }

    fn submit<R: Rng + ?Sized>(mut self, guess: &str, catalog: &Catalog, rng: &mut R) -> Transition {
        let Some(round) = self.round.take() else {
            return Transition::unchanged(self);
        };
        let Some(outcome) = evaluate(&round, guess) else {
            self.round = Some(round);
            return Transition::unchanged(self);
        };

        let mut effects = Vec::new();
        match outcome {
            Outcome::Correct => {
                self.streak.increment();
                if self.completed.insert(round.target().code.clone()) {
                    effects.push(Effect::PersistCompleted(self.completed.clone()));
                }
            }
            // The streak was already zeroed by the first hint
            Outcome::CorrectWithHint => {}
            Outcome::Incorrect => self.streak.reset(),
        }

        tracing::debug!(?outcome, code = %round.target().code, streak = self.streak.current, "guess scored");

        let resolution = Resolution {
            outcome,
            answer: round.target().name.clone(),
            streak: self.streak.current,
        };
        let state = self.advance(catalog, rng);

        Transition {
            state,
            resolution: Some(resolution),
            input: Some(String::new()),
            effects,
        }
    }

    fn hint(mut self) -> Transition {
        let Some(round) = self.round.take() else {
            return Transition::unchanged(self);
        };

        let reveal = request_hint(&round);
        if reveal.first_use {
            self.streak.reset();
        }
        self.round = Some(reveal.round);

        Transition {
            input: Some(reveal.input),
            ..Transition::unchanged(self)
        }
    }

    fn roll_over<R: Rng + ?Sized>(
        mut self,
        completed: CompletedSet,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Transition {
        self.completed = completed;
        if self.all_complete.is_some() && self.remaining(catalog) > 0 {
            let state = self.advance(catalog, rng);
            return Transition {
                input: Some(String::new()),
                ..Transition::unchanged(state)
            };
        }
        Transition::unchanged(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::{chad_canada, code, sample_catalog};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    /// Force a specific target by completing everything else first
    fn state_targeting(catalog: &Catalog, target: &str, streak: u32) -> GameState {
        let others: CompletedSet = catalog
            .countries()
            .iter()
            .filter(|c| c.code.as_str() != target)
            .map(|c| c.code.clone())
            .collect();
        let mut state = GameState::new(others)
            .apply(Event::Start, catalog, &mut rng())
            .state;
        state.streak = Streak {
            current: streak,
            best: streak,
        };
        state.completed = CompletedSet::default();
        state
    }

    #[test]
    fn start_selects_a_round() {
        let catalog = chad_canada();
        let t = GameState::default().apply(Event::Start, &catalog, &mut rng());

        assert!(t.state.round().is_some());
        assert_eq!(t.state.all_complete(), None);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn correct_guess_without_hint() {
        let catalog = chad_canada();
        let state = state_targeting(&catalog, "TD", 3);

        let t = state.apply(Event::Submit("chad".into()), &catalog, &mut rng());

        let resolution = t.resolution.unwrap();
        assert_eq!(resolution.outcome, Outcome::Correct);
        assert_eq!(resolution.answer, "Chad");
        assert_eq!(resolution.streak, 4);
        assert_eq!(t.state.streak().current(), 4);
        assert!(t.state.completed().contains(&code("TD")));
        assert_eq!(
            t.effects,
            [Effect::PersistCompleted([code("TD")].into_iter().collect())]
        );
        // Next round started immediately, and only Canada is left
        assert_eq!(t.state.round().unwrap().target().name, "Canada");
        assert_eq!(t.input.as_deref(), Some(""));
    }

    #[test]
    fn hint_then_correct_guess_earns_no_credit() {
        let catalog = chad_canada();
        let state = state_targeting(&catalog, "CA", 5);

        let hinted = state.apply(Event::Hint, &catalog, &mut rng());
        assert_eq!(hinted.input.as_deref(), Some("C"));
        assert_eq!(hinted.state.streak().current(), 0);
        let round = hinted.state.round().unwrap();
        assert!(round.hint_used());
        assert_eq!(round.letters_revealed(), 1);

        let t = hinted
            .state
            .apply(Event::Submit("canada".into()), &catalog, &mut rng());

        assert_eq!(t.resolution.unwrap().outcome, Outcome::CorrectWithHint);
        assert!(t.state.completed().is_empty());
        assert_eq!(t.state.streak().current(), 0);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn second_hint_does_not_touch_streak_again() {
        let catalog = chad_canada();
        let state = state_targeting(&catalog, "CA", 2);

        let t = state.apply(Event::Hint, &catalog, &mut rng());
        let t = t.state.apply(Event::Hint, &catalog, &mut rng());

        assert_eq!(t.input.as_deref(), Some("Ca"));
        assert_eq!(t.state.streak().current(), 0);
        assert_eq!(t.state.streak().best(), 2);
    }

    #[test]
    fn incorrect_guess_resets_streak() {
        let catalog = chad_canada();
        let state = state_targeting(&catalog, "CA", 7);

        let t = state.apply(Event::Submit("Chad".into()), &catalog, &mut rng());

        let resolution = t.resolution.unwrap();
        assert_eq!(resolution.outcome, Outcome::Incorrect);
        assert_eq!(resolution.answer, "Canada");
        assert_eq!(t.state.streak().current(), 0);
        assert_eq!(t.state.streak().best(), 7);
        assert!(t.state.completed().is_empty());
        assert!(t.state.round().is_some(), "a new round follows a miss");
    }

    #[test]
    fn empty_guess_is_ignored() {
        let catalog = chad_canada();
        let state = state_targeting(&catalog, "CA", 1);
        let before = state.clone();

        let t = state.apply(Event::Submit("   ".into()), &catalog, &mut rng());

        assert!(t.resolution.is_none());
        assert!(t.input.is_none());
        assert_eq!(t.state, before);
    }

    #[test]
    fn submit_and_hint_without_round_are_no_ops() {
        let catalog = chad_canada();

        let t = GameState::default().apply(Event::Submit("Chad".into()), &catalog, &mut rng());
        assert!(t.resolution.is_none());
        assert_eq!(t.state, GameState::default());

        let t = GameState::default().apply(Event::Hint, &catalog, &mut rng());
        assert!(t.input.is_none());
        assert_eq!(t.state, GameState::default());
    }

    #[test]
    fn solving_the_last_flag_reports_all_complete() {
        let catalog = chad_canada();
        let mut state = state_targeting(&catalog, "TD", 0);
        state.completed = [code("CA")].into_iter().collect();

        let t = state.apply(Event::Submit("Chad".into()), &catalog, &mut rng());

        assert_eq!(t.resolution.unwrap().outcome, Outcome::Correct);
        assert_eq!(t.state.all_complete(), Some(2));
        assert!(t.state.round().is_none());
    }

    #[test]
    fn start_with_everything_completed() {
        let catalog = chad_canada();
        let completed: CompletedSet = [code("CA"), code("TD")].into_iter().collect();

        let t = GameState::new(completed).apply(Event::Start, &catalog, &mut rng());

        assert_eq!(t.state.all_complete(), Some(2));
        assert!(t.state.round().is_none());
    }

    #[test]
    fn rollover_after_all_complete_starts_again() {
        let catalog = chad_canada();
        let completed: CompletedSet = [code("CA"), code("TD")].into_iter().collect();
        let state = GameState::new(completed)
            .apply(Event::Start, &catalog, &mut rng())
            .state;

        let t = state.apply(Event::DayRolledOver(CompletedSet::default()), &catalog, &mut rng());

        assert_eq!(t.state.all_complete(), None);
        assert!(t.state.round().is_some());
        assert_eq!(t.state.remaining(&catalog), 2);
    }

    #[test]
    fn rollover_with_unknown_codes_still_finds_open_flag() {
        let catalog = chad_canada();
        let completed: CompletedSet = [code("CA"), code("TD")].into_iter().collect();
        let state = GameState::new(completed)
            .apply(Event::Start, &catalog, &mut rng())
            .state;

        let fresh: CompletedSet = [code("CA"), code("GL")].into_iter().collect();
        let t = state.apply(Event::DayRolledOver(fresh), &catalog, &mut rng());

        assert_eq!(t.state.remaining(&catalog), 1);
        assert_eq!(t.state.all_complete(), None);
        assert_eq!(t.state.round().unwrap().target().name, "Chad");
    }

    #[test]
    fn remaining_ignores_codes_outside_catalog() {
        let catalog = chad_canada();
        let state = GameState::new([code("GL"), code("FO")].into_iter().collect());
        assert_eq!(state.remaining(&catalog), 2);
    }

    #[test]
    fn rollover_keeps_active_round() {
        let catalog = chad_canada();
        let state = state_targeting(&catalog, "CA", 2);
        let round = state.round().cloned();

        let t = state.apply(Event::DayRolledOver(CompletedSet::default()), &catalog, &mut rng());

        assert_eq!(t.state.round().cloned(), round);
        assert_eq!(t.state.streak().current(), 2);
        assert!(t.input.is_none());
    }

    #[test]
    fn reconciled_replaces_completed_set() {
        let catalog = chad_canada();
        let state = GameState::new([code("CA"), code("GL")].into_iter().collect());

        let t = state.apply(
            Event::Reconciled([code("CA")].into_iter().collect()),
            &catalog,
            &mut rng(),
        );
        assert_eq!(t.state.remaining(&catalog), 1);
    }

    #[test]
    fn hint_free_solves_count_once_per_code() {
        let catalog = sample_catalog();
        let mut state = GameState::default()
            .apply(Event::Start, &catalog, &mut rng())
            .state;
        let mut rng = rng();
        let mut persisted = 0;

        while let Some(round) = state.round().cloned() {
            let t = state.apply(Event::Submit(round.target().name.clone()), &catalog, &mut rng);
            persisted += t.effects.len();
            state = t.state;
        }

        assert_eq!(persisted, catalog.len());
        assert_eq!(state.completed().len(), catalog.len());
        assert_eq!(state.streak().current() as usize, catalog.len());
        assert_eq!(state.all_complete(), Some(catalog.len()));
    }

    #[test]
    fn exactly_one_outcome_and_zero_streak_after_miss() {
        let catalog = sample_catalog();
        let mut rng = rng();
        let mut state = GameState::default().apply(Event::Start, &catalog, &mut rng).state;

        for (i, guess) in ["Chile", "Cuba", "Chad", "Narnia", "China", "Canada"].iter().enumerate() {
            if i % 3 == 1 {
                state = state.apply(Event::Hint, &catalog, &mut rng).state;
            }
            let t = state.apply(Event::Submit((*guess).to_string()), &catalog, &mut rng);
            let resolution = t.resolution.expect("non-empty guess with an active round");
            if resolution.outcome == Outcome::Incorrect {
                assert_eq!(t.state.streak().current(), 0);
            }
            state = t.state;
        }
    }
}
