//! Flag selection
//!
//! Picks the next flag uniformly at random from the countries not yet
//! completed today.

use super::Round;
use crate::catalog::Catalog;
use crate::core::Country;
use crate::session::CompletedSet;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Result of asking for the next flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A new round on a not-yet-completed country
    Round(Round),
    /// Every country in the catalog is completed today
    AllComplete { total: usize },
}

/// Choose the next round, or signal that today's catalog is exhausted
///
/// Never returns a country whose code is in `completed`.
pub fn select_next<R: Rng + ?Sized>(
    catalog: &Catalog,
    completed: &CompletedSet,
    rng: &mut R,
) -> Selection {
    let available: Vec<&Country> = catalog
        .countries()
        .iter()
        .filter(|country| !completed.contains(&country.code))
        .collect();

    match available.choose(rng) {
        Some(&country) => {
            tracing::debug!(code = %country.code, remaining = available.len(), "selected flag");
            Selection::Round(Round::new(country.clone()))
        }
        None => Selection::AllComplete {
            total: catalog.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::{chad_canada, code, sample_catalog};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_selects_completed_codes() {
        let catalog = sample_catalog();
        let completed: CompletedSet = ["CA", "TD", "CL", "CN", "CO"].iter().map(|c| code(c)).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            match select_next(&catalog, &completed, &mut rng) {
                Selection::Round(round) => {
                    assert!(!completed.contains(&round.target().code));
                }
                Selection::AllComplete { .. } => panic!("countries are still available"),
            }
        }
    }

    #[test]
    fn fresh_round_has_no_hint_progress() {
        let catalog = chad_canada();
        let mut rng = StdRng::seed_from_u64(1);

        let Selection::Round(round) = select_next(&catalog, &CompletedSet::default(), &mut rng) else {
            panic!("expected a round");
        };
        assert_eq!(round.letters_revealed(), 0);
        assert!(!round.hint_used());
    }

    #[test]
    fn last_remaining_country_is_always_chosen() {
        let catalog = chad_canada();
        let completed: CompletedSet = [code("CA")].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let Selection::Round(round) = select_next(&catalog, &completed, &mut rng) else {
                panic!("expected a round");
            };
            assert_eq!(round.target().name, "Chad");
        }
    }

    #[test]
    fn all_complete_carries_catalog_size() {
        let catalog = chad_canada();
        let completed: CompletedSet = [code("CA"), code("TD")].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            select_next(&catalog, &completed, &mut rng),
            Selection::AllComplete { total: 2 }
        );
    }

    #[test]
    fn empty_catalog_is_all_complete() {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_next(&catalog, &CompletedSet::default(), &mut rng),
            Selection::AllComplete { total: 0 }
        );
    }

    #[test]
    fn every_available_country_can_be_selected() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = CompletedSet::default();

        for _ in 0..2_000 {
            if let Selection::Round(round) = select_next(&catalog, &CompletedSet::default(), &mut rng) {
                seen.insert(round.target().code.clone());
            }
        }
        assert_eq!(seen.len(), catalog.len());
    }
}
