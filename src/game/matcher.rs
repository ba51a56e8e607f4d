//! Autocomplete matching
//!
//! Runs on every keystroke, so it is a plain function of the query and the
//! catalog with no state of its own.

use crate::catalog::Catalog;
use crate::core::Country;

/// Upper bound on returned suggestions
pub const MAX_SUGGESTIONS: usize = 8;

/// Suggest countries for a partially typed name
///
/// A country matches when its name, or any whitespace-separated word of it,
/// starts with the trimmed, lowercased query. Results keep catalog order.
///
/// ```
/// use flag_game::catalog::Catalog;
/// use flag_game::core::{Country, CountryCode};
/// use flag_game::game::suggest;
///
/// let catalog = Catalog::from_countries(vec![
///     Country::new("Chad", CountryCode::new("TD").unwrap()),
///     Country::new("Canada", CountryCode::new("CA").unwrap()),
/// ]);
///
/// let names = |q| suggest(q, &catalog).iter().map(|c| c.name.clone()).collect::<Vec<_>>();
/// assert_eq!(names("ca"), ["Canada"]);
/// assert_eq!(names("c"), ["Canada", "Chad"]);
/// assert!(names("   ").is_empty());
/// ```
#[must_use]
pub fn suggest<'a>(query: &str, catalog: &'a Catalog) -> Vec<&'a Country> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    catalog
        .countries()
        .iter()
        .filter(|country| matches(&country.name.to_lowercase(), &query))
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn matches(name: &str, query: &str) -> bool {
    name.starts_with(query) || name.split_whitespace().any(|word| word.starts_with(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::{chad_canada, sample_catalog};

    fn names<'a>(countries: &[&'a Country]) -> Vec<&'a str> {
        countries.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn prefix_of_full_name() {
        let catalog = chad_canada();
        assert_eq!(names(&suggest("ca", &catalog)), ["Canada"]);
        assert_eq!(names(&suggest("c", &catalog)), ["Canada", "Chad"]);
    }

    #[test]
    fn empty_and_whitespace_queries() {
        let catalog = sample_catalog();
        assert!(suggest("", &catalog).is_empty());
        assert!(suggest(" \t ", &catalog).is_empty());
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let catalog = chad_canada();
        assert_eq!(names(&suggest("  CHA ", &catalog)), ["Chad"]);
    }

    #[test]
    fn matches_later_words_of_multi_word_names() {
        let catalog = sample_catalog();
        assert_eq!(
            names(&suggest("rep", &catalog)),
            ["Central African Republic", "Dominican Republic"]
        );
        assert_eq!(
            names(&suggest("af", &catalog)),
            ["Central African Republic", "South Africa"]
        );
    }

    #[test]
    fn does_not_match_inside_words() {
        let catalog = sample_catalog();
        assert!(suggest("nada", &catalog).is_empty());
    }

    #[test]
    fn multi_word_query_matches_full_name_prefix() {
        let catalog = sample_catalog();
        assert_eq!(names(&suggest("united k", &catalog)), ["United Kingdom"]);
    }

    #[test]
    fn truncates_to_eight_in_catalog_order() {
        let catalog = sample_catalog();
        let found = suggest("c", &catalog);

        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(
            names(&found),
            [
                "Canada",
                "Central African Republic",
                "Chad",
                "Chile",
                "China",
                "Colombia",
                "Comoros",
                "Costa Rica",
            ]
        );
    }

    #[test]
    fn every_suggestion_satisfies_the_match_rule() {
        let catalog = sample_catalog();
        for query in ["c", "ch", "co", "s", "u", "un", "re", "z", "cy"] {
            let found = suggest(query, &catalog);
            assert!(found.len() <= MAX_SUGGESTIONS);
            for country in &found {
                let name = country.name.to_lowercase();
                assert!(
                    name.starts_with(query) || name.split_whitespace().any(|w| w.starts_with(query)),
                    "{} does not match {query}",
                    country.name
                );
            }
            let mut sorted = found.clone();
            sorted.sort_by_key(|c| c.name.to_lowercase());
            assert_eq!(names(&found), names(&sorted), "order for {query}");
        }
    }

    #[test]
    fn is_deterministic() {
        let catalog = sample_catalog();
        assert_eq!(names(&suggest("c", &catalog)), names(&suggest("c", &catalog)));
    }
}
