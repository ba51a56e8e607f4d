//! Country catalog
//!
//! The catalog is the filtered, sorted and deduplicated list of sovereign
//! countries the game draws flags from. It is built once per run from a
//! [`CatalogSource`] and only rebuilt on an explicit retry.

mod collation;
mod error;
pub mod loader;
mod source;

pub use collation::collation_key;
pub use error::CatalogError;
pub use source::{CatalogSource, DEFAULT_SOURCE_URL};

use crate::core::{Country, CountryCode};
use rustc_hash::{FxHashMap, FxHashSet};

/// Ordered, read-only collection of eligible countries
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    countries: Vec<Country>,
    index: FxHashMap<CountryCode, usize>,
}

impl Catalog {
    /// Build a catalog from raw country records
    ///
    /// Non-sovereign records are dropped, duplicate codes keep their first
    /// occurrence, and the result is sorted by canonical name.
    ///
    /// ```
    /// use flag_game::catalog::Catalog;
    /// use flag_game::core::{Country, CountryCode};
    ///
    /// let catalog = Catalog::from_countries(vec![
    ///     Country::new("Chad", CountryCode::new("TD").unwrap()),
    ///     Country::new("Canada", CountryCode::new("CA").unwrap()),
    /// ]);
    /// let names: Vec<_> = catalog.countries().iter().map(|c| c.name.as_str()).collect();
    /// assert_eq!(names, ["Canada", "Chad"]);
    /// ```
    #[must_use]
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut seen: FxHashSet<CountryCode> = FxHashSet::default();
        let mut kept: Vec<Country> = countries
            .into_iter()
            .filter(|country| country.sovereign)
            .filter(|country| {
                let fresh = seen.insert(country.code.clone());
                if !fresh {
                    tracing::warn!(code = %country.code, name = %country.name, "dropping duplicate country code");
                }
                fresh
            })
            .collect();

        kept.sort_by_cached_key(|country| (collation_key(&country.name), country.name.clone()));

        let index = kept
            .iter()
            .enumerate()
            .map(|(i, country)| (country.code.clone(), i))
            .collect();

        Self {
            countries: kept,
            index,
        }
    }

    /// All countries in catalog order (alphabetical by name)
    #[inline]
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Look up a country by code
    #[must_use]
    pub fn get(&self, code: &CountryCode) -> Option<&Country> {
        self.index.get(code).map(|&i| &self.countries[i])
    }

    #[must_use]
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.index.contains_key(code)
    }

    /// Find a country by its canonical name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        let wanted = name.trim().to_lowercase();
        self.countries
            .iter()
            .find(|country| country.name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, code: &str) -> Country {
        Country::new(name, CountryCode::new(code).unwrap())
    }

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.countries().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn filters_out_territories() {
        let mut greenland = country("Greenland", "GL");
        greenland.sovereign = false;

        let catalog = Catalog::from_countries(vec![greenland, country("Denmark", "DK")]);

        assert_eq!(names(&catalog), ["Denmark"]);
        assert!(!catalog.contains(&CountryCode::new("GL").unwrap()));
    }

    #[test]
    fn keeps_first_of_duplicate_codes() {
        let catalog = Catalog::from_countries(vec![
            country("Chad", "TD"),
            country("Tchad", "TD"),
            country("Canada", "CA"),
        ]);

        assert_eq!(catalog.len(), 2);
        let chad = catalog.get(&CountryCode::new("TD").unwrap()).unwrap();
        assert_eq!(chad.name, "Chad");
    }

    #[test]
    fn sorts_accented_names_with_their_base_letters() {
        let catalog = Catalog::from_countries(vec![
            country("Cuba", "CU"),
            country("Côte d'Ivoire", "CI"),
            country("Costa Rica", "CR"),
            country("Croatia", "HR"),
        ]);

        assert_eq!(
            names(&catalog),
            ["Costa Rica", "Côte d'Ivoire", "Croatia", "Cuba"]
        );
    }

    #[test]
    fn sort_ignores_case() {
        let catalog = Catalog::from_countries(vec![country("bhutan", "BT"), country("Bahamas", "BS")]);
        assert_eq!(names(&catalog), ["Bahamas", "bhutan"]);
    }

    #[test]
    fn index_follows_sorted_order() {
        let catalog = Catalog::from_countries(vec![
            country("Zambia", "ZM"),
            country("Albania", "AL"),
        ]);

        assert_eq!(
            catalog.get(&CountryCode::new("ZM").unwrap()).unwrap().name,
            "Zambia"
        );
        assert_eq!(catalog.countries()[0].name, "Albania");
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        let catalog = Catalog::from_countries(vec![country("New Zealand", "NZ")]);
        assert_eq!(
            catalog.find_by_name("  new zealand ").map(|c| c.code.as_str()),
            Some("NZ")
        );
        assert!(catalog.find_by_name("zealand").is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::from_countries(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
