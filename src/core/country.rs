//! Country records
//!
//! A `Country` is one flag-guessing target. Only the name, code and
//! sovereignty drive the game; the rest is carried along for display.

use super::CountryCode;

/// Flag image references published by the country data source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagImages {
    pub png: String,
    pub svg: String,
}

/// A country as used by the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Canonical display name, also the expected answer
    pub name: String,
    pub official_name: String,
    pub code: CountryCode,
    pub flags: FlagImages,
    pub capitals: Vec<String>,
    pub population: u64,
    pub region: String,
    pub sovereign: bool,
}

impl Country {
    /// Create a sovereign country with only a name and a code
    ///
    /// Handy for building small catalogs by hand.
    ///
    /// ```
    /// use flag_game::core::{Country, CountryCode};
    ///
    /// let chad = Country::new("Chad", CountryCode::new("TD").unwrap());
    /// assert!(chad.sovereign);
    /// assert_eq!(chad.name_len(), 4);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, code: CountryCode) -> Self {
        let name = name.into();
        Self {
            official_name: name.clone(),
            name,
            code,
            flags: FlagImages::default(),
            capitals: Vec::new(),
            population: 0,
            region: String::new(),
            sovereign: true,
        }
    }

    /// Length of the canonical name in characters
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    /// The first `count` characters of the canonical name
    ///
    /// Works on characters, so names with accents are never cut mid-sequence.
    #[must_use]
    pub fn name_prefix(&self, count: usize) -> String {
        self.name.chars().take(count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, code: &str) -> Country {
        Country::new(name, CountryCode::new(code).unwrap())
    }

    #[test]
    fn name_prefix_counts_characters() {
        let ivory = country("Côte d'Ivoire", "CI");
        assert_eq!(ivory.name_prefix(2), "Cô");
        assert_eq!(ivory.name_len(), 13);
    }

    #[test]
    fn name_prefix_saturates_at_full_name() {
        let chad = country("Chad", "TD");
        assert_eq!(chad.name_prefix(0), "");
        assert_eq!(chad.name_prefix(10), "Chad");
    }
}
