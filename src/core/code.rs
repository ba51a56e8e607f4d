//! Two-letter country codes
//!
//! A `CountryCode` is the identity key of a country: the ISO 3166-1 alpha-2
//! code as published by the country data source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, uppercase two-letter country code (e.g. `CA`, `TD`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

/// Error type for invalid country codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryCodeError {
    #[error("country code must be exactly 2 letters, got {0}")]
    InvalidLength(usize),
    #[error("country code must contain only ASCII letters")]
    InvalidCharacters,
}

impl CountryCode {
    /// Create a code from text, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `CountryCodeError` if the trimmed text is not exactly two ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use flag_game::core::CountryCode;
    ///
    /// let code = CountryCode::new("ca").unwrap();
    /// assert_eq!(code.as_str(), "CA");
    ///
    /// assert!(CountryCode::new("CAN").is_err());
    /// assert!(CountryCode::new("C1").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CountryCodeError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != 2 {
            return Err(CountryCodeError::InvalidLength(len));
        }
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError::InvalidCharacters);
        }
        Ok(Self(text.to_ascii_uppercase()))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The flag emoji for this code, built from regional indicator symbols
    ///
    /// ```
    /// use flag_game::core::CountryCode;
    ///
    /// let code = CountryCode::new("TD").unwrap();
    /// assert_eq!(code.flag_emoji(), "\u{1F1F9}\u{1F1E9}");
    /// ```
    #[must_use]
    pub fn flag_emoji(&self) -> String {
        self.0
            .bytes()
            .filter_map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
            .collect()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}
