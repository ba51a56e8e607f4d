//! Storage keys derived from the calendar date

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Prefix shared by every daily-session key
pub const KEY_PREFIX: &str = "flag-game-";

/// Storage key for one calendar day
///
/// Stable within a day and different across every midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayKey(String);

impl DayKey {
    /// ```
    /// use chrono::NaiveDate;
    /// use flag_game::session::DayKey;
    ///
    /// let key = DayKey::for_date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
    /// assert_eq!(key.as_str(), "flag-game-2026-03-07");
    /// ```
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self(format!(
            "{KEY_PREFIX}{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a stored key belongs to the daily session at all
    #[must_use]
    pub fn is_day_key(key: &str) -> bool {
        key.starts_with(KEY_PREFIX)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn differs_across_midnight() {
        let before = DayKey::for_date(date(2025, 12, 31));
        let after = DayKey::for_date(date(2026, 1, 1));
        assert_ne!(before, after);
        assert_eq!(after.as_str(), "flag-game-2026-01-01");
    }

    #[test]
    fn padding_keeps_keys_unambiguous() {
        // 2026-1-11 and 2026-11-1 must not collide
        assert_ne!(
            DayKey::for_date(date(2026, 1, 11)),
            DayKey::for_date(date(2026, 11, 1))
        );
    }

    #[test]
    fn recognizes_own_keys() {
        assert!(DayKey::is_day_key("flag-game-2026-10-18"));
        assert!(!DayKey::is_day_key("theme"));
    }
}
