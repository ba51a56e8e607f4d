//! Runtime configuration
//!
//! Resolved once in `main` from command-line flags (with environment
//! fallbacks) and handed to whichever command runs.

use crate::catalog::CatalogSource;
use crate::logging::LogTarget;
use std::path::PathBuf;
use std::time::Duration;

/// Default period of the day-rollover poll
pub const DEFAULT_POLL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: CatalogSource,
    /// JSON file holding the daily progress
    pub store_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: CatalogSource::default(),
            store_path: default_store_path(),
            log_file: None,
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
        }
    }
}

impl Config {
    /// Build from optional overrides, falling back to defaults
    ///
    /// A zero poll interval is raised to one second.
    #[must_use]
    pub fn from_overrides(
        countries: Option<&str>,
        store: Option<PathBuf>,
        log_file: Option<PathBuf>,
        poll_secs: u64,
    ) -> Self {
        Self {
            source: countries.map(CatalogSource::from_arg).unwrap_or_default(),
            store_path: store.unwrap_or_else(default_store_path),
            log_file,
            poll_interval: Duration::from_secs(poll_secs.max(1)),
        }
    }

    /// Where logs should go for the chosen front end
    ///
    /// The TUI owns the terminal, so it only logs when a file was given.
    #[must_use]
    pub fn log_target(&self, tui: bool) -> LogTarget {
        match (&self.log_file, tui) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Off,
            (None, false) => LogTarget::Stderr,
        }
    }
}

/// `<local data dir>/flag_game/progress.json`, or the working directory if there is none
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flag_game")
        .join("progress.json")
}
