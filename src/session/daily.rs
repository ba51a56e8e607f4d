//! Today's completed flags
//!
//! `DailySessionStore` owns the key-value store and the clock. All of its
//! operations swallow storage failures: they are logged and the session
//! carries on with whatever it has in memory.

use super::{Clock, DayKey, KeyValueStore};
use crate::catalog::Catalog;
use crate::core::CountryCode;
use rustc_hash::FxHashSet;

/// Codes of the countries solved without a hint today
pub type CompletedSet = FxHashSet<CountryCode>;

/// Persists and expires the daily completion set
#[derive(Debug)]
pub struct DailySessionStore<S, C> {
    store: S,
    clock: C,
    /// Day whose latest save failed; its progress exists only in memory
    unsaved: Option<DayKey>,
}

impl<S: KeyValueStore, C: Clock> DailySessionStore<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            unsaved: None,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn today_key(&self) -> DayKey {
        self.clock.today_key()
    }

    /// Purge stale days and load today's set
    ///
    /// This is what a front end runs once before the first round.
    pub fn startup(&mut self) -> CompletedSet {
        let today = self.today_key();
        self.purge_stale(&today);
        self.load_today()
    }

    /// Read today's set; anything unreadable counts as empty
    #[must_use]
    pub fn load_today(&self) -> CompletedSet {
        let key = self.today_key();
        let raw = match self.store.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CompletedSet::default(),
            Err(e) => {
                tracing::warn!(%key, "could not read daily progress: {e}");
                return CompletedSet::default();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(codes) => codes
                .iter()
                .filter_map(|code| CountryCode::new(code).ok())
                .collect(),
            Err(e) => {
                tracing::warn!(%key, "ignoring unreadable daily progress: {e}");
                CompletedSet::default()
            }
        }
    }

    /// Write the set under today's key; failures are logged and dropped
    pub fn save(&mut self, completed: &CompletedSet) {
        let key = self.today_key();
        let mut codes: Vec<&str> = completed.iter().map(CountryCode::as_str).collect();
        codes.sort_unstable();

        let value = match serde_json::to_string(&codes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%key, "could not encode daily progress: {e}");
                self.unsaved = Some(key);
                return;
            }
        };

        match self.store.set(key.as_str(), &value) {
            Ok(()) => {
                tracing::debug!(%key, completed = codes.len(), "saved daily progress");
                self.unsaved = None;
            }
            Err(e) => {
                tracing::warn!(%key, "could not save daily progress: {e}");
                self.unsaved = Some(key);
            }
        }
    }

    /// Delete every stored day other than `today`
    pub fn purge_stale(&mut self, today: &DayKey) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("could not list stored progress: {e}");
                return;
            }
        };

        for key in keys
            .iter()
            .filter(|key| DayKey::is_day_key(key) && key.as_str() != today.as_str())
        {
            match self.store.remove(key) {
                Ok(()) => tracing::info!(%key, "removed stale daily progress"),
                Err(e) => tracing::warn!(%key, "could not remove stale progress: {e}"),
            }
        }
    }

    /// Drop codes that are not in the catalog, persisting if anything changed
    pub fn reconcile(&mut self, completed: &CompletedSet, catalog: &Catalog) -> CompletedSet {
        let valid: CompletedSet = completed
            .iter()
            .filter(|code| catalog.contains(code))
            .cloned()
            .collect();

        if valid.len() != completed.len() {
            tracing::info!(
                dropped = completed.len() - valid.len(),
                "pruned completed flags missing from the catalog"
            );
            self.save(&valid);
        }
        valid
    }

    /// Rollover check, run on a timer
    ///
    /// Recomputes today's key, purges stale days and reloads. Returns the
    /// freshly loaded set only when it differs from `current`. While today's
    /// progress could not be saved, the in-memory set is kept as is.
    pub fn poll(&mut self, current: &CompletedSet) -> Option<CompletedSet> {
        let today = self.today_key();
        self.purge_stale(&today);

        if self.unsaved.as_ref() == Some(&today) {
            return None;
        }
        self.unsaved = None;

        let loaded = self.load_today();
        if loaded == *current {
            None
        } else {
            tracing::info!(%today, completed = loaded.len(), "daily progress changed");
            Some(loaded)
        }
    }

    /// Forget today's progress entirely
    pub fn clear_today(&mut self) {
        let key = self.today_key();
        if let Err(e) = self.store.remove(key.as_str()) {
            tracing::warn!(%key, "could not clear daily progress: {e}");
        }
    }
}
