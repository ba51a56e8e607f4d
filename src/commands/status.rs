//! Daily progress commands

use crate::catalog::Catalog;
use crate::output::print_status;
use crate::session::{Clock, DailySessionStore, KeyValueStore};
use colored::Colorize;
use std::io::{self, Write};

/// Print how many of today's flags are done
///
/// Codes that are no longer in the catalog are pruned first, exactly as they
/// would be when starting a game.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn run_status<S: KeyValueStore, C: Clock, W: Write>(
    catalog: &Catalog,
    sessions: &mut DailySessionStore<S, C>,
    out: &mut W,
) -> io::Result<()> {
    let loaded = sessions.startup();
    let completed = sessions.reconcile(&loaded, catalog);
    print_status(
        out,
        sessions.today_key().as_str(),
        completed.len(),
        catalog.len(),
    )
}

/// Forget everything completed today
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn run_reset<S: KeyValueStore, C: Clock, W: Write>(
    sessions: &mut DailySessionStore<S, C>,
    out: &mut W,
) -> io::Result<()> {
    let key = sessions.today_key();
    sessions.clear_today();
    tracing::info!(%key, "daily progress reset");
    writeln!(
        out,
        "{} Today's progress has been cleared.",
        "✓".green().bold()
    )
}
