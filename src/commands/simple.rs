//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Same rules, same daily progress.

use crate::catalog::Catalog;
use crate::game::{Effect, Event, GameState, Transition, suggest};
use crate::output::{print_celebration, print_resolution, print_round, print_suggestions};
use crate::session::{Clock, DailySessionStore, KeyValueStore};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Run the simple interactive CLI mode
///
/// Reads guesses line by line from `input` until it is exhausted, the player
/// quits, or every flag is completed for today.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, C, R, I, W>(
    catalog: &Catalog,
    sessions: &mut DailySessionStore<S, C>,
    poll_interval: Duration,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  The Flag Game - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Name the country for each flag. Hint-assisted answers break your streak.")?;
    writeln!(out, "Commands: '?text' for suggestions, ':hint' for a hint, ':quit' to exit\n")?;

    let loaded = sessions.startup();
    let completed = sessions.reconcile(&loaded, catalog);
    let mut state = GameState::new(completed)
        .apply(Event::Start, catalog, rng)
        .state;

    let mut last_poll = Instant::now();
    let mut current_input = String::new();
    let mut announce = true;

    loop {
        if let Some(total) = state.all_complete() {
            print_celebration(out, total)?;
            return Ok(());
        }

        if announce {
            if let Some(round) = state.round() {
                print_round(out, round.target(), state.remaining(catalog))?;
                announce = false;
            }
        }

        write!(out, "Your guess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        if last_poll.elapsed() >= poll_interval {
            last_poll = Instant::now();
            if let Some(fresh) = sessions.poll(state.completed()) {
                let fresh = sessions.reconcile(&fresh, catalog);
                state = state.apply(Event::DayRolledOver(fresh), catalog, rng).state;
            }
        }

        let line = line.trim();
        if let Some(prefix) = line.strip_prefix('?') {
            print_suggestions(out, &suggest(prefix, catalog))?;
            continue;
        }

        match line {
            ":quit" | ":q" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":hint" | ":h" => {
                let transition = state.apply(Event::Hint, catalog, rng);
                if let Some(revealed) = &transition.input {
                    writeln!(out, "💡 Hint: {revealed}   (press Enter to submit it as is)")?;
                    current_input.clone_from(revealed);
                }
                state = transition.state;
            }
            _ => {
                let guess = if line.is_empty() {
                    current_input.clone()
                } else {
                    line.to_string()
                };
                let transition = state.apply(Event::Submit(guess), catalog, rng);
                if let Some(resolution) = &transition.resolution {
                    print_resolution(out, resolution)?;
                    current_input.clear();
                    announce = true;
                }
                state = persist(sessions, transition);
            }
        }
    }
}

fn persist<S: KeyValueStore, C: Clock>(
    sessions: &mut DailySessionStore<S, C>,
    transition: Transition,
) -> GameState {
    for effect in transition.effects {
        match effect {
            Effect::PersistCompleted(completed) => sessions.save(&completed),
        }
    }
    transition.state
}
