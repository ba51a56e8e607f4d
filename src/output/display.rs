//! Display functions for line-mode output

use super::formatters::{create_progress_bar, flag_count, outcome_label};
use crate::core::Country;
use crate::game::{Outcome, Resolution};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of a scored guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_resolution<W: Write>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    let label = outcome_label(resolution.outcome);
    match resolution.outcome {
        Outcome::Correct | Outcome::CorrectWithHint => writeln!(
            out,
            "🎉 {} That is {}!",
            label.green().bold(),
            resolution.answer.bright_white().bold()
        )?,
        Outcome::Incorrect => writeln!(
            out,
            "😢 {} That was {}.",
            label.red().bold(),
            resolution.answer.bright_white().bold()
        )?,
    }
    writeln!(out, "   Streak: {}", resolution.streak.to_string().cyan())
}

/// Print the prompt header for a new flag
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round<W: Write>(out: &mut W, target: &Country, remaining: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "  {}   What country is this?   ({} remaining today)",
        target.code.flag_emoji(),
        flag_count(remaining)
    )?;
    if !target.flags.png.is_empty() {
        writeln!(out, "  {}", target.flags.png.bright_black())?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print autocomplete suggestions
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_suggestions<W: Write>(out: &mut W, suggestions: &[&Country]) -> io::Result<()> {
    if suggestions.is_empty() {
        return writeln!(out, "  (no matching countries)");
    }
    for country in suggestions {
        writeln!(out, "  • {}", country.name)?;
    }
    Ok(())
}

/// Print today's progress
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_status<W: Write>(
    out: &mut W,
    day: &str,
    completed: usize,
    total: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} {}", "DAILY PROGRESS:".bright_cyan().bold(), day)?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let pct = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    writeln!(
        out,
        "\n   [{}] {completed}/{total} ({pct:.1}%)",
        create_progress_bar(completed as f64, total as f64, 30).green()
    )?;
    writeln!(
        out,
        "   {} remaining today",
        flag_count(total.saturating_sub(completed))
    )
}

/// Print the all-complete banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_celebration<W: Write>(out: &mut W, total: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🏆  LEGENDARY ACHIEVEMENT UNLOCKED!  🏆    "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  You have conquered all {} today!",
        flag_count(total).bright_yellow().bold()
    )?;
    writeln!(out, "  Come back tomorrow for a fresh challenge!\n")
}
