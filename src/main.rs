//! The Flag Game - CLI
//!
//! Daily flag guessing with a TUI (default) and a plain line mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use flag_game::{
    commands::{load_catalog, run_reset, run_simple, run_status, run_suggest},
    config::{Config, DEFAULT_POLL_SECS},
    logging,
    session::{DailySessionStore, FileStore, SystemClock},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flag_game",
    about = "Guess the country behind each flag, once per flag per day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Country data: an http(s) URL or a path to a JSON file
    #[arg(short, long, global = true, env = "FLAG_GAME_COUNTRIES")]
    countries: Option<String>,

    /// File that stores today's progress
    #[arg(short, long, global = true, env = "FLAG_GAME_STORE")]
    store: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, env = "FLAG_GAME_LOG")]
    log_file: Option<PathBuf>,

    /// Seconds between checks for a new day
    #[arg(long, global = true, env = "FLAG_GAME_POLL_SECS", default_value_t = DEFAULT_POLL_SECS)]
    poll_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show today's progress
    Status,

    /// Print autocomplete suggestions for a partial name
    Suggest {
        /// Beginning of a country name, or of any word in it
        query: String,
    },

    /// Clear today's progress
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_overrides(
        cli.countries.as_deref(),
        cli.store,
        cli.log_file,
        cli.poll_secs,
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(&config.log_target(matches!(command, Commands::Play)))?;
    tracing::debug!(?config, "starting");

    let mut sessions = DailySessionStore::new(FileStore::new(&config.store_path), SystemClock);

    match command {
        Commands::Play => run_play_command(&config, sessions),
        Commands::Simple => {
            let catalog = load_catalog(&config.source)?;
            run_simple(
                &catalog,
                &mut sessions,
                config.poll_interval,
                &mut rand::rng(),
                &mut io::stdin().lock(),
                &mut io::stdout(),
            )
        }
        Commands::Status => {
            let catalog = load_catalog(&config.source)?;
            run_status(&catalog, &mut sessions, &mut io::stdout())?;
            Ok(())
        }
        Commands::Suggest { query } => {
            let catalog = load_catalog(&config.source)?;
            run_suggest(&query, &catalog, &mut io::stdout())?;
            Ok(())
        }
        Commands::Reset => {
            run_reset(&mut sessions, &mut io::stdout())?;
            Ok(())
        }
    }
}

fn run_play_command(
    config: &Config,
    sessions: DailySessionStore<FileStore, SystemClock>,
) -> Result<()> {
    use flag_game::interactive::{App, run_tui};

    let app = App::new(config.source.clone(), sessions, config.poll_interval);
    run_tui(app)
}
