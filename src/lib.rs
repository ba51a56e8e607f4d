//! The Flag Game
//!
//! A daily flag guessing game: name the country behind a random flag, keep a
//! streak going, and work through every sovereign country once per day.
//!
//! # Quick Start
//!
//! ```rust
//! use flag_game::catalog::Catalog;
//! use flag_game::core::{Country, CountryCode};
//! use flag_game::game::{Event, GameState, Outcome};
//! use rand::SeedableRng;
//!
//! let catalog = Catalog::from_countries(vec![
//!     Country::new("Chad", CountryCode::new("TD").unwrap()),
//! ]);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//!
//! let state = GameState::default().apply(Event::Start, &catalog, &mut rng).state;
//! let t = state.apply(Event::Submit("chad".into()), &catalog, &mut rng);
//! assert_eq!(t.resolution.unwrap().outcome, Outcome::Correct);
//! assert_eq!(t.state.all_complete(), Some(1));
//! ```

// Core domain types
pub mod core;

// Country list
pub mod catalog;

// Daily progress persistence
pub mod session;

// Game rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime configuration and logging
pub mod config;
pub mod logging;
