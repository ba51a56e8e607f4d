//! Interactive terminal UI
//!
//! The default way to play: a ratatui front end over the game rules.

mod app;
mod rendering;

pub use app::{App, NOTIFICATION_TTL, Notification, Phase, run_tui};
pub use rendering::ui;
