//! Terminal output formatting
//!
//! Display utilities for line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_celebration, print_resolution, print_round, print_status, print_suggestions,
};
