//! Core domain types for the flag game
//!
//! Country records and their identity codes. Everything here is plain data with
//! no I/O, so the rest of the crate can build on it freely.

mod code;
mod country;

pub use code::{CountryCode, CountryCodeError};
pub use country::{Country, FlagImages};
