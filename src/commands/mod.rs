//! Command implementations

pub mod load;
pub mod simple;
pub mod status;
pub mod suggest;

pub use load::load_catalog;
pub use simple::run_simple;
pub use status::{run_reset, run_status};
pub use suggest::run_suggest;
