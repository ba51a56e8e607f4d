//! Catalog loading for line-mode commands

use crate::catalog::{Catalog, CatalogSource};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Load the catalog while showing a spinner on stderr
///
/// # Errors
///
/// Returns an error if the catalog cannot be built from `source`.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Loading countries and flags...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = source.load();
    pb.finish_and_clear();

    result.with_context(|| format!("could not load countries from {}", source.describe()))
}
