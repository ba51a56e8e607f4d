//! Where the catalog comes from
//!
//! Production runs fetch the country list over HTTP once at startup; a local
//! JSON file with the same schema works offline.

use super::{Catalog, CatalogError, loader};
use std::path::PathBuf;
use std::time::Duration;

/// Country data endpoint, restricted to the fields the game uses
pub const DEFAULT_SOURCE_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca2,flags,capital,population,region,independent";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A source the catalog can be (re)built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetch JSON from an HTTP(S) endpoint
    Http(String),
    /// Read JSON from a local file
    File(PathBuf),
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::Http(DEFAULT_SOURCE_URL.to_string())
    }
}

impl CatalogSource {
    /// Interpret a command-line value: URLs become HTTP sources, anything else a file path
    ///
    /// ```
    /// use flag_game::catalog::CatalogSource;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(
    ///     CatalogSource::from_arg("https://example.com/all"),
    ///     CatalogSource::Http("https://example.com/all".to_string())
    /// );
    /// assert_eq!(
    ///     CatalogSource::from_arg("countries.json"),
    ///     CatalogSource::File(PathBuf::from("countries.json"))
    /// );
    /// ```
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            Self::Http(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Build a fresh catalog from this source
    ///
    /// Blocks until the whole catalog is available; a partial catalog is never
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the data cannot be fetched or read, cannot
    /// be parsed, or contains no sovereign country.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self {
            Self::Http(url) => fetch(url)?,
            Self::File(path) => loader::load_from_file(path)?,
        };
        tracing::info!(countries = catalog.len(), source = %self.describe(), "catalog loaded");
        Ok(catalog)
    }

    /// Short human-readable description for logs and status output
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

fn fetch(url: &str) -> Result<Catalog, CatalogError> {
    let http_error = |e: reqwest::Error| CatalogError::Http {
        url: url.to_string(),
        message: e.to_string(),
    };

    tracing::debug!(%url, "fetching countries");
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(http_error)?;

    let response = client.get(url).send().map_err(http_error)?;
    if !response.status().is_success() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().map_err(http_error)?;
    loader::catalog_from_json(&body)
}
