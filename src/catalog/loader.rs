//! Country data parsing
//!
//! Turns the JSON published by the country data source into [`Country`]
//! records. Optional fields default instead of failing, and records with an
//! unusable code or name are skipped.

use crate::core::{Country, CountryCode, FlagImages};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{Catalog, CatalogError};

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    cca2: String,
    #[serde(default)]
    flags: RawFlags,
    #[serde(default)]
    capital: Option<Vec<String>>,
    #[serde(default)]
    population: Option<u64>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    independent: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFlags {
    #[serde(default)]
    png: Option<String>,
    #[serde(default)]
    svg: Option<String>,
}

impl RawCountry {
    fn into_country(self) -> Option<Country> {
        let code = match CountryCode::new(&self.cca2) {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!(code = %self.cca2, name = %self.name.common, "skipping country: {e}");
                return None;
            }
        };

        let name = self.name.common.trim().to_string();
        if name.is_empty() {
            tracing::debug!(%code, "skipping country with empty name");
            return None;
        }

        Some(Country {
            official_name: self.name.official.unwrap_or_else(|| name.clone()),
            name,
            code,
            flags: FlagImages {
                png: self.flags.png.unwrap_or_default(),
                svg: self.flags.svg.unwrap_or_default(),
            },
            capitals: self.capital.unwrap_or_default(),
            population: self.population.unwrap_or_default(),
            region: self.region.unwrap_or_default(),
            sovereign: self.independent.unwrap_or(false),
        })
    }
}

/// Parse the country data source's JSON array into country records
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the text is not a JSON array of
/// country objects.
pub fn parse_countries(json: &str) -> Result<Vec<Country>, CatalogError> {
    let raw: Vec<RawCountry> = serde_json::from_str(json)?;
    Ok(raw.into_iter().filter_map(RawCountry::into_country).collect())
}

/// Parse country JSON and build a catalog from it
///
/// # Errors
///
/// Returns an error if the JSON cannot be parsed or if no sovereign country
/// survives filtering.
pub fn catalog_from_json(json: &str) -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_countries(parse_countries(json)?);
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(catalog)
}

/// Load a catalog from a JSON file with the country data source's schema
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not usable.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    catalog_from_json(&content)
}
