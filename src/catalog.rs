//! City catalog
//!
//! The catalog is read once at startup from a JSON array of
//! `{ "name": ..., "features": { ... } }` objects and never changes afterwards.
//! It keeps the cities in file order and indexes them by lowercased name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::City;

/// Errors raised while loading or validating a catalog
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate city name (case-insensitive): {0}")]
    DuplicateCity(String),

    #[error("Non-finite score for feature {feature} of city {city}")]
    NonFiniteScore { city: String, feature: String },
}

/// Read-only collection of cities with case-insensitive lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: Vec<City>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names and non-finite scores
    pub fn from_cities(cities: Vec<City>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(cities.len());

        for (position, city) in cities.iter().enumerate() {
            if let Some((feature, _)) = city.features.iter().find(|(_, v)| !v.is_finite()) {
                return Err(CatalogError::NonFiniteScore {
                    city: city.name.clone(),
                    feature: feature.clone(),
                });
            }

            if by_name.insert(city.lookup_key(), position).is_some() {
                return Err(CatalogError::DuplicateCity(city.name.clone()));
            }
        }

        Ok(Self { cities, by_name })
    }

    /// Loads and validates a catalog from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let cities: Vec<City> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_cities(cities)?;

        if catalog.is_empty() {
            tracing::warn!(path = %path.display(), "Catalog is empty");
        } else {
            tracing::info!(
                path = %path.display(),
                cities = catalog.len(),
                "Catalog loaded"
            );
        }

        Ok(catalog)
    }

    /// Case-insensitive lookup by name
    pub fn get(&self, name: &str) -> Option<&City> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&position| &self.cities[position])
    }

    /// City names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.cities.iter().map(|city| city.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
