use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Feature name to score. Sorted so serialization and summation order are stable.
pub type FeatureScores = BTreeMap<String, f64>;

/// A city from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub features: FeatureScores,
}

impl City {
    pub fn new(name: impl Into<String>, features: FeatureScores) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Score for a feature, 0.0 when the city does not carry it
    pub fn score(&self, feature: &str) -> f64 {
        self.features.get(feature).copied().unwrap_or(0.0)
    }

    /// Key used for case-insensitive name lookup
    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.lookup_key() == name.to_lowercase()
    }
}
