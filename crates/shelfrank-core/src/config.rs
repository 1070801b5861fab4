use crate::criteria::keys;
use crate::weights::WeightVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    pub fn load_from(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        let config_path = path.unwrap_or_else(|| std::path::Path::new(".shelfrank.yml"));
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            config.weights.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

/// Default weight per criterion. The split carries over from the library's
/// criteria catalog: borrower count dominates, loan duration counts least.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_borrower_count")]
    pub borrower_count: f64,
    #[serde(default = "default_category_rating")]
    pub category_rating: f64,
    #[serde(default = "default_condition")]
    pub condition: f64,
    #[serde(default = "default_relevance")]
    pub relevance: f64,
    #[serde(default = "default_loan_duration")]
    pub loan_duration: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            borrower_count: default_borrower_count(),
            category_rating: default_category_rating(),
            condition: default_condition(),
            relevance: default_relevance(),
            loan_duration: default_loan_duration(),
        }
    }
}

impl WeightsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range("weights.borrower_count", self.borrower_count, 0.0, 1.0)?;
        validate_range("weights.category_rating", self.category_rating, 0.0, 1.0)?;
        validate_range("weights.condition", self.condition, 0.0, 1.0)?;
        validate_range("weights.relevance", self.relevance, 0.0, 1.0)?;
        validate_range("weights.loan_duration", self.loan_duration, 0.0, 1.0)?;
        Ok(())
    }

    pub fn to_weight_vector(&self) -> WeightVector {
        WeightVector::new()
            .with(keys::BORROWER_COUNT, self.borrower_count)
            .with(keys::CATEGORY_RATING, self.category_rating)
            .with(keys::CONDITION, self.condition)
            .with(keys::RELEVANCE, self.relevance)
            .with(keys::LOAN_DURATION, self.loan_duration)
    }
}

fn validate_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn default_borrower_count() -> f64 {
    0.30
}

fn default_category_rating() -> f64 {
    0.20
}

fn default_condition() -> f64 {
    0.15
}

fn default_relevance() -> f64 {
    0.25
}

fn default_loan_duration() -> f64 {
    0.10
}
