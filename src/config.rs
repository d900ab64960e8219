//! Bot and pairlist configuration
//!
//! Typed configuration for the pairlist pipeline, loaded from a JSON file.
//! Each pipeline stage is named by method with its remaining keys passed
//! through as stage-specific options.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur loading bot configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Semantic validation failure
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One entry in the ordered `pairlists` pipeline section.
///
/// `method` selects the filter implementation; every other key in the entry
/// is collected into `options` and deserialized by that filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairlistEntry {
    pub method: String,
    #[serde(flatten)]
    pub options: Value,
}

/// Global bot configuration (the slice of it this pipeline needs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// The single currency the bot stakes trades in (e.g. "USDT"). Used as
    /// the fallback when a filter has no currency list of its own.
    pub stake_currency: String,

    /// Candidate pairs fed into the first pipeline stage.
    #[serde(default)]
    pub pair_whitelist: Vec<String>,

    /// Ordered filter pipeline.
    #[serde(default = "default_pairlists")]
    pub pairlists: Vec<PairlistEntry>,
}

fn default_pairlists() -> Vec<PairlistEntry> {
    vec![PairlistEntry {
        method: "CurrencyFilter".to_string(),
        options: Value::Object(serde_json::Map::new()),
    }]
}

impl BotConfig {
    /// Load and validate configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.stake_currency.is_empty() {
            return Err("stake_currency cannot be empty".to_string());
        }
        if self.pairlists.is_empty() {
            return Err("pairlists must contain at least one stage".to_string());
        }
        for entry in &self.pairlists {
            if entry.method.is_empty() {
                return Err("pairlist entry is missing a method name".to_string());
            }
        }
        Ok(())
    }
}

/// Options for the currency filter stage.
///
/// When `available_currencies` is omitted, the filter falls back to the
/// bot's configured stake currency. An explicitly empty list is kept as-is
/// so the filter can reject it as a setup mistake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyFilterConfig {
    #[serde(default)]
    pub available_currencies: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_is_valid() {
        let config: BotConfig = serde_json::from_str(r#"{"stake_currency": "USDT"}"#).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.pairlists.len(), 1);
        assert_eq!(config.pairlists[0].method, "CurrencyFilter");
    }

    #[test]
    fn test_empty_stake_currency_invalid() {
        let config: BotConfig = serde_json::from_str(r#"{"stake_currency": ""}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_pipeline_invalid() {
        let config: BotConfig =
            serde_json::from_str(r#"{"stake_currency": "USDT", "pairlists": []}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_entry_options_are_flattened() {
        let config: BotConfig = serde_json::from_str(
            r#"{
                "stake_currency": "USDT",
                "pair_whitelist": ["BTC/USDT"],
                "pairlists": [
                    {"method": "CurrencyFilter", "available_currencies": ["USDT", "USD"]}
                ]
            }"#,
        )
        .unwrap();

        let entry = &config.pairlists[0];
        let options: CurrencyFilterConfig = serde_json::from_value(entry.options.clone()).unwrap();
        assert_eq!(
            options.available_currencies,
            Some(vec!["USDT".to_string(), "USD".to_string()])
        );
    }

    #[test]
    fn test_omitted_currency_list_is_none() {
        let options: CurrencyFilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(options.available_currencies, None);
    }

    #[test]
    fn test_explicit_empty_currency_list_is_kept() {
        let options: CurrencyFilterConfig =
            serde_json::from_str(r#"{"available_currencies": []}"#).unwrap();
        assert_eq!(options.available_currencies, Some(Vec::new()));
    }
}
