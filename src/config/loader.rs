//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::calculation::CurrencyFormat;
use crate::error::{EngineError, EngineResult};
use crate::models::{PricingInput, PricingTier, TierSchedule};

use super::types::{CalculatorConfig, CalculatorFile, CalculatorMetadata, DefaultsConfig};

/// Loads and provides access to calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calculator.yaml  # Metadata and currency convention
/// └── defaults.yaml    # Starting form values and bulk tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Calculator: {}", loader.metadata().name);
/// println!("Default tiers: {}", loader.defaults().tiers.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The default input or tiers fail validation (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculator_path = path.join("calculator.yaml");
        let calculator = Self::load_yaml::<CalculatorFile>(&calculator_path)?;

        let defaults_path = path.join("defaults.yaml");
        let defaults = Self::load_yaml::<DefaultsConfig>(&defaults_path)?;
        Self::validate_defaults(&defaults, &defaults_path)?;

        let config = CalculatorConfig::new(calculator.calculator, calculator.currency, defaults);

        Ok(Self { config })
    }

    /// Returns the built-in configuration without touching the filesystem.
    ///
    /// These are the starting values of the original calculator form:
    /// cost 10, margin 30%, operational cost 15%, card fee 2.9%, tax 8.25%,
    /// seasonal discount off, tiers at 10/50/100 units for 5/10/15% off.
    pub fn builtin() -> Self {
        let metadata = CalculatorMetadata {
            name: "Pricing Calculator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            locale: "pt-BR".to_string(),
        };

        let defaults = DefaultsConfig {
            input: PricingInput {
                base_cost: Decimal::new(10, 0),
                profit_margin_percent: Decimal::new(30, 0),
                operational_cost: Decimal::new(15, 0),
                operational_cost_is_percentage: true,
                credit_card_fee_percent: Decimal::new(29, 1),
                seasonal_discount_percent: Decimal::ZERO,
                tax_rate_percent: Decimal::new(825, 2),
            },
            apply_seasonal_discount: false,
            tiers: TierSchedule::new(vec![
                PricingTier::new(10, Decimal::new(5, 0)),
                PricingTier::new(50, Decimal::new(10, 0)),
                PricingTier::new(100, Decimal::new(15, 0)),
            ]),
        };

        Self {
            config: CalculatorConfig::new(metadata, CurrencyFormat::brl(), defaults),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_defaults(defaults: &DefaultsConfig, path: &Path) -> EngineResult<()> {
        let as_parse_error = |e: EngineError| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        defaults
            .input
            .with_seasonal_toggle(defaults.apply_seasonal_discount)
            .validate()
            .map_err(as_parse_error)?;

        for tier in defaults.tiers.tiers() {
            tier.validate().map_err(as_parse_error)?;
        }

        Ok(())
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        self.config.metadata()
    }

    /// Returns the currency display convention.
    pub fn currency(&self) -> &CurrencyFormat {
        self.config.currency()
    }

    /// Returns the default form values.
    pub fn defaults(&self) -> &DefaultsConfig {
        self.config.defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "Pricing Calculator");
        assert_eq!(loader.metadata().locale, "pt-BR");
    }

    #[test]
    fn test_loaded_currency_is_brl() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.currency(), &CurrencyFormat::brl());
        assert_eq!(loader.currency().format(dec("1234.5")), "R$\u{a0}1.234,50");
    }

    #[test]
    fn test_loaded_defaults_match_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin();

        assert_eq!(loader.defaults(), builtin.defaults());
    }

    #[test]
    fn test_loaded_default_input_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let input = &loader.defaults().input;

        assert_eq!(input.base_cost, dec("10"));
        assert_eq!(input.credit_card_fee_percent, dec("2.9"));
        assert_eq!(input.tax_rate_percent, dec("8.25"));
        assert!(input.operational_cost_is_percentage);
        assert!(!loader.defaults().apply_seasonal_discount);
    }

    #[test]
    fn test_loaded_default_tiers() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tiers = loader.defaults().tiers.tiers();

        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0], PricingTier::new(10, dec("5")));
        assert_eq!(tiers[2], PricingTier::new(100, dec("15")));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_defaults_file_returns_error() {
        let result = ConfigLoader::load("./tests/fixtures/missing_defaults");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("defaults.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::load("./tests/fixtures/malformed");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("calculator.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_defaults_returns_parse_error() {
        let result = ConfigLoader::load("./tests/fixtures/invalid_defaults");

        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("defaults.yaml"));
                assert!(message.contains("profit_margin_percent"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_defaults_are_valid() {
        let builtin = ConfigLoader::builtin();
        assert!(builtin.defaults().input.validate().is_ok());
        assert_eq!(builtin.currency().currency_code, "BRL");
    }
}
