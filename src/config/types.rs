//! Configuration types for the pricing calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::CurrencyFormat;
use crate::models::{PricingInput, TierSchedule};

/// Metadata about the calculator deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorMetadata {
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version of this configuration set.
    pub version: String,
    /// The BCP 47 locale the currency convention follows (e.g., "pt-BR").
    pub locale: String,
}

/// Structure of `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorFile {
    /// Calculator metadata.
    pub calculator: CalculatorMetadata,
    /// The currency display convention.
    pub currency: CurrencyFormat,
}

/// Structure of `defaults.yaml`: the values the calculator form starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default pricing parameters.
    pub input: PricingInput,
    /// Whether the seasonal discount starts switched on.
    #[serde(default)]
    pub apply_seasonal_discount: bool,
    /// Default bulk pricing tiers.
    #[serde(default)]
    pub tiers: TierSchedule,
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    metadata: CalculatorMetadata,
    currency: CurrencyFormat,
    defaults: DefaultsConfig,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(
        metadata: CalculatorMetadata,
        currency: CurrencyFormat,
        defaults: DefaultsConfig,
    ) -> Self {
        Self {
            metadata,
            currency,
            defaults,
        }
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the currency display convention.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    /// Returns the default form values.
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }
}
