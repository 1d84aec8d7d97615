//! Request types for the Pricing Engine API.
//!
//! This module defines the JSON request structures for the `/quote` and
//! `/bulk-price` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DefaultsConfig;
use crate::models::{PricingInput, PricingTier};

/// Request body for the `/quote` endpoint.
///
/// Mirrors the calculator form: the typed inputs, the seasonal discount
/// switch and the editable tier rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The pricing parameters as typed into the form.
    pub input: PricingInput,
    /// Whether the seasonal discount switch is on.
    #[serde(default)]
    pub apply_seasonal_discount: bool,
    /// Bulk tiers; the configured defaults are used when omitted.
    #[serde(default)]
    pub tiers: Option<Vec<PricingTier>>,
    /// Extra order quantities to price after the tier rows.
    #[serde(default)]
    pub quantities: Vec<u32>,
}

impl QuoteRequest {
    /// Returns the input to price, with the seasonal toggle applied.
    pub fn effective_input(&self) -> PricingInput {
        self.input.with_seasonal_toggle(self.apply_seasonal_discount)
    }
}

impl From<&DefaultsConfig> for QuoteRequest {
    fn from(defaults: &DefaultsConfig) -> Self {
        QuoteRequest {
            input: defaults.input.clone(),
            apply_seasonal_discount: defaults.apply_seasonal_discount,
            tiers: Some(defaults.tiers.tiers().to_vec()),
            quantities: Vec::new(),
        }
    }
}

/// Request body for the `/bulk-price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPriceRequest {
    /// The unit selling price before bulk discounts.
    pub base_price: Decimal,
    /// The order quantity to price.
    pub quantity: u32,
    /// The discount tiers to choose from.
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_quote_request() {
        let json = r#"{
            "input": {
                "base_cost": "10",
                "profit_margin_percent": "30",
                "operational_cost": "15",
                "operational_cost_is_percentage": true,
                "credit_card_fee_percent": "2.9",
                "seasonal_discount_percent": "10",
                "tax_rate_percent": "8.25"
            },
            "apply_seasonal_discount": true,
            "tiers": [
                { "quantity_threshold": 10, "discount_percent": "5" }
            ],
            "quantities": [25]
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.apply_seasonal_discount);
        assert_eq!(request.tiers.as_ref().unwrap().len(), 1);
        assert_eq!(request.quantities, vec![25]);
        assert_eq!(request.effective_input().seasonal_discount_percent, dec("10"));
    }

    #[test]
    fn test_seasonal_switch_defaults_off() {
        let json = r#"{
            "input": {
                "base_cost": 10,
                "profit_margin_percent": 30,
                "operational_cost": 15,
                "operational_cost_is_percentage": true,
                "credit_card_fee_percent": "2.9",
                "seasonal_discount_percent": 10,
                "tax_rate_percent": "8.25"
            }
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(!request.apply_seasonal_discount);
        assert!(request.tiers.is_none());
        assert_eq!(
            request.effective_input().seasonal_discount_percent,
            Decimal::ZERO
        );
    }

    #[test]
    fn test_quote_request_from_defaults() {
        let loader = ConfigLoader::builtin();
        let request = QuoteRequest::from(loader.defaults());

        assert_eq!(request.input.base_cost, dec("10"));
        assert_eq!(request.tiers.unwrap().len(), 3);
        assert!(request.quantities.is_empty());
    }

    #[test]
    fn test_deserialize_bulk_price_request() {
        let json = r#"{
            "base_price": "100",
            "quantity": 75,
            "tiers": [
                { "quantity_threshold": 50, "discount_percent": "10" }
            ]
        }"#;

        let request: BulkPriceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_price, dec("100"));
        assert_eq!(request.quantity, 75);
        assert_eq!(request.tiers[0], PricingTier::new(50, dec("10")));
    }
}
