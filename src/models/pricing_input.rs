//! Pricing input model.
//!
//! This module defines the [`PricingInput`] snapshot the caller hands to the
//! calculator on every recompute.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A snapshot of every parameter that feeds the selling price calculation.
///
/// The caller owns and rebuilds this on each recompute; the engine never
/// keeps a reference to it.
///
/// # Example
///
/// ```
/// use pricing_engine::models::PricingInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PricingInput {
///     base_cost: Decimal::from_str("10").unwrap(),
///     profit_margin_percent: Decimal::from_str("30").unwrap(),
///     operational_cost: Decimal::from_str("15").unwrap(),
///     operational_cost_is_percentage: true,
///     credit_card_fee_percent: Decimal::from_str("2.9").unwrap(),
///     seasonal_discount_percent: Decimal::ZERO,
///     tax_rate_percent: Decimal::from_str("8.25").unwrap(),
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInput {
    /// The producer's cost for one unit before any markup.
    pub base_cost: Decimal,
    /// Target profit as a percentage of the final price. Must stay below 100.
    pub profit_margin_percent: Decimal,
    /// Overhead, either a percentage or an absolute amount per unit.
    pub operational_cost: Decimal,
    /// Whether `operational_cost` is a percentage (`true`) or an amount (`false`).
    pub operational_cost_is_percentage: bool,
    /// Card processor fee as a percentage.
    pub credit_card_fee_percent: Decimal,
    /// Seasonal discount as a percentage; zero when the discount is off.
    #[serde(default)]
    pub seasonal_discount_percent: Decimal,
    /// Sales tax as a percentage.
    pub tax_rate_percent: Decimal,
}

impl PricingInput {
    /// Returns a copy with the seasonal discount zeroed unless `active`.
    ///
    /// The form keeps the typed discount while the toggle is off; only the
    /// priced input drops it.
    pub fn with_seasonal_toggle(&self, active: bool) -> Self {
        let mut input = self.clone();
        if !active {
            input.seasonal_discount_percent = Decimal::ZERO;
        }
        input
    }

    /// Checks that every field is inside the range the calculator can price.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field when:
    /// - `base_cost` is negative
    /// - `profit_margin_percent` is 100 or more
    /// - `operational_cost`, `credit_card_fee_percent` or `tax_rate_percent` is negative
    /// - `seasonal_discount_percent` is outside 0..=100
    /// - `base_cost` is zero while the operational cost is an absolute amount
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_cost < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "base_cost",
                format!("must not be negative (got {})", self.base_cost),
            ));
        }

        if self.profit_margin_percent >= Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid_input(
                "profit_margin_percent",
                format!("must be below 100 (got {})", self.profit_margin_percent),
            ));
        }

        ensure_non_negative("operational_cost", self.operational_cost)?;
        ensure_non_negative("credit_card_fee_percent", self.credit_card_fee_percent)?;
        ensure_non_negative("tax_rate_percent", self.tax_rate_percent)?;

        if self.seasonal_discount_percent < Decimal::ZERO
            || self.seasonal_discount_percent > Decimal::ONE_HUNDRED
        {
            return Err(EngineError::invalid_input(
                "seasonal_discount_percent",
                format!(
                    "must be between 0 and 100 (got {})",
                    self.seasonal_discount_percent
                ),
            ));
        }

        if !self.operational_cost_is_percentage && self.base_cost.is_zero() {
            return Err(EngineError::invalid_input(
                "base_cost",
                "must be greater than zero when operational cost is an absolute amount",
            ));
        }

        Ok(())
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    Ok(())
}
