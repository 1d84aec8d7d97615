//! Bulk pricing tier models.
//!
//! This module defines the [`PricingTier`] breakpoint and the caller-owned
//! [`TierSchedule`] that holds an ordered list of them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A quantity breakpoint and the discount it unlocks.
///
/// # Example
///
/// ```
/// use pricing_engine::models::PricingTier;
/// use rust_decimal::Decimal;
///
/// let tier = PricingTier::new(50, Decimal::TEN);
/// assert_eq!(tier.quantity_threshold, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    /// The minimum order quantity that qualifies for this tier.
    pub quantity_threshold: u32,
    /// The discount applied to the unit price, as a percentage.
    pub discount_percent: Decimal,
}

impl PricingTier {
    /// Creates a tier from a threshold and discount percentage.
    pub fn new(quantity_threshold: u32, discount_percent: Decimal) -> Self {
        Self {
            quantity_threshold,
            discount_percent,
        }
    }

    /// Checks that the discount is within 0..=100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.discount_percent < Decimal::ZERO || self.discount_percent > Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid_input(
                "discount_percent",
                format!(
                    "tier at quantity {} must have a discount between 0 and 100 (got {})",
                    self.quantity_threshold, self.discount_percent
                ),
            ));
        }
        Ok(())
    }
}

impl Default for PricingTier {
    fn default() -> Self {
        Self::new(0, Decimal::ZERO)
    }
}

/// A single editable field of a tier row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierField {
    /// Replace the quantity threshold.
    Quantity(u32),
    /// Replace the discount percentage.
    Discount(Decimal),
}

/// An ordered, caller-owned list of tiers with add/edit operations.
///
/// Thresholds are not required to be unique; lookups resolve duplicates by
/// taking the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSchedule {
    tiers: Vec<PricingTier>,
}

impl TierSchedule {
    /// Creates a schedule from an existing list of tiers.
    pub fn new(tiers: Vec<PricingTier>) -> Self {
        Self { tiers }
    }

    /// Appends an empty (0 units, 0%) row and returns its index.
    pub fn add_tier(&mut self) -> usize {
        self.tiers.push(PricingTier::default());
        self.tiers.len() - 1
    }

    /// Updates one field of the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `index` does not refer to an existing row.
    pub fn edit_tier(&mut self, index: usize, field: TierField) -> EngineResult<()> {
        let len = self.tiers.len();
        let tier = self.tiers.get_mut(index).ok_or_else(|| {
            EngineError::invalid_input(
                "tier_index",
                format!("no tier at index {} (schedule has {} tiers)", index, len),
            )
        })?;

        match field {
            TierField::Quantity(quantity) => tier.quantity_threshold = quantity,
            TierField::Discount(discount) => tier.discount_percent = discount,
        }
        Ok(())
    }

    /// Returns the tiers in insertion order.
    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// Consumes the schedule, returning the underlying tiers.
    pub fn into_tiers(self) -> Vec<PricingTier> {
        self.tiers
    }

    /// Returns true if there are no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Returns the number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }
}
