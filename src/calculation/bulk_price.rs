//! Bulk price resolution.
//!
//! This module picks the discount tier that applies to an order quantity and
//! prices the bulk table rows shown next to the selling price.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, BulkPriceLine, PricingTier};

use super::currency::CurrencyFormat;

/// The priced bulk table, including the audit steps for each row.
#[derive(Debug, Clone)]
pub struct BulkPricingResult {
    /// One line per requested quantity, in request order.
    pub lines: Vec<BulkPriceLine>,
    /// One audit step per line.
    pub audit_steps: Vec<AuditStep>,
}

/// Selects the tier with the largest threshold not exceeding `quantity`.
///
/// When several tiers share that threshold the first one in `tiers` wins.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::select_tier;
/// use pricing_engine::models::PricingTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     PricingTier::new(10, Decimal::new(5, 0)),
///     PricingTier::new(50, Decimal::new(10, 0)),
/// ];
/// assert_eq!(select_tier(75, &tiers).unwrap().quantity_threshold, 50);
/// assert!(select_tier(5, &tiers).is_none());
/// ```
pub fn select_tier(quantity: u32, tiers: &[PricingTier]) -> Option<&PricingTier> {
    let mut selected: Option<&PricingTier> = None;

    for tier in tiers.iter().filter(|t| t.quantity_threshold <= quantity) {
        match selected {
            Some(best) if best.quantity_threshold >= tier.quantity_threshold => {}
            _ => selected = Some(tier),
        }
    }

    selected
}

/// Applies a tier's discount to a unit price: `price * (1 - discount / 100)`.
///
/// # Panics
///
/// Panics on overflow when the tier carries a negative discount and the
/// price is near `Decimal::MAX`. Tiers that pass [`PricingTier::validate`]
/// give a factor within 0..=1 and cannot overflow.
pub fn apply_tier_discount(base_price: Decimal, tier: &PricingTier) -> Decimal {
    base_price * (Decimal::ONE - tier.discount_percent / Decimal::ONE_HUNDRED)
}

/// Resolves the unit price for `quantity` units.
///
/// If no tier qualifies the base price is returned unchanged. Tiers are
/// expected to carry discounts within 0..=100.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::resolve_bulk_price;
/// use pricing_engine::models::PricingTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![PricingTier::new(10, Decimal::new(5, 0))];
/// assert_eq!(resolve_bulk_price(Decimal::ONE_HUNDRED, 12, &tiers), Decimal::new(95, 0));
/// assert_eq!(resolve_bulk_price(Decimal::ONE_HUNDRED, 2, &tiers), Decimal::ONE_HUNDRED);
/// ```
pub fn resolve_bulk_price(base_price: Decimal, quantity: u32, tiers: &[PricingTier]) -> Decimal {
    match select_tier(quantity, tiers) {
        Some(tier) => apply_tier_discount(base_price, tier),
        None => base_price,
    }
}

/// Prices one bulk table row per quantity.
///
/// Every tier is validated before any row is priced.
///
/// # Arguments
///
/// * `base_price` - The unit selling price before bulk discounts
/// * `quantities` - The order quantities to price, in display order
/// * `tiers` - The discount tiers, in caller order
/// * `format` - The currency convention for the formatted prices
/// * `step_number` - The step number of the first audit step
///
/// # Returns
///
/// Returns a `BulkPricingResult`, or `InvalidInput` if a tier discount is
/// outside 0..=100.
pub fn calculate_bulk_prices(
    base_price: Decimal,
    quantities: &[u32],
    tiers: &[PricingTier],
    format: &CurrencyFormat,
    step_number: u32,
) -> EngineResult<BulkPricingResult> {
    for tier in tiers {
        tier.validate()?;
    }

    let mut lines = Vec::with_capacity(quantities.len());
    let mut audit_steps = Vec::with_capacity(quantities.len());

    for (offset, &quantity) in quantities.iter().enumerate() {
        let applied_tier = select_tier(quantity, tiers).copied();
        let unit_price = resolve_bulk_price(base_price, quantity, tiers);

        let reasoning = match &applied_tier {
            Some(tier) => format!(
                "{} units reach the {}-unit tier: {} x (1 - {}/100) = {}",
                quantity,
                tier.quantity_threshold,
                base_price.normalize(),
                tier.discount_percent.normalize(),
                unit_price.normalize()
            ),
            None => format!(
                "{} units are below every tier threshold, base price kept",
                quantity
            ),
        };

        audit_steps.push(AuditStep {
            step_number: step_number + offset as u32,
            rule_id: "bulk_tier".to_string(),
            rule_name: "Bulk Tier Discount".to_string(),
            input: serde_json::json!({
                "base_price": base_price.normalize().to_string(),
                "quantity": quantity,
                "tier_count": tiers.len()
            }),
            output: serde_json::json!({
                "tier_applied": applied_tier.is_some(),
                "quantity_threshold": applied_tier.map(|t| t.quantity_threshold),
                "discount_percent": applied_tier.map(|t| t.discount_percent.normalize().to_string()),
                "unit_price": unit_price.normalize().to_string()
            }),
            reasoning,
        });

        lines.push(BulkPriceLine {
            quantity,
            applied_tier,
            unit_price,
            formatted_unit_price: format.format(unit_price),
        });
    }

    Ok(BulkPricingResult { lines, audit_steps })
}
