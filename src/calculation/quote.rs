//! Quote assembly.
//!
//! Runs the selling price calculation, the profit summary and the bulk
//! table in sequence and collects their audit steps into a single
//! [`PriceQuote`].

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AuditTrace, AuditWarning, PriceQuote, PricingInput, PricingTier};

use super::bulk_price::calculate_bulk_prices;
use super::currency::CurrencyFormat;
use super::profit::calculate_profit;
use super::selling_price::calculate_selling_price;

/// Warning code for tiers that share a quantity threshold.
pub const DUPLICATE_TIER_THRESHOLD: &str = "DUPLICATE_TIER_THRESHOLD";

/// Reports every threshold that appears on more than one tier.
///
/// One warning per repeated threshold, in order of first repetition.
pub fn detect_duplicate_thresholds(tiers: &[PricingTier]) -> Vec<AuditWarning> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut warnings = Vec::new();

    for tier in tiers {
        if !seen.insert(tier.quantity_threshold) && reported.insert(tier.quantity_threshold) {
            warnings.push(AuditWarning {
                code: DUPLICATE_TIER_THRESHOLD.to_string(),
                message: format!(
                    "More than one tier starts at {} units; the first one listed is used",
                    tier.quantity_threshold
                ),
                severity: "low".to_string(),
            });
        }
    }

    warnings
}

/// Builds a complete quote for `input`.
///
/// The bulk table has one row per tier threshold (in tier order) followed
/// by one row per entry of `extra_quantities`.
///
/// # Errors
///
/// Propagates `InvalidInput` from input or tier validation and
/// `CalculationError` from the selling price calculation.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::{build_quote, CurrencyFormat};
/// use pricing_engine::models::{PricingInput, PricingTier};
/// use rust_decimal::Decimal;
///
/// let input = PricingInput {
///     base_cost: Decimal::ONE_HUNDRED,
///     profit_margin_percent: Decimal::ZERO,
///     operational_cost: Decimal::ZERO,
///     operational_cost_is_percentage: true,
///     credit_card_fee_percent: Decimal::ZERO,
///     seasonal_discount_percent: Decimal::ZERO,
///     tax_rate_percent: Decimal::ZERO,
/// };
/// let tiers = vec![PricingTier::new(10, Decimal::TEN)];
///
/// let quote = build_quote(&input, &tiers, &[], &CurrencyFormat::brl()).unwrap();
/// assert_eq!(quote.selling_price, Decimal::ONE_HUNDRED);
/// assert_eq!(quote.bulk_prices[0].unit_price, Decimal::new(90, 0));
/// ```
pub fn build_quote(
    input: &PricingInput,
    tiers: &[PricingTier],
    extra_quantities: &[u32],
    format: &CurrencyFormat,
) -> EngineResult<PriceQuote> {
    let start_time = Instant::now();
    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let selling = calculate_selling_price(input, step_number)?;
    step_number += selling.audit_steps.len() as u32;
    audit_steps.extend(selling.audit_steps);

    let quantities: Vec<u32> = tiers
        .iter()
        .map(|t| t.quantity_threshold)
        .chain(extra_quantities.iter().copied())
        .collect();

    let bulk = calculate_bulk_prices(
        selling.selling_price,
        &quantities,
        tiers,
        format,
        step_number,
    )?;
    audit_steps.extend(bulk.audit_steps);

    let profit = calculate_profit(selling.selling_price, input.base_cost, format)?;
    let warnings = detect_duplicate_thresholds(tiers);
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        selling_price = %selling.selling_price,
        bulk_rows = bulk.lines.len(),
        warnings = warnings.len(),
        duration_us,
        "Quote built"
    );

    Ok(PriceQuote {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input: input.clone(),
        selling_price: selling.selling_price,
        formatted_selling_price: format.format(selling.selling_price),
        profit,
        adjustments: selling.adjustments,
        bulk_prices: bulk.lines,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}
