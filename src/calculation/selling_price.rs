//! Selling price calculation functionality.
//!
//! This module turns a base cost into a recommended selling price by
//! composing five multiplicative adjustments: profit margin, operational
//! cost, credit card fee, seasonal discount and tax.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentKind, AuditStep, PriceAdjustment, PricingInput};

/// The result of a selling price calculation, including the breakdown and audit steps.
#[derive(Debug, Clone)]
pub struct SellingPriceResult {
    /// The recommended unit selling price.
    pub selling_price: Decimal,
    /// Each adjustment in the order it was applied.
    pub adjustments: Vec<PriceAdjustment>,
    /// One audit step per adjustment.
    pub audit_steps: Vec<AuditStep>,
}

fn percent(value: Decimal) -> Decimal {
    value / Decimal::ONE_HUNDRED
}

/// Returns the factor that makes `profit_margin_percent` a share of the final price.
///
/// `1 / (1 - margin / 100)`
///
/// # Errors
///
/// Returns `InvalidInput` when the margin is exactly 100.
pub fn margin_multiplier(profit_margin_percent: Decimal) -> EngineResult<Decimal> {
    let denominator = Decimal::ONE - percent(profit_margin_percent);
    Decimal::ONE.checked_div(denominator).ok_or_else(|| {
        EngineError::invalid_input(
            "profit_margin_percent",
            format!(
                "a margin of {} leaves no room for cost",
                profit_margin_percent
            ),
        )
    })
}

/// Returns the operational overhead factor.
///
/// A percentage overhead gives `1 + cost / 100`; an absolute overhead is
/// taken relative to the base cost, giving `1 + cost / base_cost`.
///
/// # Errors
///
/// Returns `InvalidInput` when the overhead is absolute and `base_cost` is zero.
pub fn operational_multiplier(
    base_cost: Decimal,
    operational_cost: Decimal,
    is_percentage: bool,
) -> EngineResult<Decimal> {
    if is_percentage {
        return Ok(Decimal::ONE + percent(operational_cost));
    }

    operational_cost
        .checked_div(base_cost)
        .map(|ratio| Decimal::ONE + ratio)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "base_cost",
                "must be greater than zero when operational cost is an absolute amount",
            )
        })
}

/// Returns `1 + fee / 100`.
pub fn credit_card_multiplier(credit_card_fee_percent: Decimal) -> Decimal {
    Decimal::ONE + percent(credit_card_fee_percent)
}

/// Returns `1 - discount / 100`. Pass zero when the discount is switched off.
pub fn seasonal_multiplier(seasonal_discount_percent: Decimal) -> Decimal {
    Decimal::ONE - percent(seasonal_discount_percent)
}

/// Returns `1 + tax / 100`.
pub fn tax_multiplier(tax_rate_percent: Decimal) -> Decimal {
    Decimal::ONE + percent(tax_rate_percent)
}

fn multiplier_for(kind: AdjustmentKind, input: &PricingInput) -> EngineResult<Decimal> {
    match kind {
        AdjustmentKind::Margin => margin_multiplier(input.profit_margin_percent),
        AdjustmentKind::Operational => operational_multiplier(
            input.base_cost,
            input.operational_cost,
            input.operational_cost_is_percentage,
        ),
        AdjustmentKind::CreditCardFee => Ok(credit_card_multiplier(input.credit_card_fee_percent)),
        AdjustmentKind::SeasonalDiscount => {
            Ok(seasonal_multiplier(input.seasonal_discount_percent))
        }
        AdjustmentKind::Tax => Ok(tax_multiplier(input.tax_rate_percent)),
    }
}

fn audit_input(kind: AdjustmentKind, input: &PricingInput) -> serde_json::Value {
    match kind {
        AdjustmentKind::Margin => serde_json::json!({
            "profit_margin_percent": input.profit_margin_percent.normalize().to_string()
        }),
        AdjustmentKind::Operational => serde_json::json!({
            "operational_cost": input.operational_cost.normalize().to_string(),
            "operational_cost_is_percentage": input.operational_cost_is_percentage,
            "base_cost": input.base_cost.normalize().to_string()
        }),
        AdjustmentKind::CreditCardFee => serde_json::json!({
            "credit_card_fee_percent": input.credit_card_fee_percent.normalize().to_string()
        }),
        AdjustmentKind::SeasonalDiscount => serde_json::json!({
            "seasonal_discount_percent": input.seasonal_discount_percent.normalize().to_string()
        }),
        AdjustmentKind::Tax => serde_json::json!({
            "tax_rate_percent": input.tax_rate_percent.normalize().to_string()
        }),
    }
}

fn audit_reasoning(kind: AdjustmentKind, input: &PricingInput, multiplier: Decimal) -> String {
    match kind {
        AdjustmentKind::Margin => format!(
            "1 / (1 - {}/100) = {}",
            input.profit_margin_percent.normalize(),
            multiplier.normalize()
        ),
        AdjustmentKind::Operational if input.operational_cost_is_percentage => format!(
            "1 + {}/100 = {}",
            input.operational_cost.normalize(),
            multiplier.normalize()
        ),
        AdjustmentKind::Operational => format!(
            "1 + {} / {} = {}",
            input.operational_cost.normalize(),
            input.base_cost.normalize(),
            multiplier.normalize()
        ),
        AdjustmentKind::CreditCardFee => format!(
            "1 + {}/100 = {}",
            input.credit_card_fee_percent.normalize(),
            multiplier.normalize()
        ),
        AdjustmentKind::SeasonalDiscount if input.seasonal_discount_percent.is_zero() => {
            "No seasonal discount applied".to_string()
        }
        AdjustmentKind::SeasonalDiscount => format!(
            "1 - {}/100 = {}",
            input.seasonal_discount_percent.normalize(),
            multiplier.normalize()
        ),
        AdjustmentKind::Tax => format!(
            "1 + {}/100 = {}",
            input.tax_rate_percent.normalize(),
            multiplier.normalize()
        ),
    }
}

/// Calculates the selling price along with its adjustment breakdown.
///
/// The input is validated first. Each adjustment multiplies the running
/// price in the fixed order margin, operational cost, credit card fee,
/// seasonal discount, tax.
///
/// # Arguments
///
/// * `input` - The pricing parameters
/// * `step_number` - The step number of the first audit step
///
/// # Returns
///
/// Returns a `SellingPriceResult`, or an error if:
/// - The input fails validation (`InvalidInput`)
/// - The running product overflows (`CalculationError`)
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::calculate_selling_price;
/// use pricing_engine::models::PricingInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PricingInput {
///     base_cost: Decimal::from_str("100").unwrap(),
///     profit_margin_percent: Decimal::from_str("20").unwrap(),
///     operational_cost: Decimal::ZERO,
///     operational_cost_is_percentage: true,
///     credit_card_fee_percent: Decimal::ZERO,
///     seasonal_discount_percent: Decimal::ZERO,
///     tax_rate_percent: Decimal::ZERO,
/// };
///
/// let result = calculate_selling_price(&input, 1).unwrap();
/// assert_eq!(result.selling_price, Decimal::from_str("125").unwrap());
/// assert_eq!(result.adjustments.len(), 5);
/// ```
pub fn calculate_selling_price(
    input: &PricingInput,
    step_number: u32,
) -> EngineResult<SellingPriceResult> {
    input.validate()?;

    let mut running = input.base_cost;
    let mut adjustments = Vec::with_capacity(AdjustmentKind::ORDER.len());
    let mut audit_steps = Vec::with_capacity(AdjustmentKind::ORDER.len());

    for (offset, kind) in AdjustmentKind::ORDER.into_iter().enumerate() {
        let multiplier = multiplier_for(kind, input)?;
        let price_before = running;
        running = running
            .checked_mul(multiplier)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "selling price overflowed applying {} multiplier {}",
                    kind.rule_id(),
                    multiplier
                ),
            })?;

        audit_steps.push(AuditStep {
            step_number: step_number + offset as u32,
            rule_id: kind.rule_id().to_string(),
            rule_name: kind.rule_name().to_string(),
            input: audit_input(kind, input),
            output: serde_json::json!({
                "multiplier": multiplier.normalize().to_string(),
                "price_before": price_before.normalize().to_string(),
                "price_after": running.normalize().to_string()
            }),
            reasoning: audit_reasoning(kind, input, multiplier),
        });

        adjustments.push(PriceAdjustment {
            kind,
            multiplier,
            price_after: running,
        });
    }

    Ok(SellingPriceResult {
        selling_price: running,
        adjustments,
        audit_steps,
    })
}

/// Computes the recommended selling price for `input`.
///
/// This is [`calculate_selling_price`] without the breakdown.
///
/// # Examples
///
/// ```
/// use pricing_engine::calculation::compute_selling_price;
/// use pricing_engine::models::PricingInput;
/// use rust_decimal::Decimal;
///
/// let mut input = PricingInput {
///     base_cost: Decimal::TEN,
///     profit_margin_percent: Decimal::ONE_HUNDRED,
///     operational_cost: Decimal::ZERO,
///     operational_cost_is_percentage: true,
///     credit_card_fee_percent: Decimal::ZERO,
///     seasonal_discount_percent: Decimal::ZERO,
///     tax_rate_percent: Decimal::ZERO,
/// };
/// assert!(compute_selling_price(&input).is_err());
///
/// input.profit_margin_percent = Decimal::ZERO;
/// assert_eq!(compute_selling_price(&input).unwrap(), Decimal::TEN);
/// ```
pub fn compute_selling_price(input: &PricingInput) -> EngineResult<Decimal> {
    calculate_selling_price(input, 1).map(|result| result.selling_price)
}
