//! Quote models for the Pricing Engine.
//!
//! This module contains the [`PriceQuote`] type and its associated structures
//! that capture all outputs from a pricing run, including the adjustment
//! breakdown, profit summary, bulk price rows and audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PricingInput, PricingTier};

/// The five multiplicative adjustments applied to the base cost, in order.
///
/// # Example
///
/// ```
/// use pricing_engine::models::AdjustmentKind;
///
/// assert_eq!(AdjustmentKind::ORDER[0], AdjustmentKind::Margin);
/// assert_eq!(AdjustmentKind::Tax.rule_id(), "tax");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Inflates cost so the target margin is a share of the final price.
    Margin,
    /// Operational overhead, percentage or absolute.
    Operational,
    /// Card processor fee.
    CreditCardFee,
    /// Optional seasonal discount.
    SeasonalDiscount,
    /// Sales tax.
    Tax,
}

impl AdjustmentKind {
    /// The order in which adjustments are applied to the running product.
    pub const ORDER: [AdjustmentKind; 5] = [
        AdjustmentKind::Margin,
        AdjustmentKind::Operational,
        AdjustmentKind::CreditCardFee,
        AdjustmentKind::SeasonalDiscount,
        AdjustmentKind::Tax,
    ];

    /// Stable identifier used in audit steps.
    pub fn rule_id(&self) -> &'static str {
        match self {
            AdjustmentKind::Margin => "margin",
            AdjustmentKind::Operational => "operational_cost",
            AdjustmentKind::CreditCardFee => "credit_card_fee",
            AdjustmentKind::SeasonalDiscount => "seasonal_discount",
            AdjustmentKind::Tax => "tax",
        }
    }

    /// Human-readable name used in audit steps.
    pub fn rule_name(&self) -> &'static str {
        match self {
            AdjustmentKind::Margin => "Profit Margin",
            AdjustmentKind::Operational => "Operational Cost",
            AdjustmentKind::CreditCardFee => "Credit Card Fee",
            AdjustmentKind::SeasonalDiscount => "Seasonal Discount",
            AdjustmentKind::Tax => "Tax",
        }
    }
}

/// One adjustment applied during the selling price calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAdjustment {
    /// Which adjustment this is.
    pub kind: AdjustmentKind,
    /// The factor the running price was multiplied by.
    pub multiplier: Decimal,
    /// The running price after this adjustment.
    pub price_after: Decimal,
}

/// Profit per unit and the margin it represents of the selling price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSummary {
    /// Selling price minus base cost.
    pub amount: Decimal,
    /// Profit as a percentage of the selling price, to two decimals.
    /// `None` when the selling price is zero.
    pub margin_percent: Option<Decimal>,
    /// `amount` rendered as a currency string.
    pub formatted_amount: String,
}

/// The unit price for one order quantity in the bulk table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPriceLine {
    /// The order quantity this row prices.
    pub quantity: u32,
    /// The tier whose discount was applied, if any qualified.
    pub applied_tier: Option<PricingTier>,
    /// Unit price after the tier discount.
    pub unit_price: Decimal,
    /// `unit_price` rendered as a currency string.
    pub formatted_unit_price: String,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pricing run.
///
/// # Example
///
/// ```
/// use pricing_engine::models::{AuditTrace, PriceQuote, PricingInput, ProfitSummary};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let quote = PriceQuote {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     input: PricingInput {
///         base_cost: Decimal::TEN,
///         profit_margin_percent: Decimal::ZERO,
///         operational_cost: Decimal::ZERO,
///         operational_cost_is_percentage: true,
///         credit_card_fee_percent: Decimal::ZERO,
///         seasonal_discount_percent: Decimal::ZERO,
///         tax_rate_percent: Decimal::ZERO,
///     },
///     selling_price: Decimal::TEN,
///     formatted_selling_price: "R$\u{a0}10,00".to_string(),
///     profit: ProfitSummary {
///         amount: Decimal::ZERO,
///         margin_percent: Some(Decimal::ZERO),
///         formatted_amount: "R$\u{a0}0,00".to_string(),
///     },
///     adjustments: vec![],
///     bulk_prices: vec![],
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(quote.selling_price, Decimal::TEN);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input the quote was priced from, after the seasonal toggle.
    pub input: PricingInput,
    /// The recommended unit selling price.
    pub selling_price: Decimal,
    /// `selling_price` rendered as a currency string.
    pub formatted_selling_price: String,
    /// Profit per unit at the selling price.
    pub profit: ProfitSummary,
    /// The adjustment breakdown, in application order.
    pub adjustments: Vec<PriceAdjustment>,
    /// One row per tier threshold, then one per extra quantity.
    pub bulk_prices: Vec<BulkPriceLine>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
