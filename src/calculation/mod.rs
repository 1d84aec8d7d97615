//! Calculation logic for the Pricing Engine.
//!
//! This module contains the selling price calculation with its five
//! multiplicative adjustments, bulk tier resolution, profit summary,
//! currency formatting and quote assembly.

mod bulk_price;
mod currency;
mod profit;
mod quote;
mod selling_price;

pub use bulk_price::{
    BulkPricingResult, apply_tier_discount, calculate_bulk_prices, resolve_bulk_price,
    select_tier,
};
pub use currency::{CurrencyFormat, format_money};
pub use profit::calculate_profit;
pub use quote::{DUPLICATE_TIER_THRESHOLD, build_quote, detect_duplicate_thresholds};
pub use selling_price::{
    SellingPriceResult, calculate_selling_price, compute_selling_price, credit_card_multiplier,
    margin_multiplier, operational_multiplier, seasonal_multiplier, tax_multiplier,
};
