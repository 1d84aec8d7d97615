//! Core data models for the Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pricing_input;
mod pricing_tier;
mod quote;

pub use pricing_input::PricingInput;
pub use pricing_tier::{PricingTier, TierField, TierSchedule};
pub use quote::{
    AdjustmentKind, AuditStep, AuditTrace, AuditWarning, BulkPriceLine, PriceAdjustment,
    PriceQuote, ProfitSummary,
};
