//! Pricing Engine
//!
//! This crate computes a recommended selling price from a base cost and a
//! fixed sequence of pricing adjustments, resolves bulk-purchase prices from
//! quantity discount tiers, and formats the results for display.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
