//! Configuration loading and management for the Pricing Engine.
//!
//! This module loads the calculator's metadata, currency convention and
//! default form values from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pricing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calculator: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorFile, CalculatorMetadata, DefaultsConfig};
