//! HTTP API module for the Pricing Engine.
//!
//! This module provides the REST API endpoints that a calculator front end
//! calls with its current form values.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BulkPriceRequest, QuoteRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
