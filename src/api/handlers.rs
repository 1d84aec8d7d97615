//! HTTP request handlers for the Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_quote, calculate_bulk_prices};
use crate::error::EngineError;

use super::request::{BulkPriceRequest, QuoteRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/bulk-price", post(bulk_price_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /quote.
///
/// Prices the submitted form and returns the full quote.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let input = request.effective_input();
    let tiers = request
        .tiers
        .clone()
        .unwrap_or_else(|| config.defaults().tiers.tiers().to_vec());

    let start_time = Instant::now();
    match build_quote(&input, &tiers, &request.quantities, config.currency()) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %quote.calculation_id,
                selling_price = %quote.selling_price,
                bulk_rows = quote.bulk_prices.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Quote completed successfully"
            );
            json_response(StatusCode::OK, quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for POST /bulk-price.
///
/// Resolves the unit price for a single order quantity.
async fn bulk_price_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkPriceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bulk price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if request.base_price < Decimal::ZERO {
        warn!(correlation_id = %correlation_id, "Negative base price");
        return engine_error_response(EngineError::invalid_input(
            "base_price",
            format!("must not be negative (got {})", request.base_price),
        ));
    }

    let result = calculate_bulk_prices(
        request.base_price,
        &[request.quantity],
        &request.tiers,
        state.config().currency(),
        1,
    );

    match result.map(|bulk| bulk.lines.into_iter().next()) {
        Ok(Some(line)) => {
            info!(
                correlation_id = %correlation_id,
                quantity = line.quantity,
                unit_price = %line.unit_price,
                tier_applied = line.applied_tier.is_some(),
                "Bulk price resolved"
            );
            json_response(StatusCode::OK, line)
        }
        Ok(None) => engine_error_response(EngineError::CalculationError {
            message: "bulk pricing produced no row".to_string(),
        }),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bulk price failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for GET /defaults.
///
/// Returns the form values a fresh calculator starts with.
async fn defaults_handler(State(state): State<AppState>) -> Response {
    let request = QuoteRequest::from(state.config().defaults());
    json_response(StatusCode::OK, request)
}
