//! REST API handlers for labor rate lookups
//!
//! These handlers share a single resolver built at startup.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::quote::{quote_for_zip, AdjustedQuote};
use crate::resolver::{LaborRateResolver, RateResolution, RateSource};
use crate::state::StateCode;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct LaborRateResponse {
    pub zip: String,
    pub state: Option<StateCode>,
    pub rate: f64,
    pub source: RateSource,
    pub base_rate: f64,
    pub city_premium: f64,
    pub nearest_city_name: Option<String>,
    pub distance_to_city_miles: Option<f64>,
    pub multiplier: f64,
}

impl From<RateResolution> for LaborRateResponse {
    fn from(r: RateResolution) -> Self {
        let multiplier = r.multiplier();
        Self {
            zip: r.zip,
            state: r.state,
            rate: r.rate,
            source: r.source,
            base_rate: r.base_rate,
            // Rounded for display
            city_premium: (r.city_premium * 100.0).round() / 100.0,
            nearest_city_name: r.nearest_city_name,
            distance_to_city_miles: r.distance_to_city_miles,
            multiplier,
        }
    }
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub labor_rate: LaborRateResponse,
    pub quote: AdjustedQuote,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct QuoteQuery {
    pub zip: Option<String>,
    pub parts: f64,
    pub labor: f64,
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<LaborRateResolver>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/labor-rates/:zip
///
/// Malformed and unknown ZIPs resolve to the national average, not an error.
pub async fn get_labor_rate(
    State(resolver): State<AppState>,
    Path(zip): Path<String>,
) -> Json<LaborRateResponse> {
    Json(LaborRateResponse::from(resolver.resolve(&zip)))
}

/// GET /api/v1/quotes?zip=X&parts=N&labor=N
///
/// Missing or non-numeric amounts are rejected with the same JSON error body
/// as negative ones.
pub async fn get_quote(
    State(resolver): State<AppState>,
    query: Result<Query<QuoteQuery>, QueryRejection>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Query(params) = query.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })?;

    let zip = params.zip.unwrap_or_default();
    match quote_for_zip(&resolver, &zip, params.parts, params.labor) {
        Ok(q) => Ok(Json(QuoteResponse {
            labor_rate: LaborRateResponse::from(q.resolution),
            quote: q.quote,
        })),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
