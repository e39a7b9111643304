//! REST API for labor rate lookups
//!
//! Thin HTTP layer over a shared `LaborRateResolver`.

pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::resolver::LaborRateResolver;

pub fn create_router(resolver: Arc<LaborRateResolver>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/labor-rates/:zip", get(handlers::get_labor_rate))
        .route("/api/v1/quotes", get(handlers::get_quote))
        .with_state(resolver)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = create_router(Arc::new(LaborRateResolver::builtin()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_metro_labor_rate() {
        let (status, body) = get_json("/api/v1/labor-rates/10001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "MetroArea");
        assert_eq!(body["rate"], 140.0);
        assert_eq!(body["state"], "NY");
        assert_eq!(body["nearest_city_name"], "new york");
    }

    #[tokio::test]
    async fn test_malformed_zip_is_national_average() {
        let (status, body) = get_json("/api/v1/labor-rates/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "NationalAverage");
        assert_eq!(body["multiplier"], 1.0);
        assert!(body["nearest_city_name"].is_null());
    }

    #[tokio::test]
    async fn test_quote() {
        let (status, body) = get_json("/api/v1/quotes?zip=59999&parts=100&labor=200").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labor_rate"]["source"], "StateAverage");
        assert_eq!(body["quote"]["parts"], 100.0);
        assert_eq!(body["quote"]["labor"], 200.0);
        assert_eq!(body["quote"]["total"], 300.0);
    }

    #[tokio::test]
    async fn test_quote_without_zip_uses_national_average() {
        let (status, body) = get_json("/api/v1/quotes?parts=10&labor=20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labor_rate"]["source"], "NationalAverage");
        assert_eq!(body["quote"]["total"], 30.0);
    }

    #[tokio::test]
    async fn test_negative_amount_rejected() {
        let (status, body) = get_json("/api/v1/quotes?zip=10001&parts=-1&labor=20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Parts"));
    }

    #[tokio::test]
    async fn test_missing_or_invalid_amount_returns_json_error() {
        for uri in [
            "/api/v1/quotes?zip=10001&labor=20",
            "/api/v1/quotes?zip=10001&parts=abc&labor=20",
            "/api/v1/quotes?zip=10001&parts=10",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(!body["error"].as_str().unwrap().is_empty(), "{}", uri);
        }
    }
}
