//! Interior-design quotation service.
//!
//! The [`pricing`] module holds the calculation engine; the rest of the crate
//! is the HTTP surface, totals cache and snapshot persistence around it.

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod quotations;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cache::TotalsCache;
use crate::pricing::RateConfiguration;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: TotalsCache,
    /// Rate card used when a request does not bring its own
    pub default_rates: Arc<RateConfiguration>,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(pricing::router())
        .merge(routes::quotations::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    /// State backed by a lazy pool that never connects unless a query runs
    pub fn test_state() -> AppState {
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/interior_quote_test")
            .expect("valid database url");

        AppState {
            db,
            cache: TotalsCache::default(),
            default_rates: Arc::new(RateConfiguration::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let app = app(test_support::test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_default_rates_route() {
        let app = app(test_support::test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/pricing/rates/default")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let rates: RateConfiguration = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(rates, RateConfiguration::default());
    }
}
