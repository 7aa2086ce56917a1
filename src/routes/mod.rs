//! HTTP routes outside the pricing API

pub mod quotations;

use axum::{extract::State, Json};

use crate::AppState;

/// Liveness check with cache stats
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "interior-quote",
        "cache": state.cache.stats(),
    }))
}
