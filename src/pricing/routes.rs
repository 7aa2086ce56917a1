//! Pricing API route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::calculators::price_line_item;
use super::models::RateConfiguration;
use super::requests::{ComputeTotalsRequest, PriceLineItemRequest};
use super::responses::{
    LineItemPriceResponse, RateValidationResponse, RoomTemplateResponse, TotalsResponse,
};
use super::templates::RoomType;
use super::PricingError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/rates/default", get(default_rates))
        .route("/api/pricing/rates/validate", post(validate_rates))
        .route("/api/pricing/line-item", post(price_item))
        .route("/api/pricing/totals", post(totals))
        .route("/api/pricing/templates", get(templates))
}

/// Built-in fallback rate card
async fn default_rates(State(state): State<AppState>) -> Json<RateConfiguration> {
    Json((*state.default_rates).clone())
}

async fn validate_rates(Json(rates): Json<RateConfiguration>) -> Json<RateValidationResponse> {
    let errors = match rates.validate() {
        Ok(()) => Vec::new(),
        Err(PricingError::Configuration { errors, .. }) => errors,
        Err(other) => vec![other.to_string()],
    };

    Json(RateValidationResponse {
        valid: errors.is_empty(),
        errors,
    })
}

/// Price a single line item from raw form input
async fn price_item(
    State(state): State<AppState>,
    Json(request): Json<PriceLineItemRequest>,
) -> Result<Json<LineItemPriceResponse>> {
    let rates = match request.rates {
        Some(rates) => {
            rates.validate()?;
            rates
        }
        None => (*state.default_rates).clone(),
    };
    let item = request.item.into_line_item()?;
    let total = price_line_item(&item, &rates);

    Ok(Json(LineItemPriceResponse::new(&item, &rates, total)))
}

/// Compute room and project totals, memoized per project state
async fn totals(
    State(state): State<AppState>,
    Json(request): Json<ComputeTotalsRequest>,
) -> Result<Json<TotalsResponse>> {
    let project = request.into_project(&state.default_rates);
    project.rates.validate()?;
    project.validate_items()?;

    let totals = state.cache.get_or_compute(&project).await;
    tracing::debug!(
        "Computed totals for {} rooms / {} items: {}",
        project.rooms.len(),
        project.item_count(),
        totals.grand_total
    );

    Ok(Json(TotalsResponse::from(totals.as_ref())))
}

async fn templates() -> Json<Vec<RoomTemplateResponse>> {
    Json(
        RoomType::ALL
            .iter()
            .map(|room_type| RoomTemplateResponse {
                room_type: *room_type,
                label: room_type.label(),
                items: room_type.item_templates(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_state;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let app = router().with_state(test_state());
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn wardrobe(hardware: &str) -> Value {
        json!({
            "name": "Wardrobe",
            "width": 6,
            "height": 7,
            "material": "BWR Plywood",
            "finish": "Laminate (1mm)",
            "hardware": hardware,
            "qty": 1
        })
    }

    #[tokio::test]
    async fn test_price_line_item_with_default_rates() {
        let body = json!({
            "item": {
                "name": "Wardrobe",
                "width": "6",
                "height": "7",
                "material": "BWR Plywood",
                "finish": "Laminate (1mm)",
                "hardware": "Luxury (Blum)"
            }
        });

        let (status, json) = post_json("/api/pricing/line-item", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"]["display"], "30492");
        assert_eq!(json["qty"], 1);
    }

    #[tokio::test]
    async fn test_price_line_item_rejects_bad_input() {
        let body = json!({
            "item": {
                "name": "Wardrobe",
                "width": "six",
                "height": "7",
                "material": "BWR Plywood",
                "finish": "Laminate (1mm)",
                "hardware": "Standard"
            }
        });

        let (status, json) = post_json("/api/pricing/line-item", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["code"], 422);
    }

    #[tokio::test]
    async fn test_totals_endpoint() {
        let body = json!({
            "client": { "name": "Asha Rao" },
            "rooms": [{
                "name": "Master Bedroom",
                "room_type": "bedroom",
                "items": [wardrobe("Standard"), wardrobe("Luxury (Blum)")]
            }]
        });

        let (status, json) = post_json("/api/pricing/totals", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["subtotal"]["display"], "44352");
        assert_eq!(json["tax"]["display"], "7983");
        assert_eq!(json["grand_total"]["display"], "52335");
        assert_eq!(json["room_totals"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_totals_rejects_invalid_rates() {
        let mut rates = serde_json::to_value(RateConfiguration::default()).unwrap();
        rates["tax_rate"] = json!("150");
        let body = json!({ "rooms": [], "rates": rates });

        let (status, json) = post_json("/api/pricing/totals", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["details"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_totals_rejects_invalid_items() {
        let mut zero_qty = wardrobe("Standard");
        zero_qty["qty"] = json!(0);
        let body = json!({
            "rooms": [
                { "name": "Kitchen", "items": [] },
                { "name": "Master Bedroom", "items": [wardrobe("Standard"), zero_qty] }
            ]
        });

        let (status, json) = post_json("/api/pricing/totals", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("rooms[1].items[1].qty"));
    }

    #[tokio::test]
    async fn test_totals_rejects_huge_dimensions() {
        let mut huge = wardrobe("Luxury (Blum)");
        huge["width"] = json!("79228162514264337593543950335");
        huge["height"] = json!("2");
        let body = json!({ "rooms": [{ "name": "Hall", "items": [huge] }] });

        let (status, json) = post_json("/api/pricing/totals", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["code"], 422);
    }

    #[tokio::test]
    async fn test_price_line_item_rejects_huge_dimensions() {
        let body = json!({
            "item": {
                "name": "Wardrobe",
                "width": "99999999999999999999",
                "height": "99999999999999999999",
                "material": "BWR Plywood",
                "finish": "Laminate (1mm)",
                "hardware": "Standard"
            }
        });

        let (status, _) = post_json("/api/pricing/line-item", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_validate_rates_endpoint() {
        let rates = RateConfiguration::default().with_labor_rate(rust_decimal_macros::dec!(-5));
        let (status, json) =
            post_json("/api/pricing/rates/validate", serde_json::to_value(rates).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_templates_endpoint() {
        let app = router().with_state(test_state());
        let request = Request::builder()
            .uri("/api/pricing/templates")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert_eq!(json[1]["room_type"], "bedroom");
    }
}
