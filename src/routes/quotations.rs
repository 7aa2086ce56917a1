//! Saved quotation route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::pricing::{Client, Project, RateConfiguration, Room};
use crate::quotations::{
    PgSnapshotStore, QuotationSession, QuotationSnapshot, QuotationStatus, QuotationSummary,
    SnapshotStore,
};
use crate::AppState;

/// Body for saving a quotation snapshot
#[derive(Debug, Deserialize)]
pub struct SaveQuotationRequest {
    #[serde(default)]
    pub client: Client,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub rates: Option<RateConfiguration>,
    #[serde(default)]
    pub status: QuotationStatus,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/quotations", get(list).post(save))
        .route("/api/quotations/:id", get(detail))
}

/// Save a snapshot of the submitted project for the calling user
async fn save(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<SaveQuotationRequest>,
) -> Result<(StatusCode, Json<QuotationSnapshot>)> {
    let rates = request
        .rates
        .unwrap_or_else(|| (*state.default_rates).clone());
    rates.validate()?;

    let project = Project {
        client: request.client,
        rooms: request.rooms,
        rates,
    };
    project.validate_items()?;

    let mut session = QuotationSession::from_project(project);
    let store = PgSnapshotStore::new(state.db.clone());
    let snapshot = session.save(&store, user.id, request.status).await?;

    Ok((StatusCode::CREATED, Json(snapshot)))
}

async fn list(State(state): State<AppState>, user: AuthUser) -> Result<Json<Vec<QuotationSummary>>> {
    let store = PgSnapshotStore::new(state.db.clone());
    let snapshots = store.list_for_owner(user.id).await?;

    Ok(Json(snapshots.iter().map(QuotationSummary::from).collect()))
}

async fn detail(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<QuotationSnapshot>> {
    let store = PgSnapshotStore::new(state.db.clone());
    Ok(Json(store.get(user.id, id).await?))
}
