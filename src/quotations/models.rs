//! Quotation snapshot models.
//!
//! A snapshot is a frozen copy of a project, the rate card it was priced with
//! and the totals computed at save time. Later rate-card edits never touch it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;
use crate::pricing::{compute_totals, Client, Project, RateConfiguration, Room, Totals};

/// Document status stored with a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    #[default]
    Draft,
    Final,
}

impl QuotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "draft",
            QuotationStatus::Final => "final",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(QuotationStatus::Draft),
            "final" => Some(QuotationStatus::Final),
            _ => None,
        }
    }
}

/// Outcome of the most recent save attempt in a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

/// Immutable persisted copy of a project with its rates and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationSnapshot {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub client: Client,
    pub rooms: Vec<Room>,
    pub rates: RateConfiguration,
    pub totals: Totals,
    pub status: QuotationStatus,
    pub created_at: DateTime<Utc>,
}

impl QuotationSnapshot {
    /// Copy the project as it is now and price it with its current rate card.
    pub fn capture(owner_id: Uuid, project: &Project, status: QuotationStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            client: project.client.clone(),
            rooms: project.rooms.clone(),
            rates: project.rates.clone(),
            totals: compute_totals(project),
            status,
            created_at: Utc::now(),
        }
    }

    /// Rebuild an editable project from this snapshot.
    pub fn to_project(&self) -> Project {
        Project {
            client: self.client.clone(),
            rooms: self.rooms.clone(),
            rates: self.rates.clone(),
        }
    }
}

/// Row from the quotations table
#[derive(Debug, Clone, FromRow)]
pub struct QuotationRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub client: serde_json::Value,
    pub rooms: serde_json::Value,
    pub rates: serde_json::Value,
    pub totals: serde_json::Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl QuotationRow {
    /// Decode the JSONB columns into a snapshot
    pub fn parse(self) -> Result<QuotationSnapshot, AppError> {
        let status = QuotationStatus::parse(&self.status).ok_or_else(|| {
            AppError::Internal(format!("Unknown quotation status '{}'", self.status))
        })?;

        Ok(QuotationSnapshot {
            id: self.id,
            owner_id: self.owner_id,
            client: serde_json::from_value(self.client)?,
            rooms: serde_json::from_value(self.rooms)?,
            rates: serde_json::from_value(self.rates)?,
            totals: serde_json::from_value(self.totals)?,
            status,
            created_at: self.created_at,
        })
    }
}

/// Listing entry for a user's saved quotations
#[derive(Debug, Clone, Serialize)]
pub struct QuotationSummary {
    pub id: Uuid,
    pub client_name: String,
    pub room_count: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total: rust_decimal::Decimal,
    pub status: QuotationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&QuotationSnapshot> for QuotationSummary {
    fn from(snapshot: &QuotationSnapshot) -> Self {
        Self {
            id: snapshot.id,
            client_name: snapshot.client.name.clone(),
            room_count: snapshot.rooms.len(),
            grand_total: snapshot.totals.grand_total,
            status: snapshot.status,
            created_at: snapshot.created_at,
        }
    }
}
