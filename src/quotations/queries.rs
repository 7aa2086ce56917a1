//! Snapshot storage.
//!
//! Snapshots are written once and never updated. Each row belongs to the
//! authenticated user who saved it.

use std::future::Future;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};

use super::models::{QuotationRow, QuotationSnapshot};

/// Destination for saved quotations
pub trait SnapshotStore {
    fn save(&self, snapshot: &QuotationSnapshot) -> impl Future<Output = Result<()>> + Send;

    fn get(&self, owner_id: Uuid, id: Uuid) -> impl Future<Output = Result<QuotationSnapshot>> + Send;

    fn list_for_owner(&self, owner_id: Uuid) -> impl Future<Output = Result<Vec<QuotationSnapshot>>> + Send;
}

/// PostgreSQL-backed store using JSONB columns
#[derive(Clone)]
pub struct PgSnapshotStore {
    pool: PgPool,
}

impl PgSnapshotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SnapshotStore for PgSnapshotStore {
    async fn save(&self, snapshot: &QuotationSnapshot) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO quotations (id, owner_id, client, rooms, rates, totals, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(snapshot.id)
        .bind(snapshot.owner_id)
        .bind(serde_json::to_value(&snapshot.client)?)
        .bind(serde_json::to_value(&snapshot.rooms)?)
        .bind(serde_json::to_value(&snapshot.rates)?)
        .bind(serde_json::to_value(&snapshot.totals)?)
        .bind(snapshot.status.as_str())
        .bind(snapshot.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, owner_id: Uuid, id: Uuid) -> Result<QuotationSnapshot> {
        sqlx::query_as::<_, QuotationRow>(
            r#"
            SELECT id, owner_id, client, rooms, rates, totals, status, created_at
            FROM quotations
            WHERE id = $1
              AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)?
        .parse()
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<QuotationSnapshot>> {
        let rows = sqlx::query_as::<_, QuotationRow>(
            r#"
            SELECT id, owner_id, client, rooms, rates, totals, status, created_at
            FROM quotations
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(QuotationRow::parse).collect()
    }
}
