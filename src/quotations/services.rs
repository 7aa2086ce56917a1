//! Quotation editing session.
//!
//! Holds the in-memory project being edited and the outcome of the last save.
//! A failed save leaves the project untouched so the user can try again.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::pricing::{compute_totals, Project, RateConfiguration, Totals};

use super::models::{QuotationSnapshot, QuotationStatus, SaveStatus};
use super::queries::SnapshotStore;

#[derive(Debug, Clone)]
pub struct QuotationSession {
    project: Project,
    save_status: SaveStatus,
    last_saved_id: Option<Uuid>,
}

impl QuotationSession {
    /// Start a new, empty quotation.
    pub fn new(rates: RateConfiguration) -> Self {
        Self::from_project(Project::new(rates))
    }

    pub fn from_project(project: Project) -> Self {
        Self {
            project,
            save_status: SaveStatus::Idle,
            last_saved_id: None,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn last_saved_id(&self) -> Option<Uuid> {
        self.last_saved_id
    }

    /// Current totals for the project as it stands.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.project)
    }

    /// Persist a snapshot of the current project.
    ///
    /// Makes a single attempt. On failure the status becomes
    /// [`SaveStatus::Error`] and the error is returned.
    pub async fn save<S: SnapshotStore>(
        &mut self,
        store: &S,
        owner_id: Uuid,
        status: QuotationStatus,
    ) -> Result<QuotationSnapshot> {
        self.save_status = SaveStatus::Saving;
        let snapshot = QuotationSnapshot::capture(owner_id, &self.project, status);

        match store.save(&snapshot).await {
            Ok(()) => {
                info!(
                    "Saved quotation {} for {} ({} rooms)",
                    snapshot.id,
                    owner_id,
                    snapshot.rooms.len()
                );
                self.save_status = SaveStatus::Saved;
                self.last_saved_id = Some(snapshot.id);
                Ok(snapshot)
            }
            Err(e) => {
                warn!("Failed to save quotation for {}: {}", owner_id, e);
                self.save_status = SaveStatus::Error;
                Err(e)
            }
        }
    }
}
