//! Saved quotations: snapshots, storage and the editing session.

pub mod models;
pub mod queries;
pub mod services;

pub use models::{QuotationSnapshot, QuotationStatus, QuotationSummary, SaveStatus};
pub use queries::{PgSnapshotStore, SnapshotStore};
pub use services::QuotationSession;
