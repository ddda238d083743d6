//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors with additional context about which rule was broken.
//! The conversion into the coordinator-facing
//! [`StoreError`](navlog_sailing::StoreError) lives here too, so callers
//! going through the sailing seams never see `sqlx` types.

use navlog_sailing::StoreError;
use navlog_types::{CaptainId, VoyageId};

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Storage holds a state that violates a system invariant (e.g. two
    /// active voyages for one captain). Never resolved by picking a row.
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// The caller asked for a state the lifecycle does not allow, e.g.
    /// creating a voyage in a terminal status.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The captain already has an active voyage; the partial unique index
    /// rejected a second one.
    #[error("captain {0} already has an active voyage")]
    ActiveVoyageExists(CaptainId),

    /// A position fix referenced a voyage that does not exist.
    #[error("voyage {0} does not exist")]
    UnknownVoyage(VoyageId),

    /// A stored value could not be mapped back into its domain type.
    #[error("stored value could not be decoded: {0}")]
    Decode(String),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Integrity(message) => Self::Integrity(message),
            other => Self::storage(other),
        }
    }
}
