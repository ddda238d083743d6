//! Error types for the sailing coordinator and its storage seams.

use navlog_types::AccountId;

/// Errors surfaced by the storage seams the coordinator is written against.
///
/// Expected, frequent outcomes ("no active voyage", "transition declined")
/// are *not* errors; they travel as `Ok(None)` / `Ok(false)`. These variants
/// cover genuine failures only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Storage revealed a state that violates a system invariant, e.g. more
    /// than one active voyage for a captain. Never resolved silently; the
    /// operator has to repair the data.
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// The underlying persistence failed. Propagated unmodified; retries, if
    /// any, belong to the storage client.
    #[error("storage error: {0}")]
    Storage(#[source] anyhow::Error),
}

impl StoreError {
    /// Wrap an arbitrary storage-layer failure.
    pub fn storage(err: impl Into<anyhow::Error>) -> Self {
        Self::Storage(err.into())
    }
}

/// Errors surfaced by the [`SailingCoordinator`](crate::SailingCoordinator).
#[derive(Debug, thiserror::Error)]
pub enum SailingError {
    /// No captain record is linked to the calling account. The account is
    /// authenticated upstream but lacks the captain role, so this is the
    /// caller's authorization problem rather than a missing resource.
    #[error("no captain is linked to account {0}")]
    UnknownCaptain(AccountId),

    /// A storage seam failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
