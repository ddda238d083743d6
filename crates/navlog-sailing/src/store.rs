//! Storage seams the sailing coordinator is written against.
//!
//! The coordinator never talks to a database directly; it is generic over
//! these three traits. Production binds them to the `PostgreSQL` stores in
//! `navlog-db`; tests bind them to in-memory fakes. All methods return
//! `Send` futures so coordinator calls can be driven from a multi-threaded
//! server without a global lock.

use core::future::Future;

use navlog_types::{
    AccountId, CaptainId, PositionFix, PositionReport, VoyageAggregates, VoyageId, VoyageStatus,
    VoyageSummary,
};

use crate::error::StoreError;

/// Resolution of an upstream account identity to a captain record.
///
/// Identity itself (credentials, roles) is an external collaborator's
/// responsibility; the core only needs this one lookup.
pub trait CaptainDirectory {
    /// The captain linked to `account_id`, or `None` if the account has no
    /// captain record.
    fn captain_for_account(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = Result<Option<CaptainId>, StoreError>> + Send;
}

/// The voyage registry: lifecycle queries and transition primitives.
pub trait VoyageRegistry {
    /// The captain's active voyage (arrival time unset), if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Integrity`] if storage holds more than one
    /// active voyage for the captain.
    fn find_active_voyage(
        &self,
        captain_id: CaptainId,
    ) -> impl Future<Output = Result<Option<VoyageSummary>, StoreError>> + Send;

    /// Toggle an active voyage between `Docked` and `Sailing`.
    ///
    /// Fails closed (`Ok(false)`) if the voyage is not active or the target
    /// status is terminal; completion has its own dedicated operation
    /// because it must also write aggregates atomically.
    fn apply_status_change(
        &self,
        voyage_id: VoyageId,
        status: VoyageStatus,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Finish an active voyage: set `Finished`, the arrival time, and the
    /// three aggregate fields in one atomic write.
    ///
    /// Returns `Ok(false)` if the voyage was no longer active (already
    /// completed or cancelled, or unknown), making a retried completion a
    /// harmless no-op.
    fn complete_voyage(
        &self,
        voyage_id: VoyageId,
        aggregates: VoyageAggregates,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// The append-only position history for voyages.
pub trait PositionLog {
    /// Append one fix to the voyage's history and return the stored record.
    fn append_fix(
        &self,
        voyage_id: VoyageId,
        report: PositionReport,
    ) -> impl Future<Output = Result<PositionFix, StoreError>> + Send;

    /// The voyage's full fix history, ascending by recorded timestamp.
    ///
    /// Finite and re-readable; this is a snapshot query, not a cursor.
    fn fixes_for(
        &self,
        voyage_id: VoyageId,
    ) -> impl Future<Output = Result<Vec<PositionFix>, StoreError>> + Send;
}
