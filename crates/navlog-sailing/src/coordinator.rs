//! The captain-facing sailing coordinator.
//!
//! [`SailingCoordinator`] is the use-case layer for captain-scoped voyage
//! operations and the only place that touches both the voyage registry and
//! the analytics engine. Every method takes an already-resolved
//! [`AccountId`]; credential validation and role checks happen upstream.
//!
//! Expected outcomes -- no active voyage, a declined status change -- travel
//! as `Ok(false)` / `Ok(None)` because a captain who is not currently
//! sailing is a normal caller, not an error condition.

use navlog_analytics::compute_aggregates;
use navlog_types::{AccountId, PositionReport, VoyageStatus, VoyageSummary};

use crate::error::SailingError;
use crate::store::{CaptainDirectory, PositionLog, VoyageRegistry};

/// Orchestrates captain-scoped voyage operations.
///
/// Generic over the storage seams so the same logic runs against the
/// `PostgreSQL` stores in production and in-memory fakes in tests.
pub struct SailingCoordinator<D, R, P> {
    directory: D,
    registry: R,
    positions: P,
}

impl<D, R, P> SailingCoordinator<D, R, P>
where
    D: CaptainDirectory,
    R: VoyageRegistry,
    P: PositionLog,
{
    /// Create a coordinator over the given storage seams.
    pub const fn new(directory: D, registry: R, positions: P) -> Self {
        Self {
            directory,
            registry,
            positions,
        }
    }

    /// The calling captain's active voyage, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SailingError::UnknownCaptain`] if no captain record is
    /// linked to the account -- the caller is authenticated but not a
    /// captain, which is an authorization failure, not a missing voyage.
    pub async fn active_voyage(
        &self,
        account_id: AccountId,
    ) -> Result<Option<VoyageSummary>, SailingError> {
        let captain_id = self
            .directory
            .captain_for_account(account_id)
            .await?
            .ok_or(SailingError::UnknownCaptain(account_id))?;

        Ok(self.registry.find_active_voyage(captain_id).await?)
    }

    /// Record a position report against the calling captain's active voyage.
    ///
    /// Returns `Ok(false)` without appending anything when the captain has
    /// no active voyage (or no captain record), or when the report carries a
    /// non-finite coordinate. `Ok(true)` means exactly one fix was appended.
    pub async fn add_position(
        &self,
        account_id: AccountId,
        report: PositionReport,
    ) -> Result<bool, SailingError> {
        if !report.coordinate().is_finite() {
            tracing::warn!(%account_id, "Rejected position report with non-finite coordinate");
            return Ok(false);
        }

        let Some(voyage) = self.resolve_active(account_id).await? else {
            return Ok(false);
        };

        let fix = self.positions.append_fix(voyage.voyage.id, report).await?;
        tracing::debug!(voyage_id = %voyage.voyage.id, fix_id = %fix.id, "Position fix appended");
        Ok(true)
    }

    /// Toggle the calling captain's active voyage between `Docked` and
    /// `Sailing`.
    ///
    /// Any other target status is declined here (`Ok(false)`) before storage
    /// is consulted, in addition to the registry's own fail-closed check, so
    /// the caller-facing contract is explicit: completion and cancellation
    /// are not reachable through this path.
    pub async fn update_status(
        &self,
        account_id: AccountId,
        new_status: VoyageStatus,
    ) -> Result<bool, SailingError> {
        if !new_status.is_active() {
            tracing::debug!(%account_id, %new_status, "Declined non-toggle status target");
            return Ok(false);
        }

        let Some(voyage) = self.resolve_active(account_id).await? else {
            return Ok(false);
        };

        let changed = self
            .registry
            .apply_status_change(voyage.voyage.id, new_status)
            .await?;
        if changed {
            tracing::info!(voyage_id = %voyage.voyage.id, %new_status, "Voyage status changed");
        }
        Ok(changed)
    }

    /// Complete the calling captain's active voyage.
    ///
    /// Reads the voyage's full position history, derives the aggregates, and
    /// hands them to the registry's atomic completion write. Returns
    /// `Ok(false)` when there is nothing to complete, including when a
    /// concurrent caller completed the voyage between our read and write.
    ///
    /// The history read and the completion write are deliberately not one
    /// transaction: a fix appended after the read is excluded from the
    /// aggregates, which is accepted for a voyage that is ending anyway.
    /// The completion write itself is atomic, so aggregates and the
    /// `Finished` status can never be observed apart.
    pub async fn complete_active(&self, account_id: AccountId) -> Result<bool, SailingError> {
        let Some(voyage) = self.resolve_active(account_id).await? else {
            return Ok(false);
        };
        let voyage_id = voyage.voyage.id;

        let fixes = self.positions.fixes_for(voyage_id).await?;
        let aggregates = compute_aggregates(&fixes);

        let completed = self.registry.complete_voyage(voyage_id, aggregates).await?;
        if completed {
            tracing::info!(
                %voyage_id,
                fixes = fixes.len(),
                total_distance_nm = aggregates.total_distance_nm,
                average_speed_knots = aggregates.average_speed_knots,
                max_speed_knots = aggregates.max_speed_knots,
                "Voyage completed"
            );
        } else {
            tracing::debug!(%voyage_id, "Completion was a no-op; voyage already terminal");
        }
        Ok(completed)
    }

    /// Resolve the account to its captain's active voyage.
    ///
    /// Unlike [`active_voyage`](Self::active_voyage), a missing captain
    /// record is folded into "nothing to do" here: the mutating operations
    /// report `false` for it, matching their no-active-voyage outcome.
    async fn resolve_active(
        &self,
        account_id: AccountId,
    ) -> Result<Option<VoyageSummary>, SailingError> {
        let Some(captain_id) = self.directory.captain_for_account(account_id).await? else {
            return Ok(None);
        };
        Ok(self.registry.find_active_voyage(captain_id).await?)
    }
}
