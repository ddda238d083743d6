//! The voyage registry: CRUD-level storage of voyage records plus the
//! lifecycle transition primitives.
//!
//! Lifecycle writes are single parameterized UPDATEs guarded by
//! `arrival_time IS NULL`, so "was the voyage still active" is decided by
//! the same statement that mutates it -- there is no read-check-write
//! window. The one-active-voyage rule itself lives in the partial unique
//! index created by the schema migration, not here.

use chrono::{DateTime, Utc};
use navlog_sailing::{StoreError, VoyageRegistry};
use navlog_types::{
    CaptainId, NewVoyage, Voyage, VoyageAggregates, VoyageId, VoyageStatus, VoyageSummary,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Joined SELECT used by every query that returns a voyage summary.
const SUMMARY_SELECT: &str = r"
    SELECT
        v.id,
        v.ship_id,
        v.captain_id,
        v.origin_port_id,
        v.destination_port_id,
        v.status::TEXT AS status,
        v.departure_time,
        v.arrival_time,
        v.total_distance_nm,
        v.average_speed_knots,
        v.max_speed_knots,
        op.name AS origin_port_name,
        dp.name AS destination_port_name
    FROM voyage v
    JOIN port op ON v.origin_port_id = op.id
    JOIN port dp ON v.destination_port_id = dp.id";

/// Operations on the `voyage` table.
pub struct VoyageStore<'a> {
    pool: &'a PgPool,
}

impl<'a> VoyageStore<'a> {
    /// Create a new voyage store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a new voyage and return its port-name-enriched record.
    ///
    /// # Errors
    ///
    /// - [`DbError::InvalidState`] if the initial status is not `Docked` or
    ///   `Sailing`.
    /// - [`DbError::ActiveVoyageExists`] if the captain already has an
    ///   active voyage (the partial unique index decides this, so two
    ///   concurrent creations cannot both succeed).
    /// - [`DbError::InvalidState`] if a referenced ship, captain, or port
    ///   does not exist.
    pub async fn create(&self, new_voyage: &NewVoyage) -> Result<VoyageSummary, DbError> {
        if !new_voyage.status.is_active() {
            return Err(DbError::InvalidState(format!(
                "a voyage cannot be created as {}",
                new_voyage.status
            )));
        }

        let id = VoyageId::new();
        let insert = sqlx::query(
            r"INSERT INTO voyage
                  (id, ship_id, captain_id, origin_port_id, destination_port_id, status, departure_time)
              VALUES ($1, $2, $3, $4, $5, $6::voyage_status, $7)",
        )
        .bind(id.into_inner())
        .bind(new_voyage.ship_id.into_inner())
        .bind(new_voyage.captain_id.into_inner())
        .bind(new_voyage.origin_port_id.into_inner())
        .bind(new_voyage.destination_port_id.into_inner())
        .bind(new_voyage.status.as_db_str())
        .bind(new_voyage.departure_time)
        .execute(self.pool)
        .await;

        if let Err(err) = insert {
            if let Some(db_err) = err.as_database_error() {
                if db_err.is_unique_violation() {
                    return Err(DbError::ActiveVoyageExists(new_voyage.captain_id));
                }
                if db_err.is_foreign_key_violation() {
                    return Err(DbError::InvalidState(
                        "voyage references a missing ship, captain, or port".to_owned(),
                    ));
                }
            }
            return Err(err.into());
        }

        tracing::info!(voyage_id = %id, captain_id = %new_voyage.captain_id, "Voyage created");

        self.get(id).await?.ok_or_else(|| {
            DbError::Integrity(format!("voyage {id} not readable after insert"))
        })
    }

    /// Fetch one voyage with its port names.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn get(&self, voyage_id: VoyageId) -> Result<Option<VoyageSummary>, DbError> {
        let sql = format!("{SUMMARY_SELECT} WHERE v.id = $1");
        let row = sqlx::query_as::<_, VoyageSummaryRow>(&sql)
            .bind(voyage_id.into_inner())
            .fetch_optional(self.pool)
            .await?;

        row.map(VoyageSummary::try_from).transpose()
    }

    /// The captain's active voyage (`arrival_time IS NULL`), if any.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Integrity`] if more than one active voyage exists
    /// for the captain. That state is impossible while the partial unique
    /// index is in place; seeing it means the data needs operator repair,
    /// so it is never resolved by picking a row.
    pub async fn find_active(
        &self,
        captain_id: CaptainId,
    ) -> Result<Option<VoyageSummary>, DbError> {
        let sql = format!("{SUMMARY_SELECT} WHERE v.captain_id = $1 AND v.arrival_time IS NULL");
        let mut rows = sqlx::query_as::<_, VoyageSummaryRow>(&sql)
            .bind(captain_id.into_inner())
            .fetch_all(self.pool)
            .await?;

        if rows.len() > 1 {
            return Err(DbError::Integrity(format!(
                "captain {captain_id} has {} active voyages",
                rows.len()
            )));
        }
        rows.pop().map(VoyageSummary::try_from).transpose()
    }

    /// Toggle an active voyage between `Docked` and `Sailing`.
    ///
    /// Fails closed (`Ok(false)`) for terminal targets and for voyages that
    /// are no longer active; completion and cancellation have dedicated
    /// operations because they also set the arrival time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn apply_status(
        &self,
        voyage_id: VoyageId,
        status: VoyageStatus,
    ) -> Result<bool, DbError> {
        if !status.is_active() {
            return Ok(false);
        }

        let result = sqlx::query(
            r"UPDATE voyage
              SET status = $2::voyage_status
              WHERE id = $1 AND arrival_time IS NULL",
        )
        .bind(voyage_id.into_inner())
        .bind(status.as_db_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Finish an active voyage.
    ///
    /// Status, arrival time, and the three aggregate fields change in one
    /// atomic UPDATE; a voyage can never be observed `Finished` without its
    /// aggregates or vice versa. Returns `Ok(false)` if the voyage was not
    /// active anymore (already finished/cancelled, or unknown), which makes
    /// a retried completion a harmless no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn complete(
        &self,
        voyage_id: VoyageId,
        aggregates: VoyageAggregates,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            r"UPDATE voyage
              SET status = 'finished'::voyage_status,
                  arrival_time = now(),
                  total_distance_nm = $2,
                  average_speed_knots = $3,
                  max_speed_knots = $4
              WHERE id = $1 AND arrival_time IS NULL",
        )
        .bind(voyage_id.into_inner())
        .bind(aggregates.total_distance_nm)
        .bind(aggregates.average_speed_knots)
        .bind(aggregates.max_speed_knots)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Abandon an active voyage.
    ///
    /// Sets `Cancelled` and the arrival time; aggregates stay NULL forever.
    /// Returns `Ok(false)` if the voyage was not active.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails.
    pub async fn cancel(&self, voyage_id: VoyageId) -> Result<bool, DbError> {
        let result = sqlx::query(
            r"UPDATE voyage
              SET status = 'cancelled'::voyage_status,
                  arrival_time = now()
              WHERE id = $1 AND arrival_time IS NULL",
        )
        .bind(voyage_id.into_inner())
        .execute(self.pool)
        .await?;

        let cancelled = result.rows_affected() > 0;
        if cancelled {
            tracing::info!(%voyage_id, "Voyage cancelled");
        }
        Ok(cancelled)
    }
}

impl VoyageRegistry for VoyageStore<'_> {
    async fn find_active_voyage(
        &self,
        captain_id: CaptainId,
    ) -> Result<Option<VoyageSummary>, StoreError> {
        self.find_active(captain_id).await.map_err(StoreError::from)
    }

    async fn apply_status_change(
        &self,
        voyage_id: VoyageId,
        status: VoyageStatus,
    ) -> Result<bool, StoreError> {
        self.apply_status(voyage_id, status)
            .await
            .map_err(StoreError::from)
    }

    async fn complete_voyage(
        &self,
        voyage_id: VoyageId,
        aggregates: VoyageAggregates,
    ) -> Result<bool, StoreError> {
        self.complete(voyage_id, aggregates)
            .await
            .map_err(StoreError::from)
    }
}

/// A row from the `voyage` table joined with port names.
///
/// Uses runtime types rather than compile-time checked types to avoid
/// requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VoyageSummaryRow {
    /// Voyage ID.
    pub id: Uuid,
    /// Ship ID.
    pub ship_id: Uuid,
    /// Captain ID.
    pub captain_id: Uuid,
    /// Origin port ID.
    pub origin_port_id: Uuid,
    /// Destination port ID.
    pub destination_port_id: Uuid,
    /// Lifecycle status as a string (cast from the `PostgreSQL` enum).
    pub status: String,
    /// Departure timestamp.
    pub departure_time: DateTime<Utc>,
    /// Arrival timestamp; NULL while the voyage is active.
    pub arrival_time: Option<DateTime<Utc>>,
    /// Total distance in nautical miles; set at completion.
    pub total_distance_nm: Option<f64>,
    /// Average recorded speed in knots; set at completion.
    pub average_speed_knots: Option<f64>,
    /// Maximum recorded speed in knots; set at completion.
    pub max_speed_knots: Option<f64>,
    /// Name of the origin port.
    pub origin_port_name: String,
    /// Name of the destination port.
    pub destination_port_name: String,
}

impl TryFrom<VoyageSummaryRow> for VoyageSummary {
    type Error = DbError;

    fn try_from(row: VoyageSummaryRow) -> Result<Self, Self::Error> {
        let status = VoyageStatus::from_db_str(&row.status).ok_or_else(|| {
            DbError::Decode(format!("unknown voyage status label {:?}", row.status))
        })?;

        Ok(Self {
            voyage: Voyage {
                id: VoyageId::from(row.id),
                ship_id: row.ship_id.into(),
                captain_id: row.captain_id.into(),
                origin_port_id: row.origin_port_id.into(),
                destination_port_id: row.destination_port_id.into(),
                status,
                departure_time: row.departure_time,
                arrival_time: row.arrival_time,
                total_distance_nm: row.total_distance_nm,
                average_speed_knots: row.average_speed_knots,
                max_speed_knots: row.max_speed_knots,
            },
            origin_port_name: row.origin_port_name,
            destination_port_name: row.destination_port_name,
        })
    }
}
