//! The append-only position history ledger.
//!
//! Fixes are immutable audit data: this store can append and read, nothing
//! else. Streams come back ordered by recorded timestamp (insertion ID as
//! the tie-break for equal timestamps), regardless of arrival order.
//!
//! No geographic bounds validation happens here; any finite coordinate is
//! accepted and rejecting bad input is the coordinator's job.

use chrono::{DateTime, Utc};
use navlog_sailing::{PositionLog, StoreError};
use navlog_types::{Coordinate, PositionFix, PositionFixId, PositionReport, VoyageId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `position_history` table.
pub struct PositionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PositionStore<'a> {
    /// Create a new position store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append one fix to a voyage's history and return the stored record.
    ///
    /// The timestamp is assigned by the database at insert time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::UnknownVoyage`] if `voyage_id` does not reference
    /// an existing voyage, [`DbError::Postgres`] for any other failure.
    pub async fn append(
        &self,
        voyage_id: VoyageId,
        report: &PositionReport,
    ) -> Result<PositionFix, DbError> {
        let id = PositionFixId::new();
        let row = sqlx::query_as::<_, PositionFixRow>(
            r"INSERT INTO position_history
                  (id, voyage_id, latitude, longitude, speed_knots, heading_degrees)
              VALUES ($1, $2, $3, $4, $5, $6)
              RETURNING id, voyage_id, latitude, longitude, speed_knots, heading_degrees, recorded_at",
        )
        .bind(id.into_inner())
        .bind(voyage_id.into_inner())
        .bind(report.latitude)
        .bind(report.longitude)
        .bind(report.speed_knots)
        .bind(report.heading_degrees)
        .fetch_one(self.pool)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(sqlx::error::DatabaseError::is_foreign_key_violation)
            {
                DbError::UnknownVoyage(voyage_id)
            } else {
                DbError::Postgres(err)
            }
        })?;

        tracing::debug!(fix_id = %id, %voyage_id, "Position fix appended");
        Ok(row.into())
    }

    /// A voyage's full fix history, ascending by recorded timestamp.
    ///
    /// Finite and re-readable; each call is an independent snapshot query.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn stream_for(&self, voyage_id: VoyageId) -> Result<Vec<PositionFix>, DbError> {
        let rows = sqlx::query_as::<_, PositionFixRow>(
            r"SELECT id, voyage_id, latitude, longitude, speed_knots, heading_degrees, recorded_at
              FROM position_history
              WHERE voyage_id = $1
              ORDER BY recorded_at, id",
        )
        .bind(voyage_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PositionFix::from).collect())
    }
}

impl PositionLog for PositionStore<'_> {
    async fn append_fix(
        &self,
        voyage_id: VoyageId,
        report: PositionReport,
    ) -> Result<PositionFix, StoreError> {
        self.append(voyage_id, &report)
            .await
            .map_err(StoreError::from)
    }

    async fn fixes_for(&self, voyage_id: VoyageId) -> Result<Vec<PositionFix>, StoreError> {
        self.stream_for(voyage_id).await.map_err(StoreError::from)
    }
}

/// A row from the `position_history` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PositionFixRow {
    /// Fix ID.
    pub id: Uuid,
    /// Owning voyage ID.
    pub voyage_id: Uuid,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Recorded speed in knots, if any.
    pub speed_knots: Option<f64>,
    /// Recorded heading in degrees, if any.
    pub heading_degrees: Option<i16>,
    /// When the fix was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl From<PositionFixRow> for PositionFix {
    fn from(row: PositionFixRow) -> Self {
        Self {
            id: row.id.into(),
            voyage_id: row.voyage_id.into(),
            coordinate: Coordinate::new(row.latitude, row.longitude),
            speed_knots: row.speed_knots,
            heading_degrees: row.heading_degrees,
            recorded_at: row.recorded_at,
        }
    }
}
