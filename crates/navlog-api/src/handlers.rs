//! REST endpoint handlers for the fleet tracker API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/sailing/active` | The calling captain's active voyage |
//! | `POST` | `/api/sailing/position` | Record a position fix |
//! | `PUT` | `/api/sailing/active/status` | Toggle Docked/Sailing |
//! | `PUT` | `/api/sailing/active/complete` | Finish the active voyage |
//! | `POST` | `/api/voyages` | Register a new voyage |
//! | `GET` | `/api/voyages/{id}` | Fetch one voyage by ID |
//!
//! The `/api/sailing/*` endpoints are captain-scoped: they resolve the
//! caller via the [`CallerAccount`] extractor and operate on that
//! captain's active voyage. The `/api/voyages/*` endpoints address the
//! registry directly; the upstream gateway restricts who may reach them.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use navlog_types::{NewVoyage, PositionReport, VoyageId, VoyageStatus, VoyageSummary};
use uuid::Uuid;

use crate::error::ApiError;
use crate::identity::CallerAccount;
use crate::state::AppState;

/// Request body for the status toggle endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct StatusChange {
    /// Target lifecycle status; only `Docked` and `Sailing` are accepted.
    pub status: VoyageStatus,
}

/// `GET /api/sailing/active` -- the calling captain's active voyage.
///
/// Returns `404` when the captain is between voyages, `403` when the
/// account has no captain record at all.
pub async fn active_voyage(
    State(state): State<Arc<AppState>>,
    CallerAccount(account_id): CallerAccount,
) -> Result<Json<VoyageSummary>, ApiError> {
    let voyage = state.coordinator().active_voyage(account_id).await?;
    voyage
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(String::from("no active voyage")))
}

/// `POST /api/sailing/position` -- record a fix against the active voyage.
///
/// Returns `201` once the fix is stored. A captain with no active voyage
/// (or a report with a non-finite coordinate) gets `404`; nothing is
/// stored in that case.
pub async fn submit_position(
    State(state): State<Arc<AppState>>,
    CallerAccount(account_id): CallerAccount,
    Json(report): Json<PositionReport>,
) -> Result<StatusCode, ApiError> {
    let stored = state.coordinator().add_position(account_id, report).await?;
    if stored {
        Ok(StatusCode::CREATED)
    } else {
        Err(ApiError::NotFound(String::from(
            "no active voyage to record against",
        )))
    }
}

/// `PUT /api/sailing/active/status` -- toggle between `Docked` and `Sailing`.
///
/// Terminal targets are declined with `404`, the same answer as "no active
/// voyage"; completion and cancellation have their own endpoints.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    CallerAccount(account_id): CallerAccount,
    Json(change): Json<StatusChange>,
) -> Result<StatusCode, ApiError> {
    let changed = state
        .coordinator()
        .update_status(account_id, change.status)
        .await?;
    if changed {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(String::from(
            "no active voyage accepts that status",
        )))
    }
}

/// `PUT /api/sailing/active/complete` -- finish the active voyage.
///
/// Computes the voyage's distance and speed aggregates from its position
/// history and writes them atomically with the `Finished` transition.
/// A retry after success gets `404`, since the voyage is no longer active.
pub async fn complete_voyage(
    State(state): State<Arc<AppState>>,
    CallerAccount(account_id): CallerAccount,
) -> Result<StatusCode, ApiError> {
    let completed = state.coordinator().complete_active(account_id).await?;
    if completed {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(String::from("no active voyage to complete")))
    }
}

/// `POST /api/voyages` -- register a new voyage.
///
/// Returns `201` with the stored record, `400` for a terminal initial
/// status or dangling references, `409` when the captain already has an
/// active voyage.
pub async fn create_voyage(
    State(state): State<Arc<AppState>>,
    Json(new_voyage): Json<NewVoyage>,
) -> Result<(StatusCode, Json<VoyageSummary>), ApiError> {
    let created = state.voyages().create(&new_voyage).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/voyages/{id}` -- fetch one voyage by ID.
pub async fn get_voyage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<VoyageSummary>, ApiError> {
    let voyage_id = VoyageId::from(id);
    let voyage = state.voyages().get(voyage_id).await?;
    voyage
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("voyage {voyage_id} not found")))
}

/// `PUT /api/voyages/{id}/cancel` -- abandon a voyage.
///
/// Terminal like completion but records no aggregates. Returns `404` if
/// the voyage is not active (already finished, already cancelled, or
/// unknown).
pub async fn cancel_voyage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let voyage_id = VoyageId::from(id);
    let cancelled = state.voyages().cancel(voyage_id).await?;
    if cancelled {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::NotFound(format!("voyage {voyage_id} is not active")))
    }
}
