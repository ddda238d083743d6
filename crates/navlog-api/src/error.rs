//! Error types for the captain-facing API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! `From` impls at the bottom define the whole error-to-status mapping in
//! one place, so handlers can use `?` throughout.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use navlog_db::DbError;
use navlog_sailing::{SailingError, StoreError};

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The caller did not present a usable account identity.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The authenticated account lacks the captain role.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request was well-formed but semantically invalid.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request conflicts with the current state of the system.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::Internal(msg) => {
                // Internal details go to the log, not over the wire.
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("internal error"),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<SailingError> for ApiError {
    fn from(err: SailingError) -> Self {
        match err {
            SailingError::UnknownCaptain(account_id) => Self::Forbidden(format!(
                "account {account_id} has no captain record"
            )),
            SailingError::Store(store_err) => store_err.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Integrity(msg) => Self::Internal(format!("integrity violation: {msg}")),
            StoreError::Storage(source) => Self::Internal(source.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::InvalidState(msg) => Self::BadRequest(msg),
            DbError::ActiveVoyageExists(captain_id) => Self::Conflict(format!(
                "captain {captain_id} already has an active voyage"
            )),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navlog_types::{AccountId, CaptainId};

    #[test]
    fn unknown_captain_maps_to_forbidden() {
        let err: ApiError = SailingError::UnknownCaptain(AccountId::new()).into();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn duplicate_active_voyage_maps_to_conflict() {
        let err: ApiError = DbError::ActiveVoyageExists(CaptainId::new()).into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn invalid_state_maps_to_bad_request() {
        let err: ApiError = DbError::InvalidState(String::from("nope")).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn integrity_violations_stay_internal() {
        let err: ApiError = StoreError::Integrity(String::from("two active voyages")).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
