//! Caller identity extraction.
//!
//! Authentication lives in an upstream gateway; by the time a request
//! reaches this server the gateway has validated credentials and stamped
//! the account UUID into the `x-account-id` header. [`CallerAccount`] is
//! the extractor that reads it, so handlers take an already-resolved
//! [`AccountId`] and never see raw credentials.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use navlog_types::AccountId;
use uuid::Uuid;

use crate::error::ApiError;

/// Header carrying the authenticated account UUID, set by the gateway.
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// The authenticated account behind the current request.
#[derive(Debug, Clone, Copy)]
pub struct CallerAccount(pub AccountId);

impl<S> FromRequestParts<S> for CallerAccount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACCOUNT_ID_HEADER)
            .ok_or_else(|| {
                ApiError::Unauthorized(format!("missing {ACCOUNT_ID_HEADER} header"))
            })?
            .to_str()
            .map_err(|_| {
                ApiError::Unauthorized(format!("{ACCOUNT_ID_HEADER} header is not valid text"))
            })?;

        let uuid: Uuid = raw.parse().map_err(|_| {
            ApiError::Unauthorized(format!("{ACCOUNT_ID_HEADER} header is not a valid UUID"))
        })?;

        Ok(Self(AccountId::from(uuid)))
    }
}
