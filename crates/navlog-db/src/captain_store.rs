//! Captain lookups against the `captain` table.
//!
//! Captains are managed upstream; the voyage core only ever resolves the
//! authenticated account to its captain record, so that is the whole
//! surface of this store.

use navlog_sailing::{CaptainDirectory, StoreError};
use navlog_types::{AccountId, CaptainId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;

/// Operations on the `captain` table.
pub struct CaptainStore<'a> {
    pool: &'a PgPool,
}

impl<'a> CaptainStore<'a> {
    /// Create a new captain store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The captain linked to the given account, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<CaptainId>, DbError> {
        let row: Option<(Uuid,)> =
            sqlx::query_as(r"SELECT id FROM captain WHERE account_id = $1")
                .bind(account_id.into_inner())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(|(id,)| CaptainId::from(id)))
    }
}

impl CaptainDirectory for CaptainStore<'_> {
    async fn captain_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<CaptainId>, StoreError> {
        self.find_by_account(account_id)
            .await
            .map_err(StoreError::from)
    }
}
