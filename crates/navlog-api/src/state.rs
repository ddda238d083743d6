//! Shared application state for the API server.
//!
//! [`AppState`] holds the `PostgreSQL` pool and hands out per-request
//! store and coordinator values. The stores borrow the pool, so building
//! them is free; nothing is cached between requests.

use navlog_db::{CaptainStore, PositionStore, PostgresPool, VoyageStore};
use navlog_sailing::SailingCoordinator;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    db: PostgresPool,
}

impl AppState {
    /// Create application state over a connected pool.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }

    /// A sailing coordinator bound to the `PostgreSQL` stores.
    pub const fn coordinator(
        &self,
    ) -> SailingCoordinator<CaptainStore<'_>, VoyageStore<'_>, PositionStore<'_>> {
        SailingCoordinator::new(
            CaptainStore::new(self.db.pool()),
            VoyageStore::new(self.db.pool()),
            PositionStore::new(self.db.pool()),
        )
    }

    /// The voyage store, for registry endpoints that bypass the coordinator.
    pub const fn voyages(&self) -> VoyageStore<'_> {
        VoyageStore::new(self.db.pool())
    }
}
