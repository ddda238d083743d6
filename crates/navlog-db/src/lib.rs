//! `PostgreSQL` data layer for the Navlog fleet tracker.
//!
//! This crate owns the schema (embedded sqlx migrations), the connection
//! pool, and one store per table the voyage core touches. The stores also
//! implement the storage seams from `navlog-sailing`, so the coordinator
//! can be bound to `PostgreSQL` in production and to fakes in tests.
//!
//! # Modules
//!
//! - [`postgres`] -- connection pool and configuration
//! - [`captain_store`] -- account-to-captain resolution
//! - [`voyage_store`] -- voyage records and lifecycle transitions
//! - [`position_store`] -- the append-only position history
//! - [`error`] -- shared error types

pub mod captain_store;
pub mod error;
pub mod position_store;
pub mod postgres;
pub mod voyage_store;

// Re-export primary types for convenience.
pub use captain_store::CaptainStore;
pub use error::DbError;
pub use position_store::{PositionFixRow, PositionStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use voyage_store::{VoyageStore, VoyageSummaryRow};
