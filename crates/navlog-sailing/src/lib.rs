//! Sailing coordination for the Navlog fleet tracker.
//!
//! This crate is the use-case layer between the HTTP surface and storage.
//! It owns two things:
//!
//! - the storage seams ([`CaptainDirectory`], [`VoyageRegistry`],
//!   [`PositionLog`]) that describe exactly what the coordinator needs from
//!   persistence, and
//! - the [`SailingCoordinator`] itself, which enforces the one-active-voyage
//!   contract end to end: find the caller's active voyage, log positions
//!   against it, toggle it between `Docked` and `Sailing`, and complete it
//!   with analytics-derived aggregates.
//!
//! # Modules
//!
//! - [`coordinator`] -- the captain-scoped operations
//! - [`store`] -- the storage trait seams
//! - [`error`] -- [`StoreError`] and [`SailingError`]

pub mod coordinator;
pub mod error;
pub mod store;

// Re-export primary types for convenience.
pub use coordinator::SailingCoordinator;
pub use error::{SailingError, StoreError};
pub use store::{CaptainDirectory, PositionLog, VoyageRegistry};
