//! Shared type definitions for the Navlog fleet tracker.
//!
//! This crate holds the domain vocabulary used by every other crate:
//! strongly-typed identifiers, the voyage lifecycle enum, the voyage and
//! position-fix records, and the wire DTOs exchanged with clients.
//!
//! # Modules
//!
//! - [`ids`] -- UUID v7 newtype identifiers
//! - [`enums`] -- the [`VoyageStatus`] lifecycle enum
//! - [`structs`] -- entity records, projections, and DTOs

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export primary types for convenience.
pub use enums::VoyageStatus;
pub use ids::{AccountId, CaptainId, PortId, PositionFixId, ShipId, VoyageId};
pub use structs::{
    Coordinate, NewVoyage, PositionFix, PositionReport, Voyage, VoyageAggregates, VoyageSummary,
};
