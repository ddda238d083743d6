//! Voyage analytics for the Navlog fleet tracker.
//!
//! Turns a voyage's raw position history into the aggregate statistics
//! stored on the voyage record at completion: total great-circle distance,
//! average recorded speed, and maximum recorded speed.
//!
//! Everything in this crate is pure computation: no storage access, no
//! clock, no randomness. The completion path in `navlog-sailing` feeds a
//! voyage's ordered fix history through [`compute_aggregates`] and writes
//! the result alongside the `Finished` transition.
//!
//! # Modules
//!
//! - [`distance`] -- haversine great-circle distance in nautical miles
//! - [`aggregates`] -- [`compute_aggregates`] over an ordered fix stream

pub mod aggregates;
pub mod distance;

// Re-export primary items at crate root.
pub use aggregates::compute_aggregates;
pub use distance::{great_circle_nm, EARTH_RADIUS_NM};
