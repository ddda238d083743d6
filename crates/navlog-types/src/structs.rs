//! Core entity structs for the Navlog fleet tracker.
//!
//! Covers the voyage record and its port-name-enriched projection, the
//! immutable position fix, the wire DTOs for voyage creation and position
//! reporting, and the aggregate statistics derived at voyage completion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::VoyageStatus;
use crate::ids::{CaptainId, PortId, PositionFixId, ShipId, VoyageId};

// ---------------------------------------------------------------------------
// Coordinate
// ---------------------------------------------------------------------------

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinate {
    /// Latitude in decimal degrees, north positive.
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in decimal degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite numbers.
    ///
    /// The stores accept any finite coordinate; rejecting NaN/infinity is
    /// the caller's job and this is the check they use.
    pub const fn is_finite(self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Voyage
// ---------------------------------------------------------------------------

/// One journey of a ship under a captain between two ports (a "sail").
///
/// # Invariants
///
/// - `arrival_time` is `None` exactly while the voyage is active
///   (`status` is `Docked` or `Sailing`).
/// - The three aggregate fields are `None` until the voyage transitions to
///   [`VoyageStatus::Finished`], at which point all three are populated in
///   the same atomic write that sets `arrival_time`. A `Cancelled` voyage
///   keeps them `None` forever.
/// - At most one voyage per captain is active at any time; this is enforced
///   by a partial unique index in storage, not just here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Voyage {
    /// Voyage identifier.
    pub id: VoyageId,
    /// The ship making the journey.
    pub ship_id: ShipId,
    /// The captain commanding the voyage.
    pub captain_id: CaptainId,
    /// Port of departure.
    pub origin_port_id: PortId,
    /// Port of destination.
    pub destination_port_id: PortId,
    /// Current lifecycle state.
    pub status: VoyageStatus,
    /// When the voyage departed.
    pub departure_time: DateTime<Utc>,
    /// When the voyage ended (completion or cancellation). `None` while active.
    pub arrival_time: Option<DateTime<Utc>>,
    /// Total great-circle distance travelled, in nautical miles.
    pub total_distance_nm: Option<f64>,
    /// Mean of the recorded speeds across the position history, in knots.
    pub average_speed_knots: Option<f64>,
    /// Maximum recorded speed across the position history, in knots.
    pub max_speed_knots: Option<f64>,
}

impl Voyage {
    /// Whether the voyage is active (no arrival recorded yet).
    pub const fn is_active(&self) -> bool {
        self.arrival_time.is_none()
    }

    /// The finalized aggregates, present only once the voyage is `Finished`.
    pub const fn aggregates(&self) -> Option<VoyageAggregates> {
        match (
            self.total_distance_nm,
            self.average_speed_knots,
            self.max_speed_knots,
        ) {
            (Some(total_distance_nm), Some(average_speed_knots), Some(max_speed_knots)) => {
                Some(VoyageAggregates {
                    total_distance_nm,
                    average_speed_knots,
                    max_speed_knots,
                })
            }
            _ => None,
        }
    }
}

/// A voyage enriched with the names of its origin and destination ports.
///
/// This is a read-only projection produced by a join against the `port`
/// table; it is what captain-facing endpoints return so the UI does not
/// have to resolve port IDs itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VoyageSummary {
    /// The underlying voyage record.
    pub voyage: Voyage,
    /// Name of the origin port.
    pub origin_port_name: String,
    /// Name of the destination port.
    pub destination_port_name: String,
}

/// The fields required to register a new voyage.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewVoyage {
    /// The ship making the journey.
    pub ship_id: ShipId,
    /// The captain commanding the voyage.
    pub captain_id: CaptainId,
    /// Port of departure.
    pub origin_port_id: PortId,
    /// Port of destination.
    pub destination_port_id: PortId,
    /// Initial lifecycle state; must be `Docked` or `Sailing`.
    pub status: VoyageStatus,
    /// When the voyage departs.
    pub departure_time: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Position fixes
// ---------------------------------------------------------------------------

/// One timestamped geographic report for a voyage.
///
/// Fixes are immutable audit data: once stored they are never edited or
/// deleted, only read back in `recorded_at` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PositionFix {
    /// Fix identifier.
    pub id: PositionFixId,
    /// The voyage this fix belongs to.
    pub voyage_id: VoyageId,
    /// Where the ship was.
    pub coordinate: Coordinate,
    /// Speed over ground in knots, if the sender reported one.
    pub speed_knots: Option<f64>,
    /// Heading in degrees (0-359), if the sender reported one.
    pub heading_degrees: Option<i16>,
    /// When the fix was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// An incoming position report, before it is tied to a voyage.
///
/// This is the wire shape submitted by a captain's client; the coordinator
/// resolves which voyage it belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PositionReport {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Speed over ground in knots, if known.
    pub speed_knots: Option<f64>,
    /// Heading in degrees (0-359), if known.
    pub heading_degrees: Option<i16>,
}

impl PositionReport {
    /// The report's coordinate.
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Aggregate statistics derived from a voyage's position history.
///
/// Computed once, when the voyage completes, and written into the voyage
/// record atomically with the transition to `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VoyageAggregates {
    /// Sum of great-circle distances between consecutive fixes, in nautical miles.
    pub total_distance_nm: f64,
    /// Mean of the recorded speeds, in knots. Zero if no fix recorded a speed.
    pub average_speed_knots: f64,
    /// Maximum recorded speed, in knots. Zero if no fix recorded a speed.
    pub max_speed_knots: f64,
}
