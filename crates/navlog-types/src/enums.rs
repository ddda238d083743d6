//! Enumeration types for the Navlog fleet tracker.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle state of a voyage.
///
/// The state machine is:
///
/// ```text
/// Docked <--> Sailing      (toggle while the voyage is active)
///    |           |
///    +-----------+--> Finished    (sets arrival time + aggregates, atomically)
///    |           |
///    +-----------+--> Cancelled   (sets arrival time, aggregates stay unset)
/// ```
///
/// `Finished` and `Cancelled` are terminal. A voyage is *active* exactly
/// while its arrival time is unset, which by construction means its status
/// is `Docked` or `Sailing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum VoyageStatus {
    /// The ship is moored (in port or at anchor) mid-voyage.
    Docked,
    /// The ship is underway.
    Sailing,
    /// The voyage completed normally; aggregates are populated.
    Finished,
    /// The voyage was abandoned; aggregates are never populated.
    Cancelled,
}

impl VoyageStatus {
    /// Whether this status belongs to an active voyage (`Docked`/`Sailing`).
    ///
    /// Only active statuses are legal as a creation status or as the target
    /// of the captain's status toggle.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Docked | Self::Sailing)
    }

    /// Whether this status is terminal (`Finished`/`Cancelled`).
    pub const fn is_terminal(self) -> bool {
        !self.is_active()
    }

    /// The `voyage_status` enum label stored in `PostgreSQL`.
    pub const fn as_db_str(self) -> &'static str {
        match self {
            Self::Docked => "docked",
            Self::Sailing => "sailing",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a `voyage_status` enum label read back from `PostgreSQL`.
    ///
    /// Returns `None` for labels this version of the code does not know,
    /// which callers must treat as a decode failure rather than a default.
    pub fn from_db_str(label: &str) -> Option<Self> {
        match label {
            "docked" => Some(Self::Docked),
            "sailing" => Some(Self::Sailing),
            "finished" => Some(Self::Finished),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl core::fmt::Display for VoyageStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_terminal_partition_the_states() {
        for status in [
            VoyageStatus::Docked,
            VoyageStatus::Sailing,
            VoyageStatus::Finished,
            VoyageStatus::Cancelled,
        ] {
            assert_ne!(status.is_active(), status.is_terminal());
        }
        assert!(VoyageStatus::Docked.is_active());
        assert!(VoyageStatus::Sailing.is_active());
        assert!(VoyageStatus::Finished.is_terminal());
        assert!(VoyageStatus::Cancelled.is_terminal());
    }

    #[test]
    fn db_labels_round_trip() {
        for status in [
            VoyageStatus::Docked,
            VoyageStatus::Sailing,
            VoyageStatus::Finished,
            VoyageStatus::Cancelled,
        ] {
            assert_eq!(VoyageStatus::from_db_str(status.as_db_str()), Some(status));
        }
        assert_eq!(VoyageStatus::from_db_str("scuttled"), None);
    }
}
