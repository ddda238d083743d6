//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the fleet tracker has a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. All IDs use UUID v7
//! (time-ordered) for efficient database indexing.
//!
//! IDs are generated app-side at insert time; the database columns have no
//! generation default so that a store can log the ID before the round trip.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a login account.
    ///
    /// Accounts are owned by the authentication layer; the core only ever
    /// receives an already-validated account identity.
    AccountId
}

define_id! {
    /// Unique identifier for a captain (the role entity, distinct from the
    /// login account it is linked to).
    CaptainId
}

define_id! {
    /// Unique identifier for a ship.
    ShipId
}

define_id! {
    /// Unique identifier for a port.
    PortId
}

define_id! {
    /// Unique identifier for a voyage (a "sail").
    VoyageId
}

define_id! {
    /// Unique identifier for a position fix in the position history.
    PositionFixId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let captain = CaptainId::new();
        let voyage = VoyageId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(captain.into_inner(), Uuid::nil());
        assert_ne!(voyage.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = VoyageId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<VoyageId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(restored.is_ok());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = CaptainId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
