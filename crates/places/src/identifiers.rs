//! Typed record identifiers.
//!
//! Ids are opaque strings behind `Arc<str>`, so lookup keys and snapshots
//! clone cheaply. Placemark ids are minted per session by the store;
//! destination ids come from the external repository that persists them.

use std::fmt;
use std::sync::Arc;

macro_rules! record_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

record_id!(PlaceId, "Identifies a placemark record within a session");
record_id!(DestinationId, "Identifies a destination and its itinerary");

impl PlaceId {
    /// Mint the `n`-th placemark id of a session.
    pub(crate) fn minted(n: u64) -> Self {
        Self::new(format!("pm_{n}"))
    }
}
