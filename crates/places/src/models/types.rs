//! Core data types and enums for trip placemarks.

use geo::Point;

use crate::identifiers::*;
use crate::models::region::Region;

// ============================================================================
// Enums
// ============================================================================

/// Transport mode for travel-time queries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransportMode {
    Driving = 0,
    Walking = 1,
}

// ============================================================================
// Data Structures
// ============================================================================

/// A named geographic point.
///
/// A placemark with `destination == None` is *transient*: a live search
/// result or an unsaved manual tap, kept only for the current session.
/// A placemark with an owner is a *permanent member* of that destination's
/// itinerary.
#[derive(Clone, Debug, PartialEq)]
pub struct Placemark {
    pub id: PlaceId,
    pub name: String,
    pub address: String,
    pub location: Point,
    pub destination: Option<DestinationId>,
}

impl Placemark {
    /// Longitude-first per `geo` convention; callers pass (lat, lon).
    pub fn new(id: PlaceId, name: impl Into<String>, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            location: Point::new(longitude, latitude),
            destination: None,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    pub fn is_transient(&self) -> bool {
        self.destination.is_none()
    }
}

/// A named region of interest with an ordered itinerary of member placemarks.
///
/// The member list never contains transient placemarks; membership is kept
/// consistent with each member's back-reference by [`PlaceStore`].
///
/// [`PlaceStore`]: crate::store::PlaceStore
#[derive(Clone, Debug)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub region: Option<Region>,
    pub members: Vec<PlaceId>,
}

impl Destination {
    pub fn new(id: DestinationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            region: None,
            members: Vec::new(),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    #[error("Placemark not found: {0}")]
    PlaceNotFound(PlaceId),

    #[error("Destination not found: {0}")]
    DestinationNotFound(DestinationId),

    #[error("Placemark {0} already belongs to a destination")]
    AlreadyMember(PlaceId),

    #[error("Placemark {0} does not belong to any destination")]
    NotMember(PlaceId),

    #[error("Placemark {0} is not in the visible set")]
    NotVisible(PlaceId),

    #[error("No placemark is selected")]
    NoSelection,

    #[error("Placemark {0} has unsaved edits")]
    PendingEdit(PlaceId),

    #[error("Placemark name must not be empty")]
    EmptyName,

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, PlaceError>;
