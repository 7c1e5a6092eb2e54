//! Route request lifecycle.
//!
//! A route is only ever requested for the current selection, and only when
//! that selection is not already a permanent member of the destination being
//! edited. Resolution is filled in by the external routing service; a failed
//! lookup resolves to `Unavailable` and is never retried.

use std::time::Duration;

use trip_places::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum RouteStatus {
    /// Issued to the routing service, result pending
    Requested,
    Resolved(RouteLeg),
    Unavailable,
}

/// A pending or resolved route from the user's location to a placemark
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub place: PlaceId,
    pub transport: TransportMode,
    pub status: RouteStatus,
}

impl RouteRequest {
    pub fn new(place: PlaceId, transport: TransportMode) -> Self {
        Self {
            place,
            transport,
            status: RouteStatus::Requested,
        }
    }

    /// Resolved travel time, if any
    pub fn travel_time(&self) -> Option<Duration> {
        match &self.status {
            RouteStatus::Resolved(leg) => Some(leg.duration),
            _ => None,
        }
    }
}

/// Abbreviated hours-and-minutes display, e.g. "1h 5m", "12m".
pub fn format_travel_time(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
