//! Immutable render state.
//!
//! The controller publishes a value snapshot instead of exposing its records
//! for direct mutation; rendering (and the FFI layer above it) consumes
//! this and nothing else.

use serde::Serialize;

use trip_places::prelude::*;

use crate::controller::{MarkerMode, PreviewStatus, SelectionController};
use crate::route::{format_travel_time, RouteStatus};

/// One marker to draw on the map
#[derive(Clone, Debug, Serialize)]
pub struct MarkerSnapshot {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Members of the destination render as starred markers
    pub permanent: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct RouteSnapshot {
    pub transport: &'static str,
    pub status: &'static str,
    /// Abbreviated travel time, present once resolved
    pub travel_time: Option<String>,
}

/// Everything rendering needs for one frame of the destination editor
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub mode: MarkerMode,
    pub markers: Vec<MarkerSnapshot>,
    pub selected: Option<String>,
    pub route: Option<RouteSnapshot>,
    /// Scene handle for the preview pane, once resolved
    pub preview: Option<String>,
    /// Drives the "clear results" affordance
    pub has_search_results: bool,
}

impl SelectionController {
    pub fn snapshot(&self) -> SessionSnapshot {
        let markers = self
            .visible_set()
            .into_iter()
            .map(|place| MarkerSnapshot {
                id: place.id.to_string(),
                name: place.name.clone(),
                latitude: place.latitude(),
                longitude: place.longitude(),
                permanent: !place.is_transient(),
            })
            .collect();

        let route = self.route().map(|request| RouteSnapshot {
            transport: match request.transport {
                TransportMode::Driving => "driving",
                TransportMode::Walking => "walking",
            },
            status: match request.status {
                RouteStatus::Requested => "requested",
                RouteStatus::Resolved(_) => "resolved",
                RouteStatus::Unavailable => "unavailable",
            },
            travel_time: request.travel_time().map(format_travel_time),
        });

        let preview = match self.preview() {
            PreviewStatus::Ready(_, scene) => Some(scene.0.to_string()),
            _ => None,
        };

        SessionSnapshot {
            mode: self.mode(),
            markers,
            selected: self.selection().map(|id| id.to_string()),
            route,
            preview,
            has_search_results: self.store().has_transient(),
        }
    }
}
