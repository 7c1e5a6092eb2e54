//! Selection and route lifecycle for the destination map editor.
//!
//! Sits between input events (search submit, map tap, mode toggle, dismiss)
//! and the placemark store, and publishes an immutable snapshot for
//! rendering. External lookups (search, routing, preview imagery) run
//! through the drivers in [`tasks`]; late results for a superseded selection
//! are discarded.

pub mod controller;
pub mod route;
pub mod snapshot;
pub mod style;
pub mod tasks;

// Re-export the domain crate
pub use trip_places as places;

pub use controller::{EditDraft, MarkerMode, Membership, PreviewStatus, SelectionController};
pub use route::{format_travel_time, RouteRequest, RouteStatus};
pub use snapshot::{MarkerSnapshot, RouteSnapshot, SessionSnapshot};
pub use style::{BaseMapStyle, Elevation, MapStyleConfig, PoiFilter};
pub use tasks::{resolve_preview, resolve_route, run_search, SharedSession};
