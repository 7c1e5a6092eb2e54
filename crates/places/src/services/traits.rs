//! Pluggable collaborator traits.
//!
//! Geocoding, routing, and imagery previews are external services; the core
//! calls them and holds their opaque results. External crates implement
//! these to bind a real map SDK.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use geo::{LineString, Point};

use crate::models::region::Region;
use crate::models::types::{Result, TransportMode};

/// A ranked place candidate returned by a search
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceCandidate {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved route: travel duration plus path geometry
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLeg {
    pub duration: Duration,
    pub path: LineString,
}

/// Opaque handle to street-level preview imagery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneHandle(pub Arc<str>);

/// Location permission state, as reported by the platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorization {
    NotDetermined,
    Authorized,
    Denied,
}

/// Search for places matching a free-text query, bounded by a viewport
pub trait PlaceSearchService: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a str,
        region: Region,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PlaceCandidate>>> + Send + 'a>>;
}

/// Resolve a route between two coordinates for a transport mode
pub trait RoutingService: Send + Sync {
    fn route<'a>(
        &'a self,
        from: Point,
        to: Point,
        mode: TransportMode,
    ) -> Pin<Box<dyn Future<Output = Result<RouteLeg>> + Send + 'a>>;
}

/// Fetch street-level preview imagery for a coordinate
pub trait ScenePreviewService: Send + Sync {
    fn preview<'a>(
        &'a self,
        at: Point,
    ) -> Pin<Box<dyn Future<Output = Result<SceneHandle>> + Send + 'a>>;
}

/// The device's current location and permission state, read-only to the core
pub trait UserLocationProvider: Send + Sync {
    fn location(&self) -> Option<Point>;
    fn authorization(&self) -> Authorization;
}
