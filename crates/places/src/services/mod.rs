//! External collaborator interfaces.

pub mod fixture;
pub mod traits;

pub use fixture::FixtureSearchService;
pub use traits::{
    Authorization, PlaceCandidate, PlaceSearchService, RouteLeg, RoutingService, SceneHandle,
    ScenePreviewService, UserLocationProvider,
};
