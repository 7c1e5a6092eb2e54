//! # trip-places
//!
//! Placemark and destination records for a trip-planning map.
//!
//! ## Features
//!
//! - **Transient vs. permanent**: search results and manual taps live as
//!   unowned placemarks until explicitly promoted into a destination
//! - **Bidirectional membership**: owner back-references and member lists
//!   never disagree
//! - **Single cleanup primitive**: `purge_transient` removes every unowned
//!   record, wherever it came from
//! - **Pluggable collaborators**: search, routing, and preview imagery are
//!   traits implemented by a real map SDK binding
//!
//! ## Example
//!
//! ```
//! use trip_places::prelude::*;
//!
//! let mut store = PlaceStore::new();
//! let paris = DestinationId::new("paris");
//! store.insert_destination(Destination::new(paris.clone(), "Paris"));
//!
//! // A search result arrives as a transient placemark
//! let louvre = store.create_transient("Louvre", "Rue de Rivoli", 48.8606, 2.3376);
//! assert!(store.get(&louvre).unwrap().is_transient());
//!
//! // Promote it into the itinerary; purge leaves it alone afterwards
//! store.promote(&louvre, &paris).unwrap();
//! store.purge_transient();
//! assert_eq!(store.visible_set(&paris).len(), 1);
//! ```

pub mod identifiers;
pub mod models;
pub mod services;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{region::*, types::*};
    pub use crate::services::{
        Authorization, FixtureSearchService, PlaceCandidate, PlaceSearchService, RouteLeg,
        RoutingService, SceneHandle, ScenePreviewService, UserLocationProvider,
    };
    pub use crate::store::PlaceStore;
}

pub use prelude::*;
