//! Placemark and destination data models.

pub mod region;
pub mod types;

// Re-exports for convenience
pub use region::{Region, Span};
pub use types::{Destination, PlaceError, Placemark, Result, TransportMode};
