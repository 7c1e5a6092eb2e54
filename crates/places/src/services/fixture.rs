//! Canned-data search service for tests, doctests, and previews.

use std::future::Future;
use std::pin::Pin;

use geo::Point;

use crate::models::region::Region;
use crate::models::types::Result;
use crate::services::traits::{PlaceCandidate, PlaceSearchService};

/// In-memory search over a fixed candidate list.
///
/// Matches case-insensitively on name substrings and honors the viewport
/// bound, so tests exercise the same region filtering a live geocoder
/// applies.
#[derive(Clone, Default)]
pub struct FixtureSearchService {
    candidates: Vec<PlaceCandidate>,
}

impl FixtureSearchService {
    pub fn new(candidates: Vec<PlaceCandidate>) -> Self {
        Self { candidates }
    }
}

impl PlaceSearchService for FixtureSearchService {
    fn search<'a>(
        &'a self,
        query: &'a str,
        region: Region,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PlaceCandidate>>> + Send + 'a>> {
        Box::pin(async move {
            let needle = query.to_lowercase();
            Ok(self
                .candidates
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .filter(|c| region.contains(Point::new(c.longitude, c.latitude)))
                .cloned()
                .collect())
        })
    }
}
