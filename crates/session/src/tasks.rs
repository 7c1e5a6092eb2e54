//! Async drivers for the external collaborators.
//!
//! The controller lives behind a `tokio::sync::Mutex` so every transition is
//! serialized; the drivers here take the lock only to read targets and to
//! apply results, never across a service call. Staleness is handled by the
//! controller's completion methods, which compare the in-flight target
//! against the current selection.

use std::sync::Arc;

use tokio::sync::Mutex;

use trip_places::prelude::*;

use crate::controller::SelectionController;

pub type SharedSession = Arc<Mutex<SelectionController>>;

/// Run a viewport-bounded place search and insert the results.
///
/// Callers pre-filter empty queries, mirroring the search field clearing
/// itself without issuing a request.
pub async fn run_search(
    session: &SharedSession,
    service: &dyn PlaceSearchService,
    query: &str,
    region: Region,
) -> Result<Vec<PlaceId>> {
    let outcome = service.search(query, region).await;
    let mut session = session.lock().await;
    match outcome {
        Ok(candidates) => Ok(session.ingest_candidates(candidates)),
        Err(err) => {
            tracing::warn!(%err, query, "place search failed");
            Err(err)
        }
    }
}

/// Fetch preview imagery for the current selection.
///
/// A selection change while the fetch is in flight causes the result to be
/// discarded on completion. No-op when nothing is selected.
pub async fn resolve_preview(session: &SharedSession, service: &dyn ScenePreviewService) {
    let target = {
        let session = session.lock().await;
        session.selection().cloned().and_then(|id| {
            session
                .store()
                .get(&id)
                .map(|record| (id, record.location))
        })
    };
    let Some((place, location)) = target else {
        return;
    };

    let outcome = service.preview(location).await;
    session.lock().await.complete_preview(&place, outcome);
}

/// Request and resolve a route from the user's location to the selection.
///
/// The request itself can be rejected (no selection, or the selection is a
/// permanent member); resolution failures, including an unknown user
/// location, settle the request as `Unavailable`.
pub async fn resolve_route(
    session: &SharedSession,
    routing: &dyn RoutingService,
    location: &dyn UserLocationProvider,
    transport: TransportMode,
) -> Result<()> {
    let (place, to) = {
        let mut session = session.lock().await;
        session.request_route(transport)?;
        let place = session.selection().cloned().ok_or(PlaceError::NoSelection)?;
        let to = session
            .store()
            .get(&place)
            .map(|record| record.location)
            .ok_or_else(|| PlaceError::PlaceNotFound(place.clone()))?;
        (place, to)
    };

    let Some(from) = location.location() else {
        session
            .lock()
            .await
            .complete_route(&place, Err(PlaceError::Unavailable("user location unknown".into())));
        return Ok(());
    };

    let outcome = routing.route(from, to, transport).await;
    session.lock().await.complete_route(&place, outcome);
    Ok(())
}
