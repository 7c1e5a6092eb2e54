//! Selection and mode state machine.
//!
//! The controller mediates between discrete input events (search submit, map
//! tap, mode toggle, dismiss) and the [`PlaceStore`]. It owns the current
//! selection, the pending edit draft for the detail sheet, and the route and
//! preview lifecycles. Rendering consumes an immutable
//! [`SessionSnapshot`](crate::snapshot::SessionSnapshot); internal records
//! are never handed out for external mutation.
//!
//! Search mode and manual-marker mode populate mutually exclusive transient
//! sets, so every mode switch purges the store's transient records.

use trip_places::prelude::*;

use crate::route::{RouteRequest, RouteStatus};

/// Active interaction mode. Initial mode is `Search`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerMode {
    /// Placemarks come from text search over the viewport
    Search,
    /// Placemarks come from taps on the map
    ManualMarker,
}

/// Unsaved name/address edits for the selected placemark
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub name: String,
    pub address: String,
}

/// Preview imagery lifecycle for the current selection.
///
/// Carries the target placemark so late results for a superseded selection
/// can be recognized and discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewStatus {
    Idle,
    Requested(PlaceId),
    Ready(PlaceId, SceneHandle),
    Unavailable(PlaceId),
}

/// Outcome of [`SelectionController::add_or_remove`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    Added,
    Removed,
}

pub struct SelectionController {
    store: PlaceStore,
    destination: DestinationId,
    mode: MarkerMode,
    selection: Option<PlaceId>,
    draft: Option<EditDraft>,
    route: Option<RouteRequest>,
    preview: PreviewStatus,
}

impl SelectionController {
    pub fn new(store: PlaceStore, destination: DestinationId) -> Self {
        Self {
            store,
            destination,
            mode: MarkerMode::Search,
            selection: None,
            draft: None,
            route: None,
            preview: PreviewStatus::Idle,
        }
    }

    // ---- Read access ----

    pub fn mode(&self) -> MarkerMode {
        self.mode
    }

    pub fn selection(&self) -> Option<&PlaceId> {
        self.selection.as_ref()
    }

    pub fn route(&self) -> Option<&RouteRequest> {
        self.route.as_ref()
    }

    pub fn preview(&self) -> &PreviewStatus {
        &self.preview
    }

    pub fn destination(&self) -> &DestinationId {
        &self.destination
    }

    pub fn store(&self) -> &PlaceStore {
        &self.store
    }

    pub fn visible_set(&self) -> Vec<Placemark> {
        self.store.visible_set(&self.destination)
    }

    // ---- Mode ----

    /// Flip between search and manual-marker mode.
    ///
    /// Always purges transient placemarks and drops the selection; stale
    /// markers from the previous mode must not leak into the next.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            MarkerMode::Search => MarkerMode::ManualMarker,
            MarkerMode::ManualMarker => MarkerMode::Search,
        };
        let purged = self.store.purge_transient();
        self.reset_selection();
        tracing::debug!(mode = ?self.mode, purged, "mode toggled");
    }

    // ---- Search ----

    /// Insert already-fetched search candidates as transient placemarks,
    /// returning the created ids in candidate order.
    ///
    /// This is the synchronous half of search submission; the service call
    /// itself lives in [`run_search`](crate::tasks::run_search) so the
    /// session lock is never held across it.
    pub fn ingest_candidates(&mut self, candidates: Vec<PlaceCandidate>) -> Vec<PlaceId> {
        let ids: Vec<PlaceId> = candidates
            .into_iter()
            .map(|c| {
                self.store
                    .create_transient(c.name, c.address, c.latitude, c.longitude)
            })
            .collect();
        tracing::debug!(count = ids.len(), "search results inserted");
        ids
    }

    /// Drop all search results without a mode change.
    ///
    /// If the selection pointed at a now-purged transient record, it is
    /// cleared as well.
    pub fn clear_search_results(&mut self) {
        let purged = self.store.purge_transient();
        if let Some(selected) = &self.selection {
            if self.store.get(selected).is_none() {
                self.reset_selection();
            }
        }
        tracing::debug!(purged, "search results cleared");
    }

    // ---- Tap placement ----

    /// Place a marker at a tapped coordinate and select it.
    ///
    /// Only meaningful in manual-marker mode; in search mode the tap is
    /// passive map interaction and is ignored.
    pub fn handle_tap(&mut self, latitude: f64, longitude: f64) -> Option<PlaceId> {
        if self.mode != MarkerMode::Search {
            let id = self.store.create_transient("", "", latitude, longitude);
            self.set_selection(id.clone());
            tracing::debug!(%id, latitude, longitude, "manual marker placed");
            return Some(id);
        }
        None
    }

    // ---- Selection ----

    /// Select a visible placemark for inspection.
    ///
    /// Signals `NotVisible` (leaving all state unchanged) if the placemark
    /// is neither transient nor a member of the destination being edited.
    pub fn select(&mut self, place: &PlaceId) -> Result<()> {
        if !self.store.is_visible(place, &self.destination) {
            return Err(PlaceError::NotVisible(place.clone()));
        }
        // Re-selecting the current placemark keeps its route, preview, and
        // draft; only an id change supersedes them.
        if self.selection.as_ref() != Some(place) {
            self.set_selection(place.clone());
        }
        Ok(())
    }

    /// Close the detail sheet.
    ///
    /// In manual-marker mode a dismissed, never-promoted marker is
    /// discarded along with any other transients.
    pub fn dismiss_selection(&mut self) {
        self.reset_selection();
        if self.mode == MarkerMode::ManualMarker {
            let purged = self.store.purge_transient();
            tracing::debug!(purged, "manual markers discarded on dismiss");
        }
    }

    fn set_selection(&mut self, place: PlaceId) {
        // A new selection supersedes any in-flight route or preview; their
        // late results will fail the target check and be discarded.
        self.route = None;
        self.draft = self.store.get(&place).map(|record| EditDraft {
            name: record.name.clone(),
            address: record.address.clone(),
        });
        self.preview = PreviewStatus::Requested(place.clone());
        self.selection = Some(place);
    }

    fn reset_selection(&mut self) {
        self.selection = None;
        self.draft = None;
        self.route = None;
        self.preview = PreviewStatus::Idle;
    }

    // ---- Edit draft ----

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = &mut self.draft {
            draft.name = name.into();
        }
    }

    pub fn set_draft_address(&mut self, address: impl Into<String>) {
        if let Some(draft) = &mut self.draft {
            draft.address = address.into();
        }
    }

    /// Whether the draft differs from the saved record
    pub fn is_changed(&self) -> bool {
        let (Some(selected), Some(draft)) = (&self.selection, &self.draft) else {
            return false;
        };
        match self.store.get(selected) {
            Some(record) => draft.name != record.name || draft.address != record.address,
            None => false,
        }
    }

    /// Write the draft through to the store, trimming whitespace.
    pub fn apply_edits(&mut self) -> Result<()> {
        let selected = self.selection.clone().ok_or(PlaceError::NoSelection)?;
        let draft = self.draft.clone().ok_or(PlaceError::NoSelection)?;
        self.store.update_place(&selected, &draft.name, &draft.address)?;
        // Re-sync the draft with what was saved
        if let Some(record) = self.store.get(&selected) {
            self.draft = Some(EditDraft {
                name: record.name.clone(),
                address: record.address.clone(),
            });
        }
        Ok(())
    }

    // ---- Membership ----

    /// Add the selected placemark to the destination, or remove it if it is
    /// already a member.
    ///
    /// Gated the way the detail sheet gates its button: the name must be
    /// non-empty and there must be no unsaved edits. Violations come back as
    /// `EmptyName` / `PendingEdit` signals rather than silently applying.
    pub fn add_or_remove(&mut self) -> Result<Membership> {
        let selected = self.selection.clone().ok_or(PlaceError::NoSelection)?;
        if self.draft.as_ref().is_some_and(|d| d.name.trim().is_empty()) {
            return Err(PlaceError::EmptyName);
        }
        if self.is_changed() {
            return Err(PlaceError::PendingEdit(selected));
        }

        if self.store.is_member(&selected, &self.destination) {
            self.store.demote(&selected)?;
            tracing::debug!(place = %selected, "removed from destination");
            Ok(Membership::Removed)
        } else {
            self.store.promote(&selected, &self.destination)?;
            tracing::debug!(place = %selected, "added to destination");
            Ok(Membership::Added)
        }
    }

    // ---- Route lifecycle ----

    /// Request a route from the user's location to the selected placemark.
    ///
    /// Route controls are only offered for placemarks outside the
    /// destination's itinerary; a permanent member is rejected with
    /// `AlreadyMember` and no request is created.
    pub fn request_route(&mut self, transport: TransportMode) -> Result<()> {
        let selected = self.selection.clone().ok_or(PlaceError::NoSelection)?;
        let record = self
            .store
            .get(&selected)
            .ok_or_else(|| PlaceError::PlaceNotFound(selected.clone()))?;
        if !record.is_transient() {
            return Err(PlaceError::AlreadyMember(selected));
        }
        self.route = Some(RouteRequest::new(selected, transport));
        Ok(())
    }

    /// Apply a routing result, discarding it if the selection has moved on.
    pub fn complete_route(&mut self, place: &PlaceId, outcome: Result<RouteLeg>) {
        let current_target = self.route.as_ref().map(|r| r.place.clone());
        if self.selection.as_ref() != Some(place) || current_target.as_ref() != Some(place) {
            tracing::warn!(%place, "discarding stale route result");
            return;
        }
        if let Some(route) = &mut self.route {
            route.status = match outcome {
                Ok(leg) => RouteStatus::Resolved(leg),
                Err(err) => {
                    tracing::warn!(%err, %place, "route lookup failed");
                    RouteStatus::Unavailable
                }
            };
        }
    }

    // ---- Preview lifecycle ----

    /// Apply a preview result, discarding it if the selection has moved on.
    pub fn complete_preview(&mut self, place: &PlaceId, outcome: Result<SceneHandle>) {
        if self.selection.as_ref() != Some(place) {
            tracing::warn!(%place, "discarding stale preview result");
            return;
        }
        self.preview = match outcome {
            Ok(scene) => PreviewStatus::Ready(place.clone(), scene),
            Err(err) => {
                tracing::warn!(%err, %place, "preview lookup failed");
                PreviewStatus::Unavailable(place.clone())
            }
        };
    }

    /// End the editing session (view exit). Transient placemarks never
    /// outlive their search/manual context.
    pub fn end_session(&mut self) {
        let purged = self.store.purge_transient();
        self.reset_selection();
        tracing::debug!(purged, "session ended");
    }

    // ---- Destination edits (name field / "Set region" button) ----

    pub fn rename_destination(&mut self, name: impl Into<String>) -> Result<()> {
        self.store.rename_destination(&self.destination, name)
    }

    pub fn set_region(&mut self, region: Region) -> Result<()> {
        self.store.set_region(&self.destination, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris_controller() -> SelectionController {
        let mut store = PlaceStore::new();
        let dest = DestinationId::new("paris");
        store.insert_destination(Destination::new(dest.clone(), "Paris"));
        SelectionController::new(store, dest)
    }

    fn select_new_transient(controller: &mut SelectionController, name: &str) -> PlaceId {
        let ids = controller.ingest_candidates(vec![PlaceCandidate {
            name: name.into(),
            address: "somewhere".into(),
            latitude: 48.85,
            longitude: 2.35,
        }]);
        let id = ids[0].clone();
        controller.select(&id).unwrap();
        id
    }

    #[test]
    fn test_initial_state() {
        let controller = paris_controller();
        assert_eq!(controller.mode(), MarkerMode::Search);
        assert!(controller.selection().is_none());
        assert!(controller.visible_set().is_empty());
    }

    #[test]
    fn test_toggle_mode_purges_and_deselects() {
        let mut controller = paris_controller();
        select_new_transient(&mut controller, "Cafe");

        controller.toggle_mode();
        assert_eq!(controller.mode(), MarkerMode::ManualMarker);
        assert!(controller.selection().is_none());
        assert!(controller.visible_set().is_empty());

        controller.toggle_mode();
        assert_eq!(controller.mode(), MarkerMode::Search);
    }

    #[test]
    fn test_ingest_then_toggle() {
        let mut controller = paris_controller();
        let ids = controller.ingest_candidates(
            ["Cafe de Flore", "Cafe Kitsune", "Cafe Marly"]
                .iter()
                .enumerate()
                .map(|(i, name)| PlaceCandidate {
                    name: (*name).into(),
                    address: "".into(),
                    latitude: 48.85 + i as f64 * 0.001,
                    longitude: 2.33,
                })
                .collect(),
        );
        assert_eq!(ids.len(), 3);

        let visible = controller.visible_set();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|p| p.is_transient()));

        controller.toggle_mode();
        assert!(controller.visible_set().is_empty());
    }

    #[test]
    fn test_tap_ignored_in_search_mode() {
        let mut controller = paris_controller();
        assert!(controller.handle_tap(48.85, 2.35).is_none());
        assert!(controller.visible_set().is_empty());
    }

    #[test]
    fn test_tap_places_and_selects_in_manual_mode() {
        let mut controller = paris_controller();
        controller.toggle_mode();

        let id = controller.handle_tap(48.85, 2.35).unwrap();
        assert_eq!(controller.selection(), Some(&id));
        assert_eq!(controller.visible_set().len(), 1);
        assert!(controller.store().get(&id).unwrap().name.is_empty());

        // Dismissing a never-promoted manual marker discards it
        controller.dismiss_selection();
        assert!(controller.selection().is_none());
        assert!(controller.visible_set().is_empty());
    }

    #[test]
    fn test_select_unknown_signals_not_visible() {
        let mut controller = paris_controller();
        let id = select_new_transient(&mut controller, "Cafe");

        let ghost = PlaceId::new("pm_999");
        assert!(matches!(
            controller.select(&ghost),
            Err(PlaceError::NotVisible(_))
        ));
        // Prior selection is untouched
        assert_eq!(controller.selection(), Some(&id));
    }

    #[test]
    fn test_member_of_other_destination_not_visible() {
        let mut store = PlaceStore::new();
        let paris = DestinationId::new("paris");
        let rome = DestinationId::new("rome");
        store.insert_destination(Destination::new(paris.clone(), "Paris"));
        store.insert_destination(Destination::new(rome.clone(), "Rome"));
        let id = store.create_transient("Colosseum", "", 41.8902, 12.4922);
        store.promote(&id, &rome).unwrap();

        let mut controller = SelectionController::new(store, paris);
        assert!(matches!(
            controller.select(&id),
            Err(PlaceError::NotVisible(_))
        ));
    }

    #[test]
    fn test_add_or_remove_round_trip() {
        let mut controller = paris_controller();
        let id = select_new_transient(&mut controller, "Louvre");

        assert_eq!(controller.add_or_remove().unwrap(), Membership::Added);
        assert!(!controller.store().get(&id).unwrap().is_transient());

        assert_eq!(controller.add_or_remove().unwrap(), Membership::Removed);
        assert!(controller.store().get(&id).unwrap().is_transient());
    }

    #[test]
    fn test_add_gated_on_empty_name() {
        let mut controller = paris_controller();
        controller.toggle_mode();
        controller.handle_tap(48.85, 2.35);

        // Manual markers start with an empty name
        assert!(matches!(
            controller.add_or_remove(),
            Err(PlaceError::EmptyName)
        ));

        controller.set_draft_name("Secret spot");
        assert!(matches!(
            controller.add_or_remove(),
            Err(PlaceError::PendingEdit(_))
        ));

        controller.apply_edits().unwrap();
        assert_eq!(controller.add_or_remove().unwrap(), Membership::Added);
    }

    #[test]
    fn test_apply_edits_trims_and_settles_draft() {
        let mut controller = paris_controller();
        let id = select_new_transient(&mut controller, "Louvre");

        controller.set_draft_name("  Musee du Louvre ");
        assert!(controller.is_changed());
        controller.apply_edits().unwrap();

        assert_eq!(controller.store().get(&id).unwrap().name, "Musee du Louvre");
        assert!(!controller.is_changed());
    }

    #[test]
    fn test_clear_search_results_drops_dangling_selection() {
        let mut controller = paris_controller();
        let kept = select_new_transient(&mut controller, "Louvre");
        controller.add_or_remove().unwrap();

        let transient = select_new_transient(&mut controller, "Cafe");
        controller.clear_search_results();

        // Selection pointed at a purged transient
        assert!(controller.selection().is_none());
        assert!(controller.store().get(&transient).is_none());

        // A selected permanent member survives a clear
        controller.select(&kept).unwrap();
        controller.clear_search_results();
        assert_eq!(controller.selection(), Some(&kept));
    }

    #[test]
    fn test_route_rejected_for_permanent_member() {
        let mut controller = paris_controller();
        select_new_transient(&mut controller, "Louvre");
        controller.add_or_remove().unwrap();

        assert!(matches!(
            controller.request_route(TransportMode::Driving),
            Err(PlaceError::AlreadyMember(_))
        ));
        assert!(controller.route().is_none());
    }

    #[test]
    fn test_route_lifecycle_with_stale_discard() {
        use std::time::Duration;

        let mut controller = paris_controller();
        let first = select_new_transient(&mut controller, "Cafe A");
        controller.request_route(TransportMode::Walking).unwrap();
        assert_eq!(
            controller.route().map(|r| &r.status),
            Some(&RouteStatus::Requested)
        );

        // Selecting a different placemark invalidates the in-flight request
        select_new_transient(&mut controller, "Cafe B");
        controller.complete_route(
            &first,
            Ok(RouteLeg {
                duration: Duration::from_secs(600),
                path: geo::LineString::new(vec![]),
            }),
        );
        assert!(controller.route().is_none());
    }

    #[test]
    fn test_route_resolution_applies_to_live_request() {
        use std::time::Duration;

        let mut controller = paris_controller();
        let id = select_new_transient(&mut controller, "Cafe");
        controller.request_route(TransportMode::Driving).unwrap();

        controller.complete_route(
            &id,
            Ok(RouteLeg {
                duration: Duration::from_secs(900),
                path: geo::LineString::new(vec![]),
            }),
        );
        assert_eq!(
            controller.route().and_then(|r| r.travel_time()),
            Some(Duration::from_secs(900))
        );

        // Failure resolves to Unavailable, not an error
        controller.request_route(TransportMode::Driving).unwrap();
        controller.complete_route(&id, Err(PlaceError::Unavailable("offline".into())));
        assert_eq!(
            controller.route().map(|r| &r.status),
            Some(&RouteStatus::Unavailable)
        );
    }

    #[test]
    fn test_preview_follows_selection() {
        let mut controller = paris_controller();
        let first = select_new_transient(&mut controller, "Cafe A");
        assert_eq!(
            controller.preview(),
            &PreviewStatus::Requested(first.clone())
        );

        let second = select_new_transient(&mut controller, "Cafe B");
        // Late result for the superseded selection is discarded
        controller.complete_preview(&first, Ok(SceneHandle("scene_a".into())));
        assert_eq!(
            controller.preview(),
            &PreviewStatus::Requested(second.clone())
        );

        controller.complete_preview(&second, Err(PlaceError::Unavailable("no scene".into())));
        assert_eq!(controller.preview(), &PreviewStatus::Unavailable(second));
    }

    #[test]
    fn test_reselecting_same_placemark_keeps_state() {
        let mut controller = paris_controller();
        let id = select_new_transient(&mut controller, "Cafe");
        controller.complete_preview(&id, Ok(SceneHandle("scene_1".into())));
        controller.request_route(TransportMode::Walking).unwrap();

        controller.select(&id).unwrap();
        assert!(matches!(controller.preview(), PreviewStatus::Ready(_, _)));
        assert!(controller.route().is_some());
        assert_eq!(controller.selection(), Some(&id));
    }

    #[test]
    fn test_end_session_leaves_only_members() {
        let mut controller = paris_controller();
        select_new_transient(&mut controller, "Louvre");
        controller.add_or_remove().unwrap();
        select_new_transient(&mut controller, "Cafe");

        controller.end_session();
        assert!(controller.selection().is_none());
        let visible = controller.visible_set();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Louvre");
    }

    #[test]
    fn test_destination_edits() {
        let mut controller = paris_controller();
        controller.rename_destination("Paris in spring").unwrap();
        controller
            .set_region(Region::new(48.8566, 2.3522, Span::new(0.1, 0.15)))
            .unwrap();

        let dest = controller.store().get_destination(controller.destination()).unwrap();
        assert_eq!(dest.name, "Paris in spring");
        assert!(dest.region.is_some());
    }
}
