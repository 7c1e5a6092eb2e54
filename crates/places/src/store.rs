//! In-memory placemark store.
//!
//! Single source of truth for placemark records and destination membership.
//! The store knows nothing about selection or interaction modes; it exposes
//! logical mutations plus the *visible set* a renderer should display.
//!
//! The membership invariant is enforced bidirectionally: a placemark carries
//! an owner back-reference if and only if its id appears in that
//! destination's member list.

use std::collections::HashMap;

use crate::identifiers::{DestinationId, PlaceId};
use crate::models::region::Region;
use crate::models::types::{Destination, PlaceError, Placemark, Result};

/// Owns all placemark and destination records for a session.
///
/// Persistence is delegated to an external repository; this store holds the
/// working copy for the controller's lifetime. Cardinality is tens of
/// records, so the visible set is recomputed on every read rather than
/// cached.
#[derive(Default)]
pub struct PlaceStore {
    places: HashMap<PlaceId, Placemark>,
    // Insertion order of placemark ids, for deterministic rendering
    order: Vec<PlaceId>,
    destinations: HashMap<DestinationId, Destination>,
    next_id: u64,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Destinations ----

    pub fn insert_destination(&mut self, destination: Destination) {
        self.destinations.insert(destination.id.clone(), destination);
    }

    pub fn get_destination(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations.get(id)
    }

    pub fn rename_destination(&mut self, id: &DestinationId, name: impl Into<String>) -> Result<()> {
        let dest = self
            .destinations
            .get_mut(id)
            .ok_or_else(|| PlaceError::DestinationNotFound(id.clone()))?;
        dest.name = name.into();
        Ok(())
    }

    /// Stamp the destination's region from the current viewport.
    pub fn set_region(&mut self, id: &DestinationId, region: Region) -> Result<()> {
        let dest = self
            .destinations
            .get_mut(id)
            .ok_or_else(|| PlaceError::DestinationNotFound(id.clone()))?;
        dest.region = Some(region);
        Ok(())
    }

    /// Remove a destination and every placemark it owns.
    ///
    /// Returns the number of member placemarks destroyed.
    pub fn remove_destination(&mut self, id: &DestinationId) -> Result<usize> {
        let dest = self
            .destinations
            .remove(id)
            .ok_or_else(|| PlaceError::DestinationNotFound(id.clone()))?;

        for member in &dest.members {
            self.places.remove(member);
        }
        self.order.retain(|pid| self.places.contains_key(pid));
        Ok(dest.members.len())
    }

    // ---- Placemarks ----

    /// Insert a new transient placemark and return its id.
    ///
    /// Always succeeds. Coordinates are stored as given; out-of-range values
    /// are accepted as-is and left to the caller.
    pub fn create_transient(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> PlaceId {
        self.next_id += 1;
        let id = PlaceId::minted(self.next_id);
        let placemark = Placemark::new(id.clone(), name, address, latitude, longitude);
        self.places.insert(id.clone(), placemark);
        self.order.push(id.clone());
        id
    }

    pub fn get(&self, id: &PlaceId) -> Option<&Placemark> {
        self.places.get(id)
    }

    /// Overwrite a placemark's name and address, trimming whitespace.
    pub fn update_place(
        &mut self,
        id: &PlaceId,
        name: impl AsRef<str>,
        address: impl AsRef<str>,
    ) -> Result<()> {
        let place = self
            .places
            .get_mut(id)
            .ok_or_else(|| PlaceError::PlaceNotFound(id.clone()))?;
        place.name = name.as_ref().trim().to_string();
        place.address = address.as_ref().trim().to_string();
        Ok(())
    }

    // ---- Membership ----

    pub fn is_member(&self, place: &PlaceId, destination: &DestinationId) -> bool {
        self.destinations
            .get(destination)
            .map(|dest| dest.members.contains(place))
            .unwrap_or(false)
    }

    /// Make a transient placemark a permanent member of a destination.
    ///
    /// Not idempotent: a placemark that already has an owner is rejected
    /// with `AlreadyMember`. Callers check membership first via
    /// [`is_member`](Self::is_member).
    pub fn promote(&mut self, place: &PlaceId, destination: &DestinationId) -> Result<()> {
        let dest = self
            .destinations
            .get_mut(destination)
            .ok_or_else(|| PlaceError::DestinationNotFound(destination.clone()))?;
        let record = self
            .places
            .get_mut(place)
            .ok_or_else(|| PlaceError::PlaceNotFound(place.clone()))?;
        if record.destination.is_some() {
            return Err(PlaceError::AlreadyMember(place.clone()));
        }

        record.destination = Some(destination.clone());
        dest.members.push(place.clone());
        Ok(())
    }

    /// Return a permanent member to transient status.
    pub fn demote(&mut self, place: &PlaceId) -> Result<()> {
        let record = self
            .places
            .get_mut(place)
            .ok_or_else(|| PlaceError::PlaceNotFound(place.clone()))?;
        let owner = record
            .destination
            .take()
            .ok_or_else(|| PlaceError::NotMember(place.clone()))?;

        if let Some(dest) = self.destinations.get_mut(&owner) {
            dest.members.retain(|pid| pid != place);
        }
        Ok(())
    }

    // ---- Cleanup ----

    /// Remove every transient placemark. Permanent members are untouched.
    ///
    /// This is the sole cleanup primitive: unconditional and non-selective.
    /// Returns the number of records removed.
    pub fn purge_transient(&mut self) -> usize {
        let before = self.places.len();
        self.places.retain(|_, place| place.destination.is_some());
        self.order.retain(|pid| self.places.contains_key(pid));
        before - self.places.len()
    }

    pub fn has_transient(&self) -> bool {
        self.places.values().any(|place| place.is_transient())
    }

    // ---- Queries ----

    /// The placemarks a renderer should currently display: all transient
    /// placemarks (insertion order) followed by the destination's members
    /// (itinerary order). An unknown destination contributes no members.
    pub fn visible_set(&self, destination: &DestinationId) -> Vec<Placemark> {
        let mut visible: Vec<Placemark> = self
            .order
            .iter()
            .filter_map(|pid| self.places.get(pid))
            .filter(|place| place.is_transient())
            .cloned()
            .collect();

        if let Some(dest) = self.destinations.get(destination) {
            visible.extend(
                dest.members
                    .iter()
                    .filter_map(|pid| self.places.get(pid))
                    .cloned(),
            );
        }
        visible
    }

    pub fn is_visible(&self, place: &PlaceId, destination: &DestinationId) -> bool {
        match self.places.get(place) {
            Some(record) => record.is_transient() || self.is_member(place, destination),
            None => false,
        }
    }
}
