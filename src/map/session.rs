//! Map Session
//!
//! Lifecycle of the single map widget a `MapView` owns:
//! inactive until mounted, active with one session, released on teardown.
//! Dropping a session clears its markers, then drops the widget itself.

use super::markers::{MarkerSet, SyncReport};
use super::surface::{MapError, MapSurface};
use crate::models::Venue;

pub const MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";

/// Initial camera. Compared by value so an equal, freshly built value
/// never re-creates the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    /// [lng, lat]
    pub center: [f64; 2],
    pub zoom: f64,
}

impl Default for MapOptions {
    /// San Francisco
    fn default() -> Self {
        Self {
            center: [-122.4194, 37.7749],
            zoom: 13.0,
        }
    }
}

struct MapSession<S: MapSurface> {
    markers: MarkerSet<S::Marker>,
    surface: S,
    options: MapOptions,
}

impl<S: MapSurface> Drop for MapSession<S> {
    fn drop(&mut self) {
        self.markers.clear(&self.surface);
    }
}

/// Slot holding at most one live map
pub struct MapSlot<S: MapSurface> {
    session: Option<MapSession<S>>,
}

impl<S: MapSurface> Default for MapSlot<S> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<S: MapSurface> MapSlot<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.markers.len())
    }

    /// Make sure a map built with `options` is live
    ///
    /// Returns `Ok(false)` when the current map already uses equal options.
    /// Otherwise the old map (if any) is released, `mount` builds a new one
    /// and `venues` are placed on it.
    pub fn activate<F>(&mut self, options: MapOptions, venues: &[Venue], mount: F) -> Result<bool, MapError>
    where
        F: FnOnce(&MapOptions) -> Result<S, MapError>,
    {
        if self.session.as_ref().is_some_and(|session| session.options == options) {
            return Ok(false);
        }
        self.release();

        let mut session = MapSession {
            markers: MarkerSet::new(),
            surface: mount(&options)?,
            options,
        };
        session.markers.sync(&session.surface, venues);
        self.session = Some(session);
        Ok(true)
    }

    /// Rebuild markers on the live map; `None` while inactive
    pub fn sync(&mut self, venues: &[Venue]) -> Option<SyncReport> {
        let session = self.session.as_mut()?;
        Some(session.markers.sync(&session.surface, venues))
    }

    /// Tear down the live map, if any
    pub fn release(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::surface::fake::{FakeState, FakeSurface};
    use crate::models::fixtures::venue;
    use std::rc::Rc;

    fn mount_with(state: &Rc<FakeState>) -> impl FnOnce(&MapOptions) -> Result<FakeSurface, MapError> + '_ {
        move |_| Ok(FakeSurface::new(state.clone()))
    }

    #[test]
    fn test_inactive_slot_ignores_sync() {
        let mut slot = MapSlot::<FakeSurface>::new();
        assert!(!slot.is_active());
        assert_eq!(slot.sync(&[venue("a", "A")]), None);
        assert!(!slot.release());
    }

    #[test]
    fn test_activate_places_current_venues() {
        let state = Rc::new(FakeState::default());
        let mut slot = MapSlot::new();

        let created = slot.activate(MapOptions::default(), &[venue("a", "A"), venue("b", "B")], mount_with(&state));
        assert_eq!(created, Ok(true));
        assert!(slot.is_active());
        assert_eq!(slot.marker_count(), 2);
        assert_eq!(state.live.borrow().len(), 2);
    }

    #[test]
    fn test_equal_options_do_not_remount() {
        let state = Rc::new(FakeState::default());
        let mut slot = MapSlot::new();

        slot.activate(MapOptions::default(), &[], mount_with(&state)).unwrap();
        // A new value with the same contents
        let again = MapOptions { center: [-122.4194, 37.7749], zoom: 13.0 };
        assert_eq!(slot.activate(again, &[], mount_with(&state)), Ok(false));
        assert_eq!(state.mounts.get(), 1);
        assert_eq!(state.removed.get(), 0);
    }

    #[test]
    fn test_changed_options_replace_map() {
        let state = Rc::new(FakeState::default());
        let mut slot = MapSlot::new();
        let venues = [venue("a", "A")];

        slot.activate(MapOptions::default(), &venues, mount_with(&state)).unwrap();
        let moved = MapOptions { zoom: 15.0, ..MapOptions::default() };
        assert_eq!(slot.activate(moved, &venues, mount_with(&state)), Ok(true));

        assert_eq!(state.mounts.get(), 2);
        assert_eq!(state.removed.get(), 1);
        assert_eq!(state.live.borrow().len(), 1);
    }

    #[test]
    fn test_release_clears_markers_and_map() {
        let state = Rc::new(FakeState::default());
        let mut slot = MapSlot::new();
        slot.activate(MapOptions::default(), &[venue("a", "A")], mount_with(&state)).unwrap();

        assert!(slot.release());
        assert!(!slot.is_active());
        assert!(state.live.borrow().is_empty());
        assert_eq!(state.removed.get(), 1);

        // Remount after release starts fresh
        slot.activate(MapOptions::default(), &[], mount_with(&state)).unwrap();
        assert_eq!(state.mounts.get(), 2);
        assert_eq!(slot.marker_count(), 0);
    }

    #[test]
    fn test_failed_mount_leaves_slot_inactive() {
        let mut slot = MapSlot::<FakeSurface>::new();
        let result = slot.activate(MapOptions::default(), &[], |_| {
            Err(MapError::Widget(mapbox_gl_bindings::JsError("WebGL unsupported".into())))
        });
        assert!(result.is_err());
        assert!(!slot.is_active());
    }

    #[test]
    fn test_sync_replaces_markers() {
        let state = Rc::new(FakeState::default());
        let mut slot = MapSlot::new();
        slot.activate(MapOptions::default(), &[venue("a", "A"), venue("b", "B")], mount_with(&state)).unwrap();

        let report = slot.sync(&[]).unwrap();
        assert_eq!(report.placed, 0);
        assert_eq!(slot.marker_count(), 0);
        assert!(state.live.borrow().is_empty());
    }
}
