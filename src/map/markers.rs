//! Marker Set
//!
//! Markers currently on the map. Every sync tears all of them down and
//! rebuilds one per venue, in list order.

use super::popup::popup_html;
use super::surface::{MapError, MapSurface, Pin};
use crate::models::Venue;

/// Outcome of one sync
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub placed: usize,
    pub skipped: usize,
}

pub struct MarkerSet<M> {
    markers: Vec<M>,
}

impl<M> Default for MarkerSet<M> {
    fn default() -> Self {
        Self { markers: Vec::new() }
    }
}

impl<M> MarkerSet<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Remove every tracked marker from `surface`
    pub fn clear<S>(&mut self, surface: &S)
    where
        S: MapSurface<Marker = M>,
    {
        for marker in self.markers.drain(..) {
            surface.remove_marker(marker);
        }
    }

    /// Replace all markers with one per placeable venue
    ///
    /// Venues with bad coordinates, or that the widget refuses, are skipped
    /// and logged rather than aborting the rest of the list.
    pub fn sync<S>(&mut self, surface: &S, venues: &[Venue]) -> SyncReport
    where
        S: MapSurface<Marker = M>,
    {
        self.clear(surface);

        let mut report = SyncReport::default();
        for venue in venues {
            match place(surface, venue) {
                Ok(marker) => {
                    self.markers.push(marker);
                    report.placed += 1;
                }
                Err(err) => {
                    log::warn!("[MAP] Skipping venue {}: {}", venue.provider_id, err);
                    report.skipped += 1;
                }
            }
        }
        report
    }
}

fn place<S: MapSurface>(surface: &S, venue: &Venue) -> Result<S::Marker, MapError> {
    if !venue.has_valid_position() {
        return Err(MapError::InvalidPosition { lat: venue.lat, lng: venue.lng });
    }
    let html = popup_html(venue);
    surface.place_marker(&Pin {
        lng_lat: [venue.lng, venue.lat],
        popup_html: &html,
    })
}
