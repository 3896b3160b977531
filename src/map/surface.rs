//! Map Surface
//!
//! What marker synchronization needs from a map widget.

use mapbox_gl_bindings::{JsError, MapHandle, MarkerHandle, MarkerStyle};
use thiserror::Error;

pub const MARKER_STYLE: MarkerStyle<'static> = MarkerStyle {
    color: "#3b82f6",
    popup_offset: 25.0,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("invalid position lat={lat} lng={lng}")]
    InvalidPosition { lat: f64, lng: f64 },

    #[error(transparent)]
    Widget(#[from] JsError),
}

/// A pin to place: position plus popup markup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin<'a> {
    /// [lng, lat]
    pub lng_lat: [f64; 2],
    pub popup_html: &'a str,
}

/// A map that can hold markers
pub trait MapSurface {
    type Marker;

    fn place_marker(&self, pin: &Pin<'_>) -> Result<Self::Marker, MapError>;

    fn remove_marker(&self, marker: Self::Marker);
}

impl MapSurface for MapHandle {
    type Marker = MarkerHandle;

    fn place_marker(&self, pin: &Pin<'_>) -> Result<MarkerHandle, MapError> {
        Ok(self.add_marker(pin.lng_lat, pin.popup_html, &MARKER_STYLE)?)
    }

    fn remove_marker(&self, marker: MarkerHandle) {
        marker.remove();
    }
}
