//! Map Layer
//!
//! Widget-independent marker synchronization. The component in
//! `components::map_view` drives it with a Mapbox map; tests drive it with
//! an in-memory surface.

mod markers;
mod popup;
mod session;
mod surface;

pub use markers::{MarkerSet, SyncReport};
pub use popup::{popup_html, price_glyphs};
pub use session::{MapOptions, MapSlot, MAP_STYLE};
pub use surface::{MapError, MapSurface, Pin, MARKER_STYLE};
