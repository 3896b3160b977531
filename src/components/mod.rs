//! UI Components
//!
//! Reusable Leptos components.

mod health_badge;
mod map_view;
mod venue_list;

pub use health_badge::HealthBadge;
pub use map_view::MapView;
pub use venue_list::VenueList;
