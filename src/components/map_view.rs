//! Map View Component
//!
//! Owns one Mapbox map for the component's lifetime and rebuilds its
//! markers whenever the venue list changes.

use leptos::html::Div;
use leptos::prelude::*;
use mapbox_gl_bindings::{MapConfig, MapHandle};

use crate::context::use_app_context;
use crate::map::{MapError, MapOptions, MapSlot, MAP_STYLE};
use crate::models::Venue;

#[component]
pub fn MapView(
    /// Venues to pin, in display order
    #[prop(into)]
    venues: Signal<Vec<Venue>>,
    /// Initial camera; only a change in value re-creates the map
    #[prop(into, default = MapOptions::default().into())]
    options: Signal<MapOptions>,
) -> impl IntoView {
    let ctx = use_app_context();
    let container = NodeRef::<Div>::new();
    let slot = StoredValue::new_local(MapSlot::<MapHandle>::new());
    let options = Memo::new(move |_| options.get());

    // Mount (or re-mount on a real options change) once the container exists
    Effect::new(move |_| {
        let opts = options.get();
        let Some(element) = container.get() else { return };
        let token = ctx.mapbox_token();
        let current = venues.get_untracked();

        slot.update_value(|slot| {
            let mounted = slot.activate(opts, &current, |opts| {
                let config = MapConfig {
                    style: MAP_STYLE,
                    center: opts.center,
                    zoom: opts.zoom,
                    access_token: token.as_deref(),
                };
                MapHandle::mount(&element, &config).map_err(MapError::from)
            });
            match mounted {
                Ok(true) => log::info!("[MAP] Map ready at {:?} zoom {}", opts.center, opts.zoom),
                Ok(false) => {}
                Err(err) => log::error!("[MAP] Failed to create map: {}", err),
            }
        });
    });

    // Full marker rebuild on every list change
    Effect::new(move |_| {
        let list = venues.get();
        slot.update_value(|slot| {
            if let Some(report) = slot.sync(&list) {
                log::debug!("[MAP] {} markers placed, {} skipped", report.placed, report.skipped);
            }
        });
    });

    on_cleanup(move || {
        slot.update_value(|slot| {
            if slot.release() {
                log::debug!("[MAP] Map released");
            }
        });
    });

    view! { <div node_ref=container class="map-container" /> }
}
