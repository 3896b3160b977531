//! ModeMap Frontend App
//!
//! Page shell: search trigger, map and venue list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{HealthBadge, MapView, VenueList};
use crate::config::{AppConfig, SEARCH_ORIGIN, SEARCH_RADIUS_M};
use crate::context::AppContext;
use crate::models::SearchQuery;
use crate::store::{store_begin_search, store_finish_search, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let ctx = AppContext::new(AppConfig::from_env());
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Search around a coordinate; only the newest search may update state
    let load_venues = move |lat: f64, lng: f64| {
        let ticket = store_begin_search(&store);
        let client = ctx.client();
        log::info!("[APP] Loading venues around {}, {}", lat, lng);

        spawn_local(async move {
            let query = SearchQuery::new(lat, lng).with_radius(SEARCH_RADIUS_M);
            let outcome = client.search_venues(query).await.map_err(|err| {
                log::error!("[APP] Failed to load venues: {}", err);
                err.to_string()
            });
            if !store_finish_search(&store, ticket, outcome) {
                log::debug!("[APP] Dropped result of superseded search {:?}", ticket);
            }
        });
    };

    let venues = Signal::derive(move || store.venues().get());
    let loading = move || store.loading().get();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="app-header">
                    <h1>"ModeMap"</h1>
                    <HealthBadge />
                </header>

                <button
                    class="load-btn"
                    disabled=loading
                    on:click=move |_| load_venues(SEARCH_ORIGIN.0, SEARCH_ORIGIN.1)
                >
                    {move || if loading() { "Loading..." } else { "Load Venues (SF)" }}
                </button>

                {move || store.last_error().get().map(|err| view! {
                    <p class="search-error">{format!("Search failed: {}", err)}</p>
                })}

                <div class="map-section">
                    <MapView venues=venues />
                </div>

                <VenueList venues=venues />
            </main>
        </div>
    }
}
