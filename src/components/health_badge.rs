//! Health Badge Component
//!
//! Checks the search service on mount and then every `HEALTH_INTERVAL_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::HEALTH_INTERVAL_MS;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HealthBadge() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    spawn_local(async move {
        let client = ctx.client();
        loop {
            let online = client.health_check().await;
            // Store disposed: the page is gone, stop probing
            if store.backend_online().try_update(|v| *v = Some(online)).is_none() {
                break;
            }
            TimeoutFuture::new(HEALTH_INTERVAL_MS).await;
        }
    });

    let status = move || store.backend_online().get();

    view! {
        <span class=move || match status() {
            Some(true) => "health-badge online",
            Some(false) => "health-badge offline",
            None => "health-badge",
        }>
            {move || match status() {
                Some(true) => "API online",
                Some(false) => "API offline",
                None => "Checking API...",
            }}
        </span>
    }
}
