//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Venue;

/// Issued when a search starts; only the newest one may land its result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Venues from the last successful search
    pub venues: Vec<Venue>,
    /// A search is in flight
    pub loading: bool,
    /// Message from the last failed search, cleared by the next success
    pub last_error: Option<String>,
    /// Latest health check result (None = not checked yet)
    pub backend_online: Option<bool>,
    /// Sequence number of the most recently issued search
    pub latest_ticket: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mark a search as started and hand out its ticket
///
/// Only `latest_ticket` and `loading` are written, so venue subscribers
/// (the map markers) stay untouched.
pub fn store_begin_search(store: &AppStore) -> SearchTicket {
    store.latest_ticket().update(|ticket| *ticket += 1);
    store.loading().set(true);
    SearchTicket(store.latest_ticket().get_untracked())
}

/// Apply a finished search. Stale tickets are ignored (returns false).
///
/// A failure keeps the previous venues and records the error.
pub fn store_finish_search(store: &AppStore, ticket: SearchTicket, outcome: Result<Vec<Venue>, String>) -> bool {
    if store.latest_ticket().get_untracked() != ticket.0 {
        return false;
    }
    match outcome {
        Ok(venues) => {
            store.venues().set(venues);
            if store.last_error().with_untracked(Option::is_some) {
                store.last_error().set(None);
            }
        }
        Err(message) => store.last_error().set(Some(message)),
    }
    store.loading().set(false);
    true
}
