//! Application Context
//!
//! Shared configuration and API client provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::SearchClient;
use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    client: StoredValue<SearchClient>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let client = SearchClient::new(&config.api_url);
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new(client),
        }
    }

    /// A handle to the search client (cheap clone)
    pub fn client(&self) -> SearchClient {
        self.client.get_value()
    }

    pub fn mapbox_token(&self) -> Option<String> {
        self.config.with_value(|config| config.mapbox_token.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
