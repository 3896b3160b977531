//! App Configuration
//!
//! Values are baked in at build time (`MODEMAP_API_URL`,
//! `MODEMAP_MAPBOX_TOKEN`); a browser bundle has no process environment.

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Coordinate searched by the "Load Venues" button (San Francisco)
pub const SEARCH_ORIGIN: (f64, f64) = (37.7749, -122.4194);
/// Radius used by the page's searches, meters
pub const SEARCH_RADIUS_M: u32 = 1000;
/// Delay between health checks
pub const HEALTH_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Search service base URL, no trailing slash
    pub api_url: String,
    pub mapbox_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("MODEMAP_API_URL"), option_env!("MODEMAP_MAPBOX_TOKEN"))
    }

    /// Missing values are not fatal: the URL falls back to the local
    /// default and a missing token only produces a warning.
    pub fn from_values(api_url: Option<&str>, mapbox_token: Option<&str>) -> Self {
        let api_url = match non_empty(api_url) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                log::warn!("[CONFIG] MODEMAP_API_URL not set, using {}", DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            }
        };
        let mapbox_token = non_empty(mapbox_token).map(str::to_string);
        if mapbox_token.is_none() {
            log::warn!("[CONFIG] MODEMAP_MAPBOX_TOKEN not set, map tiles will be unauthenticated");
        }
        Self { api_url, mapbox_token }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
