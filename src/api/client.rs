//! Search Client
//!
//! One-shot venue search and liveness check against the configured API.
//! No retries, no timeouts.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::error::ApiError;
use super::transport::{FetchTransport, Transport};
use crate::models::{SearchQuery, SearchResponse, Venue};

pub const SEARCH_PATH: &str = "/test/google-places";
pub const HEALTH_PATH: &str = "/health";

/// Characters escaped inside a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

#[derive(Debug, Clone)]
pub struct SearchClient<T = FetchTransport> {
    base_url: String,
    transport: T,
}

impl SearchClient<FetchTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, FetchTransport)
    }
}

impl<T: Transport> SearchClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full search URL for `query`; radius falls back to the default
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}{}?lat={}&lng={}&radius={}",
            self.base_url,
            SEARCH_PATH,
            encode_value(&query.lat.to_string()),
            encode_value(&query.lng.to_string()),
            query.radius_or_default(),
        )
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }

    /// Search venues around a coordinate, in the order the service returned them
    pub async fn search_venues(&self, query: SearchQuery) -> Result<Vec<Venue>, ApiError> {
        query.validate().map_err(ApiError::InvalidQuery)?;

        let url = self.search_url(&query);
        log::debug!("[API] GET {}", url);
        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            return Err(ApiError::Request {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&response.body)?;
        parsed.validate().map_err(ApiError::Schema)?;

        if parsed.count != parsed.venues.len() as i64 {
            log::debug!(
                "[API] count {} differs from {} venues returned",
                parsed.count,
                parsed.venues.len()
            );
        }
        log::info!("[API] {} venues (status={})", parsed.venues.len(), parsed.status);
        Ok(parsed.venues)
    }

    /// True iff the service answers `/health` with a 2xx/3xx status. Never fails.
    pub async fn health_check(&self) -> bool {
        match self.transport.get(&self.health_url()).await {
            Ok(response) => (200..400).contains(&response.status),
            Err(err) => {
                log::warn!("[API] health check failed: {}", err);
                false
            }
        }
    }
}

fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpResponse, TransportError};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Replies with a canned result and records requested URLs
    struct ScriptedTransport {
        reply: Result<HttpResponse, TransportError>,
        requested: RefCell<Vec<String>>,
    }

    impl ScriptedTransport {
        fn status(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpResponse {
                    status,
                    status_text: status_text(status).to_string(),
                    body: body.to_string(),
                }),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: Err(TransportError("connection refused".to_string())),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    fn status_text(status: u16) -> &'static str {
        match status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "",
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.requested.borrow_mut().push(url.to_string());
            self.reply.clone()
        }
    }

    fn client(transport: ScriptedTransport) -> SearchClient<ScriptedTransport> {
        SearchClient::with_transport("http://api.test/", transport)
    }

    fn venue_json(provider_id: &str, name: &str) -> String {
        format!(
            r#"{{"provider_id":"{}","provider_name":"google","name":"{}","categories":["cafe"],
                "lat":37.77,"lng":-122.41,"address":null,"rating":null,"price_level":null,
                "hours":null,"raw_hours":null}}"#,
            provider_id, name
        )
    }

    #[test]
    fn test_search_url_uses_given_values() {
        let c = client(ScriptedTransport::status(200, ""));
        let url = c.search_url(&SearchQuery::new(37.7749, -122.4194).with_radius(250));
        assert_eq!(url, "http://api.test/test/google-places?lat=37.7749&lng=-122.4194&radius=250");
    }

    #[test]
    fn test_search_url_defaults_radius() {
        let c = client(ScriptedTransport::status(200, ""));
        let url = c.search_url(&SearchQuery::new(-33.5, 151.25));
        assert_eq!(url, "http://api.test/test/google-places?lat=-33.5&lng=151.25&radius=1000");
    }

    #[test]
    fn test_base_url_trailing_slashes_trimmed() {
        let c = SearchClient::with_transport("http://api.test///", ScriptedTransport::status(200, ""));
        assert_eq!(c.base_url(), "http://api.test");
        assert_eq!(c.health_url(), "http://api.test/health");
    }

    #[tokio::test]
    async fn test_search_returns_venues_in_order() {
        let body = format!(
            r#"{{"status":"ok","count":2,"venues":[{},{}]}}"#,
            venue_json("v1", "First"),
            venue_json("v2", "Second")
        );
        let c = client(ScriptedTransport::status(200, &body));
        let venues = c.search_venues(SearchQuery::new(37.7749, -122.4194)).await.unwrap();

        let ids: Vec<_> = venues.iter().map(|v| v.provider_id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2"]);
        assert_eq!(
            c.transport.requested.borrow().as_slice(),
            ["http://api.test/test/google-places?lat=37.7749&lng=-122.4194&radius=1000"]
        );
    }

    #[tokio::test]
    async fn test_search_empty_list() {
        let c = client(ScriptedTransport::status(200, r#"{"status":"success","count":0,"venues":[]}"#));
        let venues = c.search_venues(SearchQuery::new(0.0, 0.0)).await.unwrap();
        assert!(venues.is_empty());
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let c = client(ScriptedTransport::status(500, r#"{"detail":"boom"}"#));
        let err = c.search_venues(SearchQuery::new(0.0, 0.0)).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let c = client(ScriptedTransport::status(200, "<html>gateway</html>"));
        let err = c.search_venues(SearchQuery::new(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let c = client(ScriptedTransport::status(200, r#"{"status":"ok","count":1}"#));
        let err = c.search_venues(SearchQuery::new(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_duplicate_provider_ids() {
        let body = format!(
            r#"{{"status":"ok","count":2,"venues":[{},{}]}}"#,
            venue_json("same", "A"),
            venue_json("same", "B")
        );
        let c = client(ScriptedTransport::status(200, &body));
        let err = c.search_venues(SearchQuery::new(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::Schema(_)));
    }

    #[tokio::test]
    async fn test_search_network_failure_propagates() {
        let c = client(ScriptedTransport::unreachable());
        let err = c.search_venues(SearchQuery::new(0.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_invalid_query_makes_no_request() {
        let c = client(ScriptedTransport::status(200, ""));
        let err = c.search_venues(SearchQuery::new(95.0, 0.0)).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidQuery(_)));
        assert!(c.transport.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_status_ranges() {
        for status in [200, 204, 301, 399] {
            assert!(client(ScriptedTransport::status(status, "")).health_check().await, "{}", status);
        }
        for status in [400, 404, 500, 599] {
            assert!(!client(ScriptedTransport::status(status, "")).health_check().await, "{}", status);
        }
    }

    #[tokio::test]
    async fn test_health_check_network_error_is_false() {
        let c = client(ScriptedTransport::unreachable());
        assert!(!c.health_check().await);
        assert_eq!(c.transport.requested.borrow().as_slice(), ["http://api.test/health"]);
    }
}
