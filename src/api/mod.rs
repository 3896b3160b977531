//! Venue Search API
//!
//! HTTP client for the venue search service, organized as error types,
//! the transport seam and the client itself.

mod client;
mod error;
mod transport;

pub use client::{SearchClient, HEALTH_PATH, SEARCH_PATH};
pub use error::{ApiError, TransportError};
pub use transport::{FetchTransport, HttpResponse, Transport};
