//! Frontend Models
//!
//! Venue records and the search request/response shapes exchanged with the
//! venue search service.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Default search radius in meters
pub const DEFAULT_RADIUS_M: u32 = 1000;
/// Largest radius the search service accepts
pub const MAX_RADIUS_M: u32 = 50_000;

/// A point of interest returned by the search service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Venue {
    /// Internal id; absent for venues the service has not stored yet
    #[serde(default)]
    pub id: Option<String>,
    pub provider_id: String,
    pub provider_name: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
    /// 0-5 scale
    pub rating: Option<f64>,
    /// 0-4 scale
    pub price_level: Option<u8>,
    pub hours: Option<serde_json::Map<String, serde_json::Value>>,
    pub raw_hours: Option<String>,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Venue {
    /// Whether the coordinates can be placed on a map
    pub fn has_valid_position(&self) -> bool {
        valid_coordinates(self.lat, self.lng)
    }

    /// One-line summary for list rendering
    pub fn summary(&self) -> String {
        match self.rating {
            Some(rating) => format!("{} - {} ⭐", self.name, rating),
            None => format!("{} - N/A ⭐", self.name),
        }
    }
}

/// Search response envelope
///
/// `status` and `count` are informational; `venues` is authoritative.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    pub count: i64,
    pub venues: Vec<Venue>,
}

impl SearchResponse {
    /// Check every venue against the invariants the UI relies on
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.venues.len());
        for (index, venue) in self.venues.iter().enumerate() {
            if !venue.has_valid_position() {
                return Err(format!(
                    "venue {} ({}) has invalid coordinates lat={} lng={}",
                    index, venue.provider_id, venue.lat, venue.lng
                ));
            }
            if !seen.insert(venue.provider_id.as_str()) {
                return Err(format!("duplicate provider_id {}", venue.provider_id));
            }
            if let Some(rating) = venue.rating {
                if !(0.0..=5.0).contains(&rating) {
                    return Err(format!("venue {} rating {} outside 0-5", venue.provider_id, rating));
                }
            }
            if let Some(price) = venue.price_level {
                if price > 4 {
                    return Err(format!("venue {} price_level {} outside 0-4", venue.provider_id, price));
                }
            }
        }
        Ok(())
    }
}

/// Geographic search query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub lat: f64,
    pub lng: f64,
    /// Meters; `None` means `DEFAULT_RADIUS_M`
    pub radius: Option<u32>,
}

impl SearchQuery {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, radius: None }
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn radius_or_default(&self) -> u32 {
        self.radius.unwrap_or(DEFAULT_RADIUS_M)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !valid_coordinates(self.lat, self.lng) {
            return Err(format!("coordinates out of range: lat={} lng={}", self.lat, self.lng));
        }
        let radius = self.radius_or_default();
        if radius == 0 || radius > MAX_RADIUS_M {
            return Err(format!("radius {} must be within 1..={}", radius, MAX_RADIUS_M));
        }
        Ok(())
    }
}

pub fn valid_coordinates(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}
