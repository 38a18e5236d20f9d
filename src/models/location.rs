//! Location models: coordinates, parsed queries, and geocoding candidates

use crate::SpfError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate, validating the geographic ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SpfError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SpfError::input(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SpfError::input(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Format as the human-readable fallback label used when no place
    /// name can be resolved
    #[must_use]
    pub fn format_label(&self) -> String {
        format!("Lat {:.3}, Lon {:.3}", self.latitude, self.longitude)
    }
}

/// A free-text location search, parsed once per lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// The place name sent to the geocoding provider
    pub primary_name: String,
    /// Lowercased disambiguation tokens from the remaining segments
    pub filter_tokens: BTreeSet<String>,
    /// Two-letter US state code, when a segment matched one
    pub us_state_code: Option<String>,
    /// Whether the query looks like a US location
    pub likely_us: bool,
}

/// One result from a geocoding provider, converted at the boundary
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// State/province-level subdivision
    pub admin1: Option<String>,
    /// County-level subdivision
    pub admin2: Option<String>,
    pub admin3: Option<String>,
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: Option<String>,
}

/// A candidate paired with its ephemeral ranking score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: GeocodeCandidate,
    pub score: i32,
}

/// The single location a user request resolved to
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinate: Coordinate,
    /// Short place name, e.g. "Austin"
    pub primary_label: String,
    /// Full display label, e.g. "Austin, Texas, United States"
    pub display_label: String,
}
