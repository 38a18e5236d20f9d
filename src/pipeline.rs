//! The core lookup pipeline exposed to the embedding shell
//!
//! Each call is one self-contained pipeline: resolve a location, fetch
//! its UV forecast (concurrently with reverse geocoding on the
//! coordinate path), and return a plain report value. Overlapping
//! pipelines do not share state; last-write-wins presentation is the
//! shell's concern.

use crate::models::Coordinate;
use crate::{Result, forecast, geocoding};
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_geocode_search_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_reverse_geocode_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/reverse".to_string()
}

fn default_fallback_reverse_url() -> String {
    "https://api.bigdatacloud.net/data/reverse-geocode-client".to_string()
}

/// Provider endpoints. The defaults are the production services; tests
/// point these at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    /// Open-Meteo forecast API
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Open-Meteo geocoding search API
    #[serde(default = "default_geocode_search_url")]
    pub geocode_search_url: String,
    /// Open-Meteo reverse geocoding API (primary reverse provider)
    #[serde(default = "default_reverse_geocode_url")]
    pub reverse_geocode_url: String,
    /// BigDataCloud reverse geocoding (fallback reverse provider)
    #[serde(default = "default_fallback_reverse_url")]
    pub fallback_reverse_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            geocode_search_url: default_geocode_search_url(),
            reverse_geocode_url: default_reverse_geocode_url(),
            fallback_reverse_url: default_fallback_reverse_url(),
        }
    }
}

/// The result of one lookup pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvReport {
    /// UV index for the current hour at the location, when readable
    pub uv_now: Option<f64>,
    /// Daily maximum UV index, when the provider supplied one
    pub uv_max: Option<f64>,
    /// Human-readable place label; never empty (worst case is the
    /// formatted coordinate)
    pub label: String,
    /// The coordinate the forecast was fetched for
    pub coordinate: Coordinate,
}

/// UV lookup service owning the HTTP client and provider endpoints
#[derive(Debug, Clone)]
pub struct UvAdvisor {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl UvAdvisor {
    /// Create an advisor against the production endpoints
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    /// Create an advisor against explicit endpoints
    #[must_use]
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Look up UV for a device-supplied coordinate. The forecast fetch
    /// and the reverse geocode run concurrently; both complete before
    /// the report is built. A forecast failure fails the pipeline,
    /// reverse geocoding never does.
    pub async fn resolve_by_coordinate(&self, latitude: f64, longitude: f64) -> Result<UvReport> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        debug!(latitude, longitude, "resolving by coordinate");

        let (series, place) = futures::future::join(
            forecast::fetch_uv_forecast(&self.client, &self.endpoints.forecast_url, coordinate),
            geocoding::reverse_geocode(&self.client, &self.endpoints, coordinate),
        )
        .await;
        let series = series?;

        Ok(UvReport {
            uv_now: series.uv_now(),
            uv_max: series.uv_max(),
            label: place.display,
            coordinate,
        })
    }

    /// Look up UV for free-text input. The forward geocoder supplies
    /// the place label, so no reverse lookup runs on this path.
    pub async fn resolve_by_name(&self, text: &str) -> Result<UvReport> {
        let resolved =
            geocoding::geocode_by_name(&self.client, &self.endpoints, text).await?;
        debug!(label = %resolved.display_label, "resolved name, fetching forecast");

        let series = forecast::fetch_uv_forecast(
            &self.client,
            &self.endpoints.forecast_url,
            resolved.coordinate,
        )
        .await?;

        Ok(UvReport {
            uv_now: series.uv_now(),
            uv_max: series.uv_max(),
            label: resolved.display_label,
            coordinate: resolved.coordinate,
        })
    }
}

impl Default for UvAdvisor {
    fn default() -> Self {
        Self::new()
    }
}
