//! Forward and reverse geocoding orchestration
//!
//! Forward lookup resolves free-text input to a coordinate via the
//! Open-Meteo geocoding API, applying the query parser and candidate
//! scorer. Reverse lookup resolves a coordinate to a place label
//! through an ordered provider chain (Open-Meteo, then BigDataCloud);
//! every provider failure falls through, so reverse lookup never fails
//! outward — the worst case is a formatted-coordinate label.

use crate::models::{Coordinate, GeocodeCandidate, ResolvedLocation};
use crate::pipeline::Endpoints;
use crate::{Result, SpfError, query, regions, scoring};
use tracing::{debug, warn};

/// Labels produced by reverse geocoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceLabel {
    /// Short place name, e.g. "Austin"
    pub primary: String,
    /// Full display label, e.g. "Austin, Texas"
    pub display: String,
}

/// Resolve free-text input to a single location.
///
/// Queries five candidates when the input carries disambiguation
/// segments (one otherwise), constrains the search to the United States
/// when the query looks like a US location, and applies the scoring
/// selection policy.
pub(crate) async fn geocode_by_name(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    raw: &str,
) -> Result<ResolvedLocation> {
    let parsed = query::parse_query(raw)
        .ok_or_else(|| SpfError::input("search text is empty"))?;

    let count = if parsed.filter_tokens.is_empty() { 1 } else { 5 };
    let mut url = format!(
        "{}?name={}&count={count}&language=en&format=json",
        endpoints.geocode_search_url,
        urlencoding::encode(&parsed.primary_name)
    );
    if parsed.likely_us {
        url.push_str("&country=United%20States");
    }
    debug!(%url, "forward geocoding");

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(SpfError::network(format!(
            "geocoding provider returned {}",
            response.status()
        )));
    }
    let search_response: openmeteo::SearchResponse = response
        .json()
        .await
        .map_err(|err| SpfError::parse(format!("malformed geocoding response: {err}")))?;

    let candidates: Vec<GeocodeCandidate> = search_response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();

    let hit = scoring::select_candidate(candidates, &parsed).ok_or_else(|| {
        SpfError::not_found(format!("no results for \"{}\"", parsed.primary_name))
    })?;
    debug!(name = %hit.name, lat = hit.latitude, lon = hit.longitude, "forward geocode hit");

    let display_label = join_parts([
        Some(hit.name.clone()),
        hit.admin1.clone(),
        hit.country.clone(),
    ]);
    Ok(ResolvedLocation {
        coordinate: Coordinate {
            latitude: hit.latitude,
            longitude: hit.longitude,
        },
        primary_label: hit.name,
        display_label,
    })
}

/// Resolve a coordinate to a human-readable place label. Providers are
/// tried in order; the first usable label wins and any failure is
/// swallowed, down to the coordinate-string fallback.
pub(crate) async fn reverse_geocode(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    coordinate: Coordinate,
) -> PlaceLabel {
    let fallback = coordinate.format_label();

    if let Some(label) = reverse_via_open_meteo(client, endpoints, coordinate, &fallback).await {
        return label;
    }
    if let Some(label) = reverse_via_big_data_cloud(client, endpoints, coordinate, &fallback).await
    {
        return label;
    }
    warn!(lat = coordinate.latitude, lon = coordinate.longitude, "reverse geocoding exhausted all providers, using coordinate label");
    PlaceLabel {
        primary: fallback.clone(),
        display: fallback,
    }
}

async fn reverse_via_open_meteo(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    coordinate: Coordinate,
    fallback: &str,
) -> Option<PlaceLabel> {
    let url = format!(
        "{}?latitude={}&longitude={}&count=1&language=en&format=json",
        endpoints.reverse_geocode_url, coordinate.latitude, coordinate.longitude
    );
    let response = match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            debug!(status = %response.status(), "primary reverse geocoder returned an error status");
            return None;
        }
        Err(err) => {
            debug!("primary reverse geocoder unreachable: {err}");
            return None;
        }
    };
    let body: openmeteo::SearchResponse = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            debug!("primary reverse geocoder sent malformed JSON: {err}");
            return None;
        }
    };
    let place = body.results.unwrap_or_default().into_iter().next()?;

    let primary = [
        place.city.as_deref(),
        Some(place.name.as_str()),
        place.admin2.as_deref(),
        place.admin1.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|value| !value.is_empty())
    .map(str::to_string);

    assemble_label(
        primary,
        place.admin1.as_deref(),
        place.country.as_deref(),
        place.country_code.as_deref(),
        fallback,
    )
}

async fn reverse_via_big_data_cloud(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    coordinate: Coordinate,
    fallback: &str,
) -> Option<PlaceLabel> {
    let url = format!(
        "{}?latitude={}&longitude={}&localityLanguage=en",
        endpoints.fallback_reverse_url, coordinate.latitude, coordinate.longitude
    );
    let response = match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            debug!(status = %response.status(), "fallback reverse geocoder returned an error status");
            return None;
        }
        Err(err) => {
            debug!("fallback reverse geocoder unreachable: {err}");
            return None;
        }
    };
    let body: bigdatacloud::ReverseResponse = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            debug!("fallback reverse geocoder sent malformed JSON: {err}");
            return None;
        }
    };

    let primary = [
        body.city.as_deref(),
        body.locality.as_deref(),
        body.principal_subdivision.as_deref(),
        body.country_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|value| !value.is_empty())
    .map(str::to_string);

    assemble_label(
        primary,
        body.principal_subdivision.as_deref(),
        body.country_name.as_deref(),
        body.country_code.as_deref(),
        fallback,
    )
}

/// Join a primary name, a distinct secondary subdivision, and a
/// normalized country name into a display label. Country is skipped for
/// US results when the country code says so; with no code at all, a
/// present country name is kept.
fn assemble_label(
    primary: Option<String>,
    secondary: Option<&str>,
    country: Option<&str>,
    country_code: Option<&str>,
    fallback: &str,
) -> Option<PlaceLabel> {
    let secondary = secondary
        .filter(|value| !value.is_empty())
        .filter(|value| primary.as_deref() != Some(*value))
        .map(str::to_string);

    let include_country = match country_code.filter(|code| !code.is_empty()) {
        Some(code) => !code.eq_ignore_ascii_case("US"),
        None => true,
    };
    let country = country
        .filter(|_| include_country)
        .filter(|value| !value.is_empty())
        .filter(|value| primary.as_deref() != Some(*value))
        .map(regions::normalize_country_name);

    let display = join_parts([primary.clone(), secondary, country]);
    if primary.is_none() && display.is_empty() {
        return None;
    }
    Some(PlaceLabel {
        primary: primary.clone().unwrap_or_else(|| display.clone()),
        display: if display.is_empty() {
            primary.unwrap_or_else(|| fallback.to_string())
        } else {
            display
        },
    })
}

/// Join non-empty label parts with ", "
fn join_parts<const N: usize>(parts: [Option<String>; N]) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `OpenMeteo` geocoding API response structures; the forward search
/// and reverse lookup share one shape
mod openmeteo {
    use crate::models::GeocodeCandidate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        pub results: Option<Vec<SearchResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub city: Option<String>,
        pub admin1: Option<String>,
        pub admin2: Option<String>,
        pub admin3: Option<String>,
        pub country: Option<String>,
        pub country_code: Option<String>,
    }

    impl From<SearchResult> for GeocodeCandidate {
        fn from(result: SearchResult) -> Self {
            Self {
                name: result.name,
                latitude: result.latitude,
                longitude: result.longitude,
                admin1: result.admin1,
                admin2: result.admin2,
                admin3: result.admin3,
                country: result.country,
                country_code: result.country_code,
            }
        }
    }
}

/// BigDataCloud reverse-geocode-client response structure
mod bigdatacloud {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ReverseResponse {
        pub city: Option<String>,
        pub locality: Option<String>,
        pub principal_subdivision: Option<String>,
        pub country_name: Option<String>,
        pub country_code: Option<String>,
    }
}
