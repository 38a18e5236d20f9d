//! Data models for the `spfcheck` core
//!
//! This module contains the core domain models organized by concern:
//! - Location: coordinates, parsed queries, geocoding candidates
//! - Forecast: one fetched snapshot of hourly UV data
//! - Advisory: the four-way sunscreen recommendation

pub mod advisory;
pub mod forecast;
pub mod location;

// Re-export all public types for convenient access
pub use advisory::{Advisory, AdvisoryState};
pub use forecast::ForecastSeries;
pub use location::{Coordinate, GeocodeCandidate, LocationQuery, ResolvedLocation, ScoredCandidate};
