//! `spfcheck` - should-I-wear-sunscreen advisor core
//!
//! This library answers one question - "should I wear sunscreen right
//! now?" - by resolving a location (free text or device coordinates),
//! aligning an hourly UV-index forecast to the current hour in the
//! location's own time zone, and classifying the reading into a terse
//! four-way advisory. Rendering and platform geolocation are left to
//! the embedding shell.

pub mod advisory;
pub mod align;
pub mod error;
mod forecast;
mod geocoding;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod regions;
pub mod scoring;

// Re-export core types for public API
pub use advisory::{classify, format_uv};
pub use error::SpfError;
pub use models::{
    Advisory, AdvisoryState, Coordinate, ForecastSeries, GeocodeCandidate, LocationQuery,
    ResolvedLocation, ScoredCandidate,
};
pub use pipeline::{Endpoints, UvAdvisor, UvReport};
pub use query::parse_query;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SpfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
