//! Forecast snapshot model: one fetch of hourly UV data for a location

use crate::align;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of one UV forecast fetch
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastSeries {
    /// Hourly timestamps in the location's local time, fixed-width
    /// `YYYY-MM-DDTHH:MM` format as returned by the provider
    pub timestamps: Vec<String>,
    /// UV index per hour; the provider may return null slots
    pub uv_by_hour: Vec<Option<f64>>,
    /// Daily maximum UV index, when the provider supplied one
    pub daily_max_uv: Option<f64>,
    /// The location's offset from UTC, used to compute "now" in its
    /// own clock
    pub utc_offset_seconds: Option<i64>,
}

impl ForecastSeries {
    /// Whether the snapshot carries no hourly values at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty() || self.uv_by_hour.is_empty()
    }

    /// UV index for the current hour at the target location, or `None`
    /// when the series is empty or the aligned slot holds no value
    #[must_use]
    pub fn uv_now(&self) -> Option<f64> {
        let index =
            align::align_to_current_hour(&self.timestamps, self.uv_by_hour.len(), self.utc_offset_seconds)?;
        self.uv_by_hour.get(index).copied().flatten()
    }

    /// Daily maximum UV index
    #[must_use]
    pub fn uv_max(&self) -> Option<f64> {
        self.daily_max_uv
    }
}
