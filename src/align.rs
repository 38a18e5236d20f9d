//! Forecast time alignment
//!
//! Computes which index of an hourly forecast series represents "the
//! current hour" at the target location. Timestamps are compared as
//! fixed-width `YYYY-MM-DDTHH:00` labels; the zero-padded format makes
//! lexicographic comparison equivalent to chronological comparison, so
//! structured time values are only formatted to the label at the
//! comparison boundary.

use chrono::{DateTime, Duration, Local, Utc};
use tracing::debug;

const HOUR_LABEL_FORMAT: &str = "%Y-%m-%dT%H:00";

/// Current-hour label for a location, shifted by its UTC offset when
/// one is known, otherwise formatted from the caller's own local clock
#[must_use]
pub fn current_hour_label(utc_offset_seconds: Option<i64>) -> String {
    hour_label_at(Utc::now(), utc_offset_seconds)
}

/// Label for an arbitrary instant; the offset substitutes for
/// timezone-aware formatting by shifting the instant and reading its
/// fields as if they were UTC fields
#[must_use]
pub fn hour_label_at(instant: DateTime<Utc>, utc_offset_seconds: Option<i64>) -> String {
    match utc_offset_seconds {
        Some(offset) => {
            let shifted = instant + Duration::seconds(offset);
            shifted.format(HOUR_LABEL_FORMAT).to_string()
        }
        None => instant.with_timezone(&Local).format(HOUR_LABEL_FORMAT).to_string(),
    }
}

/// Find the value index corresponding to the current hour. Exact label
/// match wins; otherwise the nearest upcoming slot; otherwise the last
/// valid value index. Returns `None` only for an empty series.
#[must_use]
pub fn align_to_current_hour(
    timestamps: &[String],
    values_len: usize,
    utc_offset_seconds: Option<i64>,
) -> Option<usize> {
    align_to_hour_label(timestamps, values_len, &current_hour_label(utc_offset_seconds))
}

/// Three-tier alignment against a precomputed hour label
#[must_use]
pub fn align_to_hour_label(
    timestamps: &[String],
    values_len: usize,
    hour_label: &str,
) -> Option<usize> {
    if timestamps.is_empty() || values_len == 0 {
        return None;
    }
    if let Some(index) = timestamps.iter().position(|label| label == hour_label) {
        return Some(index);
    }
    if let Some(index) = timestamps.iter().position(|label| label.as_str() > hour_label) {
        // May mask a large clock/timezone skew; observable but accepted
        debug!(index, hour_label, "no exact forecast slot, using nearest upcoming");
        return Some(index);
    }
    debug!(hour_label, "current hour past every forecast slot, using last value");
    Some(values_len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn series() -> Vec<String> {
        vec![
            "2024-01-01T00:00".to_string(),
            "2024-01-01T01:00".to_string(),
            "2024-01-01T02:00".to_string(),
        ]
    }

    #[test]
    fn test_exact_match_wins() {
        assert_eq!(align_to_hour_label(&series(), 3, "2024-01-01T01:00"), Some(1));
    }

    #[test]
    fn test_nearest_upcoming_slot() {
        // A label between slots lands on the next one
        assert_eq!(align_to_hour_label(&series(), 3, "2024-01-01T00:30"), Some(1));
        // A label before the whole series lands on the first slot
        assert_eq!(align_to_hour_label(&series(), 3, "2023-12-31T23:00"), Some(0));
    }

    #[test]
    fn test_past_everything_uses_last_value_index() {
        assert_eq!(align_to_hour_label(&series(), 3, "2024-01-01T05:00"), Some(2));
        // Value series shorter than the timestamp series
        assert_eq!(align_to_hour_label(&series(), 2, "2024-01-01T05:00"), Some(1));
    }

    #[test]
    fn test_empty_series_returns_none() {
        assert_eq!(align_to_hour_label(&[], 0, "2024-01-01T00:00"), None);
        assert_eq!(align_to_hour_label(&series(), 0, "2024-01-01T00:00"), None);
    }

    #[test]
    fn test_hour_label_truncates_and_shifts() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 21, 42, 7).unwrap();
        assert_eq!(hour_label_at(instant, Some(0)), "2024-06-15T21:00");
        // UTC+2 rolls into the next hour bucket
        assert_eq!(hour_label_at(instant, Some(7200)), "2024-06-15T23:00");
        // Negative offset crossing midnight backwards
        let midnight = Utc.with_ymd_and_hms(2024, 6, 15, 1, 5, 0).unwrap();
        assert_eq!(hour_label_at(midnight, Some(-7200)), "2024-06-14T23:00");
    }

    #[test]
    fn test_label_is_fixed_width_zero_padded() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
        assert_eq!(hour_label_at(instant, Some(0)), "2024-01-02T03:00");
    }
}
