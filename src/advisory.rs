//! Sunscreen recommendation classifier
//!
//! Maps the current UV index to one of four advisory states. Total and
//! deterministic: every input, including an absent or NaN reading,
//! produces an advisory.

use crate::models::{Advisory, AdvisoryState};

/// UV index at or above which sunscreen is a clear yes
const UV_YES_THRESHOLD: f64 = 3.0;
/// UV index at or above which sunscreen is still sensible
const UV_MAYBE_THRESHOLD: f64 = 1.0;

/// Display values are clamped to this range before formatting;
/// classification always uses the raw value
const UV_DISPLAY_MAX: f64 = 20.0;

/// Classify a UV reading into a four-way advisory
#[must_use]
pub fn classify(uv_now: Option<f64>) -> Advisory {
    let Some(value) = uv_now.filter(|value| !value.is_nan()) else {
        return Advisory {
            state: AdvisoryState::Unknown,
            title: "Hmm…".to_string(),
            subtitle: "Could not read UV right now.".to_string(),
        };
    };
    if value >= UV_YES_THRESHOLD {
        Advisory {
            state: AdvisoryState::Yes,
            title: "yes".to_string(),
            subtitle: "UV is 3 or higher\nSPF it".to_string(),
        }
    } else if value >= UV_MAYBE_THRESHOLD {
        Advisory {
            state: AdvisoryState::Maybe,
            title: "tbh prob".to_string(),
            subtitle: "UV is low but why risk it".to_string(),
        }
    } else {
        Advisory {
            state: AdvisoryState::No,
            title: "not\nright\nnow".to_string(),
            subtitle: "UV is minimal at the moment".to_string(),
        }
    }
}

/// Format a UV value for display: clamped to [0, 20], one decimal
/// place; an absent or NaN reading renders as an em dash
#[must_use]
pub fn format_uv(value: Option<f64>) -> String {
    match value.filter(|value| !value.is_nan()) {
        Some(value) => format!("{:.1}", value.clamp(0.0, UV_DISPLAY_MAX)),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3.0), AdvisoryState::Yes)]
    #[case(Some(7.5), AdvisoryState::Yes)]
    #[case(Some(11.0), AdvisoryState::Yes)]
    #[case(Some(2.9), AdvisoryState::Maybe)]
    #[case(Some(1.0), AdvisoryState::Maybe)]
    #[case(Some(0.9), AdvisoryState::No)]
    #[case(Some(0.0), AdvisoryState::No)]
    #[case(Some(-0.5), AdvisoryState::No)]
    #[case(Some(f64::NAN), AdvisoryState::Unknown)]
    #[case(None, AdvisoryState::Unknown)]
    fn test_classification_bands(#[case] uv: Option<f64>, #[case] expected: AdvisoryState) {
        assert_eq!(classify(uv).state, expected);
    }

    #[test]
    fn test_band_boundaries_belong_to_higher_band() {
        assert_eq!(classify(Some(3.0)).state, AdvisoryState::Yes);
        assert_eq!(classify(Some(1.0)).state, AdvisoryState::Maybe);
    }

    #[test]
    fn test_advisory_copy() {
        assert_eq!(classify(Some(5.0)).title, "yes");
        assert!(classify(Some(2.0)).subtitle.contains("why risk it"));
        assert!(classify(None).subtitle.contains("Could not read UV"));
    }

    #[rstest]
    #[case(Some(4.26), "4.3")]
    #[case(Some(25.0), "20.0")]
    #[case(Some(-1.0), "0.0")]
    #[case(Some(f64::NAN), "—")]
    #[case(None, "—")]
    fn test_format_uv(#[case] uv: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_uv(uv), expected);
    }

    #[test]
    fn test_classification_ignores_display_clamp() {
        // 25 clamps to 20 for display but classifies on the raw value
        assert_eq!(classify(Some(25.0)).state, AdvisoryState::Yes);
    }
}
