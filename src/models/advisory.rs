//! Advisory model: the four-way sunscreen recommendation

use serde::{Deserialize, Serialize};

/// Advisory state derived from the current UV index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryState {
    /// Wear sunscreen (UV >= 3)
    Yes,
    /// Low UV, sunscreen still sensible (1 <= UV < 3)
    Maybe,
    /// Minimal UV right now (UV < 1)
    No,
    /// UV reading unavailable
    Unknown,
}

/// A terse recommendation, pure function of one UV value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub state: AdvisoryState,
    pub title: String,
    pub subtitle: String,
}
