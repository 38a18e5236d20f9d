//! Free-text location query parsing
//!
//! Turns user input like "Austin, TX" or "Springfield, Illinois" into a
//! primary place name plus a set of lowercase disambiguation tokens
//! used by the candidate scorer.

use crate::models::LocationQuery;
use crate::regions;
use std::collections::BTreeSet;

/// Whole-word markers that flag a query as targeting the United States
const US_MARKERS: [&str; 4] = ["usa", "united states", "u.s.a", "america"];

/// Parse free-text input into a [`LocationQuery`]. Returns `None` for
/// empty or whitespace-only input.
#[must_use]
pub fn parse_query(raw: &str) -> Option<LocationQuery> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    let segments: Vec<&str> = normalized
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    let primary_name = (*segments.first()?).to_string();
    let remainder = &segments[1..];

    let mut filter_tokens = BTreeSet::new();
    for segment in remainder {
        filter_tokens.insert(segment.to_lowercase());
        for token in segment.split_whitespace() {
            filter_tokens.insert(token.to_lowercase());
        }
    }

    let us_state_code = remainder.first().and_then(|segment| match_us_state(segment));
    if let Some(code) = &us_state_code {
        filter_tokens.insert(code.to_lowercase());
        if let Some(full) = regions::state_name_for_code(code) {
            filter_tokens.insert(full.to_lowercase());
        }
    }

    let likely_us = us_state_code.is_some()
        || remainder.iter().any(|segment| mentions_united_states(segment));

    Some(LocationQuery {
        primary_name,
        filter_tokens,
        us_state_code,
        likely_us,
    })
}

/// Test one query segment against the US state tables: periods are
/// stripped ("Tex." style abbreviations), then the code table is tried
/// uppercased and the full-name table lowercased.
fn match_us_state(segment: &str) -> Option<String> {
    let cleaned = segment.replace('.', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let upper = cleaned.to_uppercase();
    if regions::state_name_for_code(&upper).is_some() {
        return Some(upper);
    }
    regions::state_code_for_name(cleaned).map(str::to_string)
}

fn mentions_united_states(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    US_MARKERS
        .iter()
        .any(|marker| contains_whole_word(&lower, marker))
}

/// Whole-word containment over ASCII word boundaries, the moral
/// equivalent of the `\b...\b` pattern the markers were defined with
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut search_from = 0;
    while let Some(position) = haystack[search_from..].find(needle) {
        let begin = search_from + position;
        let end = begin + needle.len();
        let boundary_before = begin == 0 || !bytes[begin - 1].is_ascii_alphanumeric();
        let boundary_after = end == haystack.len() || !bytes[end].is_ascii_alphanumeric();
        if boundary_before && boundary_after {
            return true;
        }
        search_from = begin + 1;
    }
    false
}
