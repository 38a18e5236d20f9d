//! Geocode candidate scoring and selection
//!
//! Ranks provider results by how well they overlap the disambiguation
//! tokens parsed from the user's query. A zero score is no evidence at
//! all, in which case the provider's own relevance ordering wins.

use crate::models::{GeocodeCandidate, LocationQuery, ScoredCandidate};
use crate::regions;
use std::collections::BTreeSet;

/// Points for an exact token match
const EXACT_MATCH_POINTS: i32 = 3;
/// Points for a substring match (partial/plural variants)
const PARTIAL_MATCH_POINTS: i32 = 1;
/// Bonus when the parsed US state matches the candidate's state
const STATE_MATCH_POINTS: i32 = 5;

/// Tokens seeded for US candidates, since providers often omit an
/// explicit country name for US results
const US_SYNONYMS: [&str; 5] = ["usa", "us", "america", "united states", "united states of america"];

/// Build the lowercase token set describing a candidate: every textual
/// field kept whole and split on whitespace, plus the derived state
/// code and US synonyms where applicable.
fn candidate_tokens(candidate: &GeocodeCandidate) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    let fields = [
        Some(candidate.name.as_str()),
        candidate.admin1.as_deref(),
        candidate.admin2.as_deref(),
        candidate.admin3.as_deref(),
        candidate.country.as_deref(),
        candidate.country_code.as_deref(),
    ];
    for value in fields.into_iter().flatten() {
        let lower = value.to_lowercase();
        if lower.is_empty() {
            continue;
        }
        for token in lower.split_whitespace() {
            tokens.insert(token.to_string());
        }
        tokens.insert(lower);
    }
    if let Some(code) = derived_state_code(candidate) {
        tokens.insert(code.to_lowercase());
    }
    if candidate
        .country_code
        .as_deref()
        .is_some_and(|code| code.eq_ignore_ascii_case("US"))
    {
        for synonym in US_SYNONYMS {
            tokens.insert(synonym.to_string());
        }
    }
    tokens
}

/// The candidate's US state code, when admin1 names a known state
fn derived_state_code(candidate: &GeocodeCandidate) -> Option<&'static str> {
    candidate
        .admin1
        .as_deref()
        .and_then(regions::state_code_for_name)
}

/// Score one candidate against the query's filter tokens; higher is
/// better
#[must_use]
pub fn score_candidate(
    candidate: &GeocodeCandidate,
    filter_tokens: &BTreeSet<String>,
    us_state_code: Option<&str>,
) -> i32 {
    let tokens = candidate_tokens(candidate);
    let mut score = 0;
    for filter in filter_tokens {
        if filter.is_empty() {
            continue;
        }
        if tokens.contains(filter) {
            score += EXACT_MATCH_POINTS;
        } else if tokens.iter().any(|token| token.contains(filter.as_str())) {
            score += PARTIAL_MATCH_POINTS;
        }
    }
    if let (Some(wanted), Some(derived)) = (us_state_code, derived_state_code(candidate))
        && derived.eq_ignore_ascii_case(wanted)
    {
        score += STATE_MATCH_POINTS;
    }
    score
}

/// Choose the final candidate for a query. The top score wins only when
/// it is strictly positive; a zero score means no filter evidence
/// supports overriding the provider's own relevance ranking, so the
/// provider's first result stands. Ties keep provider order.
#[must_use]
pub fn select_candidate(
    candidates: Vec<GeocodeCandidate>,
    query: &LocationQuery,
) -> Option<GeocodeCandidate> {
    if candidates.is_empty() {
        return None;
    }
    if query.filter_tokens.is_empty() {
        return candidates.into_iter().next();
    }
    let provider_top = candidates[0].clone();
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| ScoredCandidate {
            score: score_candidate(
                &candidate,
                &query.filter_tokens,
                query.us_state_code.as_deref(),
            ),
            candidate,
        })
        .collect();
    scored.sort_by_key(|entry| std::cmp::Reverse(entry.score));
    let best = scored.swap_remove(0);
    if best.score > 0 {
        Some(best.candidate)
    } else {
        Some(provider_top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn candidate(name: &str, admin1: Option<&str>, country_code: Option<&str>) -> GeocodeCandidate {
        GeocodeCandidate {
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            admin1: admin1.map(str::to_string),
            admin2: None,
            admin3: None,
            country: None,
            country_code: country_code.map(str::to_string),
        }
    }

    #[test]
    fn test_texas_outranks_illinois_for_tx_query() {
        let query = parse_query("Austin, TX").unwrap();
        let texan = candidate("Austin", Some("Texas"), Some("US"));
        let illinois = candidate("Austin", Some("Illinois"), None);

        let texan_score = score_candidate(&texan, &query.filter_tokens, query.us_state_code.as_deref());
        let illinois_score =
            score_candidate(&illinois, &query.filter_tokens, query.us_state_code.as_deref());

        // "tx" exact + "texas" exact + state bonus
        assert!(texan_score >= 11, "expected >= 11, got {texan_score}");
        assert_eq!(illinois_score, 0);
    }

    #[test]
    fn test_partial_match_scores_one_point() {
        let query = parse_query("Toronto, Ontari").unwrap();
        let hit = candidate("Toronto", Some("Ontario"), Some("CA"));
        // "ontari" is a substring of "ontario", not an exact token
        assert_eq!(
            score_candidate(&hit, &query.filter_tokens, None),
            PARTIAL_MATCH_POINTS
        );
    }

    #[test]
    fn test_us_candidates_match_country_synonyms() {
        let query = parse_query("Portland, USA").unwrap();
        let us_hit = candidate("Portland", Some("Oregon"), Some("US"));
        let other = candidate("Portland", None, Some("AU"));
        assert!(score_candidate(&us_hit, &query.filter_tokens, None) >= EXACT_MATCH_POINTS);
        assert_eq!(score_candidate(&other, &query.filter_tokens, None), 0);
    }

    #[test]
    fn test_selection_picks_best_scoring_candidate() {
        let query = parse_query("Springfield, IL").unwrap();
        let candidates = vec![
            candidate("Springfield", Some("Missouri"), Some("US")),
            candidate("Springfield", Some("Illinois"), Some("US")),
        ];
        let chosen = select_candidate(candidates, &query).unwrap();
        assert_eq!(chosen.admin1.as_deref(), Some("Illinois"));
    }

    #[test]
    fn test_zero_scores_keep_provider_order() {
        let query = parse_query("Springfield, Zzyzx").unwrap();
        let candidates = vec![
            candidate("Springfield", Some("Missouri"), None),
            candidate("Springfield", Some("Illinois"), None),
        ];
        let chosen = select_candidate(candidates, &query).unwrap();
        // No filter evidence: the provider's first result stands
        assert_eq!(chosen.admin1.as_deref(), Some("Missouri"));
    }

    #[test]
    fn test_no_filters_returns_provider_top() {
        let query = parse_query("Springfield").unwrap();
        let candidates = vec![
            candidate("Springfield", Some("Missouri"), None),
            candidate("Springfield", Some("Illinois"), None),
        ];
        let chosen = select_candidate(candidates, &query).unwrap();
        assert_eq!(chosen.admin1.as_deref(), Some("Missouri"));
    }

    #[test]
    fn test_empty_candidate_list() {
        let query = parse_query("Nowhere, KS").unwrap();
        assert_eq!(select_candidate(Vec::new(), &query), None);
    }
}
