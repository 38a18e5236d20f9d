//! Country and US-state name normalization
//!
//! Canonicalizes country names for display labels and maps US states
//! between full names and two-letter codes for query parsing and
//! candidate scoring.

/// All 50 US states plus DC and the five inhabited territories,
/// `(code, full name)`
const US_STATES: [(&str, &str); 56] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("PR", "Puerto Rico"),
    ("GU", "Guam"),
    ("VI", "Virgin Islands"),
    ("MP", "Northern Mariana Islands"),
    ("AS", "American Samoa"),
];

/// Look up the full state name for a two-letter code, case-insensitive
#[must_use]
pub fn state_name_for_code(code: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Look up the two-letter code for a full state name, case-insensitive
#[must_use]
pub fn state_code_for_name(name: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(_, full)| full.eq_ignore_ascii_case(name))
        .map(|(abbr, _)| *abbr)
}

/// Strip one trailing parenthetical annotation, e.g.
/// "Country (region)" -> "Country". The parenthetical must close the
/// string and contain no nested closing paren.
#[must_use]
pub fn strip_parenthetical(raw: &str) -> &str {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_suffix(')')
        && let Some(open) = rest.rfind('(')
        && !rest[open + 1..].contains(')')
    {
        return trimmed[..open].trim_end();
    }
    trimmed
}

/// Canonicalize a country name for display: strip any trailing
/// parenthetical, trim, and rewrite known long-form names to short
/// colloquial forms. Unrecognized names pass through unchanged.
#[must_use]
pub fn normalize_country_name(raw: &str) -> String {
    let stripped = strip_parenthetical(raw);
    match stripped.to_lowercase().as_str() {
        "united states of america" => "USA".to_string(),
        "united kingdom of great britain and northern ireland" => "UK".to_string(),
        _ => stripped.to_string(),
    }
}
