//! Structured-field extraction from free-text queries.
//!
//! A small deterministic grammar, not open-vocabulary NER: an enumerated
//! city list, one digit-plus-BHK pattern, and one budget pattern with a
//! fixed unit table. Extraction is best-effort and pure - any unmatched
//! field is simply `None`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::constraints::ParsedConstraints;

/// Cities the extractor recognizes. Tokens outside this list (e.g.
/// "nagpur") produce no city constraint rather than an error.
pub const SUPPORTED_CITIES: &[&str] = &[
    "pune",
    "mumbai",
    "bangalore",
    "bengaluru",
    "hyderabad",
    "delhi",
];

lazy_static! {
    static ref CITY_REGEX: Regex = {
        let pattern = format!("({})", SUPPORTED_CITIES.join("|"));
        Regex::new(&pattern).unwrap()
    };

    // "<digit> optional-space bhk", e.g. "3bhk", "3 bhk"
    static ref UNIT_TYPE_REGEX: Regex = Regex::new(r"(\d\s?bhk)").unwrap();

    // "under [₹] <number> [unit]". The unit group stays optional so a
    // bare number still matches - the unit table then rejects it.
    static ref BUDGET_REGEX: Regex =
        Regex::new(r"under\s?₹?([\d.]+)\s?(cr|crore|lakh|lac|l)?").unwrap();
}

/// Rupee multiplier for a recognized budget unit.
fn unit_multiplier(unit: &str) -> Option<u64> {
    match unit {
        "cr" | "crore" => Some(10_000_000),
        "lakh" | "lac" | "l" => Some(100_000),
        _ => None,
    }
}

/// Parse free text into structured constraints.
///
/// Pure and deterministic: identical input text always yields identical
/// constraints. Matching is case-insensitive (the query is lowercased
/// first); first match wins for every field.
///
/// A number without a recognized unit is not treated as a budget, so
/// unrelated digits ("flat number 75") never become a price ceiling.
pub fn parse_query(query: &str) -> ParsedConstraints {
    let q = query.to_lowercase();

    let city = CITY_REGEX.captures(&q).map(|caps| caps[1].to_string());

    let unit_type = UNIT_TYPE_REGEX
        .captures(&q)
        .map(|caps| caps[1].replace(' ', "").to_uppercase());

    let budget = BUDGET_REGEX.captures(&q).and_then(|caps| {
        let unit = caps.get(2)?.as_str();
        let multiplier = unit_multiplier(unit)?;
        let value: f64 = caps[1].parse().ok()?;
        Some((value * multiplier as f64).round() as u64)
    });

    ParsedConstraints {
        city,
        unit_type,
        budget,
    }
}
