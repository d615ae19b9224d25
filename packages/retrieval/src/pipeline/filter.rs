//! Constraint filtering and fallback selection.
//!
//! Filtering never widens a candidate set - its output is always a subset
//! of its input by identifier. Fallback selection is the only stage
//! permitted to substitute a broader set, and only when filtering left
//! nothing.

use crate::types::constraints::ParsedConstraints;
use crate::types::listing::Listing;

/// True if the listing satisfies every non-`None` constraint.
fn matches_constraints(listing: &Listing, constraints: &ParsedConstraints) -> bool {
    if let Some(city) = &constraints.city {
        if !listing.city.eq_ignore_ascii_case(city) {
            return false;
        }
    }

    if let Some(unit_type) = &constraints.unit_type {
        if !listing.unit_type.eq_ignore_ascii_case(unit_type) {
            return false;
        }
    }

    if let Some(budget) = constraints.budget {
        if listing.price > budget {
            return false;
        }
    }

    true
}

/// Apply extracted constraints to a candidate set.
///
/// Each non-`None` constraint is an independent AND predicate: city and
/// unit type compare case-insensitively, budget keeps listings priced at
/// or under the ceiling. `None` constraints are vacuously true. An empty
/// result is a valid, expected outcome, not a failure.
pub fn apply_constraints(candidates: &[Listing], constraints: &ParsedConstraints) -> Vec<Listing> {
    candidates
        .iter()
        .filter(|listing| matches_constraints(listing, constraints))
        .cloned()
        .collect()
}

/// Decide which candidate set goes downstream.
///
/// A non-empty filtered set wins. An empty one is replaced by the
/// pre-filter semantic set, unchanged, so the summarizer always has some
/// context and can word the imprecision ("nothing exact matched, but
/// here's what's close") instead of the caller receiving a hole.
pub fn select_final(filtered: Vec<Listing>, unfiltered: Vec<Listing>) -> Vec<Listing> {
    if filtered.is_empty() {
        unfiltered
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn listing(id: u64, city: &str, unit_type: &str, price: u64) -> Listing {
        Listing {
            id,
            project_name: format!("Project {}", id),
            city: city.to_string(),
            unit_type: unit_type.to_string(),
            price,
            status: "Ready to Move".to_string(),
            landmark: "Main Road".to_string(),
            full_address: format!("Main Road, {}", city),
            search_text: format!("{} flat in {}", unit_type, city),
        }
    }

    #[test]
    fn test_city_filter_case_insensitive() {
        let candidates = vec![listing(1, "Pune", "3BHK", 9_000_000), listing(2, "Mumbai", "3BHK", 8_000_000)];
        let constraints = ParsedConstraints::new().with_city("pune");

        let filtered = apply_constraints(&candidates, &constraints);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_budget_ceiling_is_inclusive() {
        let candidates = vec![listing(1, "Pune", "3BHK", 10_000_000), listing(2, "Pune", "3BHK", 10_000_001)];
        let constraints = ParsedConstraints::new().with_budget(10_000_000);

        let filtered = apply_constraints(&candidates, &constraints);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let candidates = vec![
            listing(1, "Pune", "3BHK", 9_000_000),
            listing(2, "Pune", "2BHK", 4_000_000),
            listing(3, "Mumbai", "3BHK", 8_000_000),
        ];
        let constraints = ParsedConstraints::new()
            .with_city("pune")
            .with_unit_type("3BHK")
            .with_budget(10_000_000);

        let filtered = apply_constraints(&candidates, &constraints);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_unconstrained_passes_everything() {
        let candidates = vec![listing(1, "Pune", "3BHK", 9_000_000), listing(2, "Delhi", "1BHK", 3_000_000)];
        let filtered = apply_constraints(&candidates, &ParsedConstraints::new());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let candidates = vec![listing(1, "Pune", "3BHK", 9_000_000)];
        let constraints = ParsedConstraints::new().with_city("delhi");
        assert!(apply_constraints(&candidates, &constraints).is_empty());
    }

    #[test]
    fn test_select_final_prefers_filtered() {
        let filtered = vec![listing(1, "Pune", "3BHK", 9_000_000)];
        let unfiltered = vec![listing(1, "Pune", "3BHK", 9_000_000), listing(2, "Delhi", "1BHK", 3_000_000)];

        let selected = select_final(filtered.clone(), unfiltered.clone());
        assert_eq!(selected, filtered);

        let selected = select_final(vec![], unfiltered.clone());
        assert_eq!(selected, unfiltered);
    }

    fn arb_listing() -> impl Strategy<Value = Listing> {
        (
            0u64..50,
            prop::sample::select(vec!["Pune", "Mumbai", "Delhi", "Hyderabad"]),
            prop::sample::select(vec!["1BHK", "2BHK", "3BHK", "4BHK"]),
            1_000_000u64..30_000_000,
        )
            .prop_map(|(id, city, unit_type, price)| listing(id, city, unit_type, price))
    }

    fn arb_constraints() -> impl Strategy<Value = ParsedConstraints> {
        (
            prop::option::of(prop::sample::select(vec!["pune", "mumbai", "delhi", "nagpur"])),
            prop::option::of(prop::sample::select(vec!["1BHK", "2BHK", "3BHK"])),
            prop::option::of(1_000_000u64..30_000_000),
        )
            .prop_map(|(city, unit_type, budget)| ParsedConstraints {
                city: city.map(String::from),
                unit_type: unit_type.map(String::from),
                budget,
            })
    }

    proptest! {
        #[test]
        fn filter_output_is_subset_by_identifier(
            candidates in prop::collection::vec(arb_listing(), 0..20),
            constraints in arb_constraints(),
        ) {
            let filtered = apply_constraints(&candidates, &constraints);

            prop_assert!(filtered.len() <= candidates.len());
            for listing in &filtered {
                prop_assert!(candidates.iter().any(|c| c.id == listing.id));
            }
        }

        #[test]
        fn filter_is_idempotent(
            candidates in prop::collection::vec(arb_listing(), 0..20),
            constraints in arb_constraints(),
        ) {
            let once = apply_constraints(&candidates, &constraints);
            let twice = apply_constraints(&once, &constraints);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn fallback_returns_unfiltered_exactly_when_filter_is_empty(
            candidates in prop::collection::vec(arb_listing(), 0..20),
            constraints in arb_constraints(),
        ) {
            let filtered = apply_constraints(&candidates, &constraints);
            let selected = select_final(filtered.clone(), candidates.clone());

            if filtered.is_empty() {
                prop_assert_eq!(selected, candidates);
            } else {
                prop_assert_eq!(selected, filtered);
            }
        }
    }
}
