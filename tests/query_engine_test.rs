//! Integration tests for the query engine
//!
//! Covers the search, category-filter and sort contracts over the
//! sample catalog, the fixed composition order, and the identity and
//! stability properties.

mod fixtures;

use campus_connect::models::{CategoryFilter, EventCategory, SortKey};
use campus_connect::query::{self, QueryParams};
use fixtures::{sample_events, TestEventBuilder};

#[test]
fn test_search_basketball_finds_the_tournament() {
    let catalog = sample_events();
    let results = query::search(&catalog, "basketball");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Campus Basketball Tournament");
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = sample_events();
    assert_eq!(query::search(&catalog, "BASKETBALL"), query::search(&catalog, "basketball"));
}

#[test]
fn test_tech_filter_then_popularity_sort() {
    let catalog = sample_events();
    let tech = query::filter_by_category(&catalog, CategoryFilter::Only(EventCategory::Tech));
    let sorted = query::sort_events(&tech, SortKey::Popularity);

    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted[0].id, "1");
}

#[test]
fn test_pipeline_composition_order() {
    // A search term that only matches one Sports event; filtering by
    // another category afterwards must leave nothing.
    let catalog = sample_events();
    let params = QueryParams {
        search_text: "basketball".to_string(),
        category: CategoryFilter::Only(EventCategory::Tech),
        sort_key: SortKey::Date,
    };

    assert!(query::apply(&catalog, &params).is_empty());
}

#[test]
fn test_neutral_parameters_lose_no_events() {
    let catalog = sample_events();
    for key in [SortKey::Date, SortKey::Popularity, SortKey::Newest] {
        let params = QueryParams {
            search_text: String::new(),
            category: CategoryFilter::All,
            sort_key: key,
        };
        let result = query::apply(&catalog, &params);

        assert_eq!(result.len(), catalog.len());
        let mut ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }
}

#[test]
fn test_date_sort_breaks_ties_by_input_order() {
    let events = vec![
        TestEventBuilder::new("a", "First").date(2024, 5, 1).build(),
        TestEventBuilder::new("b", "Second").date(2024, 4, 1).build(),
        TestEventBuilder::new("c", "Third").date(2024, 5, 1).build(),
    ];

    let sorted = query::sort_events(&events, SortKey::Date);
    let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_popularity_sort_is_descending() {
    let events = vec![
        TestEventBuilder::new("a", "Quiet").participants(3, 100).build(),
        TestEventBuilder::new("b", "Busy").participants(80, 100).build(),
        TestEventBuilder::new("c", "Medium").participants(40, 100).build(),
    ];

    let sorted = query::sort_events(&events, SortKey::Popularity);
    let ids: Vec<&str> = sorted.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn test_search_matches_tags() {
    let events = vec![
        TestEventBuilder::new("a", "Plain").tags(&["Robotics"]).build(),
        TestEventBuilder::new("b", "Other").tags(&["Chess"]).build(),
    ];

    let results = query::search(&events, "robot");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_events() -> impl Strategy<Value = Vec<campus_connect::models::Event>> {
        prop::collection::vec(("[a-z]{0,12}", 0u32..500), 0..20).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (title, popularity))| {
                    TestEventBuilder::new(&format!("id-{}", i), &title)
                        .participants(popularity, 500)
                        .build()
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn empty_search_is_identity(events in arb_events()) {
            prop_assert_eq!(query::search(&events, ""), events);
        }

        #[test]
        fn all_filter_is_identity(events in arb_events()) {
            prop_assert_eq!(query::filter_by_category(&events, CategoryFilter::All), events);
        }

        #[test]
        fn popularity_sort_is_ordered_and_lossless(events in arb_events()) {
            let sorted = query::sort_events(&events, SortKey::Popularity);
            prop_assert_eq!(sorted.len(), events.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].current_participants >= pair[1].current_participants);
            }
        }

        #[test]
        fn search_results_are_a_subsequence(events in arb_events(), needle in "[a-z]{1,4}") {
            let results = query::search(&events, &needle);
            let mut remaining = events.iter();
            for found in &results {
                prop_assert!(remaining.any(|e| e == found));
            }
        }
    }
}
