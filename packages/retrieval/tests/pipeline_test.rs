//! End-to-end pipeline tests with mock collaborators.

use std::sync::Arc;

use retrieval::testing::{MockRecall, MockSummarizer};
use retrieval::{Catalog, EngineConfig, Listing, QueryEngine, RetrievalError};

fn listing(id: u64, project: &str, city: &str, unit_type: &str, price: u64) -> Listing {
    Listing {
        id,
        project_name: project.to_string(),
        city: city.to_string(),
        unit_type: unit_type.to_string(),
        price,
        status: "Ready to Move".to_string(),
        landmark: "Central".to_string(),
        full_address: format!("Central, {}", city),
        search_text: format!("{} {} in {} priced {}", project, unit_type, city, price),
    }
}

fn engine_with(
    catalog: Vec<Listing>,
    recall: MockRecall,
    summarizer: MockSummarizer,
) -> QueryEngine {
    QueryEngine::new(
        Arc::new(Catalog::from_listings(catalog)),
        Arc::new(recall),
        Arc::new(summarizer),
    )
}

#[tokio::test]
async fn constrained_query_keeps_only_matching_city() {
    // Catalog: a Pune 3BHK at 90L and a Mumbai 3BHK at 80L. Both are
    // semantically relevant; only the Pune one survives the filter.
    let pune = listing(1, "Kalpataru", "Pune", "3BHK", 9_000_000);
    let mumbai = listing(2, "Lodha", "Mumbai", "3BHK", 8_000_000);

    let recall = MockRecall::new().with_response(
        "3BHK in Pune under 1 Cr",
        [pune.search_text.clone(), mumbai.search_text.clone()],
    );

    let engine = engine_with(vec![pune, mumbai], recall, MockSummarizer::new());
    let answer = engine.answer("3BHK in Pune under 1 Cr").await.unwrap();

    assert_eq!(answer.results.len(), 1);
    assert_eq!(answer.results[0].id, 1);
    assert_eq!(answer.results[0].city, "Pune");
}

#[tokio::test]
async fn unsupported_city_falls_back_to_semantic_set() {
    // Nagpur is outside the recognized-city list, so only unit type and
    // budget apply. Nothing satisfies 2BHK under 50 lakh, so the whole
    // semantic set comes back as the fallback.
    let a = listing(1, "Godrej", "Pune", "3BHK", 9_000_000);
    let b = listing(2, "Prestige", "Hyderabad", "2BHK", 7_000_000);

    let recall = MockRecall::new().with_response(
        "2BHK in Nagpur under 50 lakh",
        [a.search_text.clone(), b.search_text.clone()],
    );

    let engine = engine_with(vec![a, b], recall, MockSummarizer::new());
    let answer = engine.answer("2BHK in Nagpur under 50 lakh").await.unwrap();

    let ids: Vec<u64> = answer.results.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn empty_recall_still_summarizes() {
    let summarizer = Arc::new(MockSummarizer::new());
    let engine = QueryEngine::new(
        Arc::new(Catalog::from_listings(vec![listing(
            1, "Godrej", "Pune", "3BHK", 9_000_000,
        )])),
        Arc::new(MockRecall::new()),
        summarizer.clone(),
    );

    let answer = engine.answer("castles in the sky").await.unwrap();

    assert!(answer.results.is_empty());
    assert!(answer.summary.contains("No matching"));

    // The summarizer was invoked with the empty set, not skipped
    let calls = summarizer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].listing_count, 0);
}

#[tokio::test]
async fn summarizer_receives_final_set_not_raw_recall() {
    let pune = listing(1, "Kalpataru", "Pune", "3BHK", 9_000_000);
    let delhi = listing(2, "DLF", "Delhi", "1BHK", 3_000_000);

    let recall = MockRecall::new().with_response(
        "3BHK in Pune",
        [pune.search_text.clone(), delhi.search_text.clone()],
    );
    let summarizer = Arc::new(MockSummarizer::new());
    let engine = QueryEngine::new(
        Arc::new(Catalog::from_listings(vec![pune, delhi])),
        Arc::new(recall),
        summarizer.clone(),
    );

    engine.answer("3BHK in Pune").await.unwrap();

    // Two snippets recalled, one listing after filtering
    let calls = summarizer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].listing_count, 1);
}

#[tokio::test]
async fn recall_overshoot_is_configurable_and_results_are_capped() {
    let listings: Vec<Listing> = (0..20)
        .map(|i| listing(i, "Tower", "Pune", "2BHK", 4_000_000 + i))
        .collect();
    let snippets: Vec<String> = listings.iter().map(|l| l.search_text.clone()).collect();

    let recall = MockRecall::new().with_response("2BHK in Pune", snippets);
    let engine = engine_with(listings, recall, MockSummarizer::new())
        .with_config(EngineConfig::new().with_recall_limit(10).with_recall_margin(5));

    let answer = engine.answer("2BHK in Pune").await.unwrap();

    // 15 requested, at most 10 consumed downstream
    assert_eq!(answer.results.len(), 10);
}

#[tokio::test]
async fn recall_request_size_reaches_the_service() {
    let recall = Arc::new(MockRecall::new());
    let engine = QueryEngine::new(
        Arc::new(Catalog::from_listings(vec![])),
        recall.clone(),
        Arc::new(MockSummarizer::new()),
    );

    engine.answer("anything").await.unwrap();

    // Default config: limit 10 + margin 5
    let calls = recall.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].k, 15);
}

#[tokio::test]
async fn recall_failure_propagates_unmodified() {
    let engine = engine_with(
        vec![listing(1, "Godrej", "Pune", "3BHK", 9_000_000)],
        MockRecall::new().failing(),
        MockSummarizer::new(),
    );

    let err = engine.answer("3BHK in Pune").await.unwrap_err();
    assert!(matches!(err, RetrievalError::Recall(_)));
    assert!(err.is_collaborator());
}

#[tokio::test]
async fn summarizer_failure_propagates_unmodified() {
    let l = listing(1, "Godrej", "Pune", "3BHK", 9_000_000);
    let recall = MockRecall::new().with_response("3BHK in Pune", [l.search_text.clone()]);

    let engine = engine_with(vec![l], recall, MockSummarizer::new().failing());

    let err = engine.answer("3BHK in Pune").await.unwrap_err();
    assert!(matches!(err, RetrievalError::Summarize(_)));
}

#[tokio::test]
async fn malformed_query_runs_unconstrained() {
    let a = listing(1, "Godrej", "Pune", "3BHK", 9_000_000);
    let b = listing(2, "DLF", "Delhi", "1BHK", 3_000_000);

    let recall = MockRecall::new()
        .with_response("!!!", [a.search_text.clone(), b.search_text.clone()]);
    let engine = engine_with(vec![a, b], recall, MockSummarizer::new());

    // No extractable fields: every semantic candidate passes through
    let answer = engine.answer("!!!").await.unwrap();
    assert_eq!(answer.results.len(), 2);
}

#[tokio::test]
async fn concurrent_queries_share_the_engine() {
    let a = listing(1, "Godrej", "Pune", "3BHK", 9_000_000);
    let b = listing(2, "Lodha", "Mumbai", "2BHK", 6_000_000);

    let recall = MockRecall::new()
        .with_response("3BHK in Pune", [a.search_text.clone()])
        .with_response("2BHK in Mumbai", [b.search_text.clone()]);

    let engine = Arc::new(engine_with(vec![a, b], recall, MockSummarizer::new()));

    let (first, second) = tokio::join!(
        {
            let engine = engine.clone();
            async move { engine.answer("3BHK in Pune").await }
        },
        {
            let engine = engine.clone();
            async move { engine.answer("2BHK in Mumbai").await }
        },
    );

    assert_eq!(first.unwrap().results[0].city, "Pune");
    assert_eq!(second.unwrap().results[0].city, "Mumbai");
}
