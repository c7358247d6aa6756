// Composition tests — verifying that modules chain together correctly.
//
// These tests exercise the data flow:
//   embedder -> TextComparer -> ranking pipeline -> JSON output
// without any network calls, model files, or filesystem side effects.

mod common;

use std::sync::Arc;

use common::{embed_text, StubEmbedder};
use semblance::comparer::TextComparer;
use semblance::embedding::vector::cosine_similarity;
use semblance::pipeline::rank::rank;

// ============================================================
// Chain: embedder -> comparer
// ============================================================

#[tokio::test]
async fn related_texts_outscore_unrelated() {
    let mut comparer = TextComparer::new("/tmp/semblance-nonexistent");
    comparer.register_model("stub", Arc::new(StubEmbedder::default()));
    comparer.load_model("stub").unwrap();

    let related = comparer
        .compare("weather forecast rain", "rain forecast today", None)
        .await
        .unwrap();
    let unrelated = comparer
        .compare("weather forecast rain", "zzz qqq jjj", None)
        .await
        .unwrap();

    assert!(
        related > unrelated,
        "Related pair ({related}) should outscore unrelated pair ({unrelated})"
    );
}

#[tokio::test]
async fn comparer_score_matches_raw_cosine() {
    // The comparer must add nothing on top of embed + cosine
    let mut comparer = TextComparer::new("/tmp/semblance-nonexistent");
    comparer.register_model("stub", Arc::new(StubEmbedder::default()));
    comparer.load_model("stub").unwrap();

    let source = "alpha beta gamma";
    let target = "beta gamma delta";

    let via_comparer = comparer.compare(source, target, None).await.unwrap();
    let direct = cosine_similarity(&embed_text(source), &embed_text(target));

    assert!(
        (via_comparer - direct).abs() < 1e-10,
        "Comparer score {via_comparer} should equal raw cosine {direct}"
    );
}

// ============================================================
// Chain: comparer -> ranking pipeline
// ============================================================

#[tokio::test]
async fn rank_scores_agree_with_compare() {
    let stub = Arc::new(StubEmbedder::default());
    let mut comparer = TextComparer::new("/tmp/semblance-nonexistent");
    comparer.register_model("stub", stub.clone());
    comparer.load_model("stub").unwrap();

    let source = "the cat sat on the mat";
    let targets = vec![
        "the cat sat on the mat".to_string(),
        "a dog ran in the park".to_string(),
        "cats sit on mats".to_string(),
    ];

    let matches = rank(stub.as_ref(), source, &targets, 2).await.unwrap();

    for m in &matches {
        let pairwise = comparer.compare(source, &m.text, None).await.unwrap();
        assert!(
            (m.score - pairwise).abs() < 1e-10,
            "rank and compare disagree for '{}': {} vs {}",
            m.text,
            m.score,
            pairwise
        );
    }
}

// ============================================================
// Chain: ranking pipeline -> JSON output
// ============================================================

#[tokio::test]
async fn ranked_matches_serialize_to_json() {
    let stub = StubEmbedder::default();
    let targets = vec!["one candidate".to_string(), "another one".to_string()];

    let matches = rank(&stub, "one candidate", &targets, 2).await.unwrap();
    let json = serde_json::to_string_pretty(&matches).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert!(array[0]["score"].as_f64().unwrap() >= array[1]["score"].as_f64().unwrap());
    assert!(array[0]["text"].is_string());
    assert!(array[0]["index"].is_u64());
}
