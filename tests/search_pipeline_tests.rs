//! Pipeline-level tests for the catalog -> search -> merge flow.

use std::collections::BTreeSet;

use huepick::catalog::{Category, ColorDb, ColorFilter};
use huepick::clipboard::{copy_text, CopyFormat};
use huepick::search::{ColorSearcher, SCORE_CUTOFF};

fn db() -> ColorDb {
    ColorDb::load().expect("Failed to load color database")
}

#[test]
fn test_all_match_scores_below_cutoff() {
    let db = db();
    let searcher = ColorSearcher::new();
    for query in ["red", "gray", "aqua", "00ff00", "rgb(0", "dark", "light"] {
        for m in searcher.search(query, &db.select(ColorFilter::All)) {
            assert!(
                m.score < SCORE_CUTOFF,
                "query '{}' produced score {} for '{}'",
                query,
                m.score,
                m.record.name
            );
        }
    }
}

#[test]
fn test_result_invariants() {
    let db = db();
    let searcher = ColorSearcher::new();
    for query in ["gray", "blue", "medium", "ff"] {
        let results = searcher.run(query, &db.select(ColorFilter::All));
        let mut seen_names = BTreeSet::new();
        for result in &results {
            assert!(!result.categories.is_empty(), "empty categories");
            assert!(result
                .categories
                .iter()
                .all(|c| matches!(c, Category::Basic | Category::Extended)));
            assert!(
                seen_names.insert(result.name.clone()),
                "duplicate name '{}' for query '{}'",
                result.name,
                query
            );
        }
    }
}

#[test]
fn test_idempotent_queries() {
    let db = db();
    let searcher = ColorSearcher::new();
    let records = db.select(ColorFilter::All);
    for query in ["", "gray", "rebecca", "zzzz"] {
        assert_eq!(
            searcher.run(query, &records),
            searcher.run(query, &records),
            "query '{query}' not idempotent"
        );
    }
}

#[test]
fn test_empty_query_lists_scope_in_order() {
    let db = db();
    let searcher = ColorSearcher::new();
    for filter in [ColorFilter::All, ColorFilter::Basic, ColorFilter::Extended] {
        let records = db.select(filter);
        let results = searcher.run("", &records);
        assert_eq!(results.len(), records.len());
        for (result, record) in results.iter().zip(&records) {
            assert_eq!(result.name, record.name);
            assert_eq!(result.hex, record.hex);
            assert_eq!(result.categories, BTreeSet::from([record.category]));
        }
    }
}

#[test]
fn test_gray_merges_across_categories() {
    let db = db();
    let searcher = ColorSearcher::new();
    let results = searcher.run("gray", &db.select(ColorFilter::All));
    let grays: Vec<_> = results.iter().filter(|c| c.name == "gray").collect();
    assert_eq!(grays.len(), 1);
    assert_eq!(
        grays[0].categories,
        BTreeSet::from([Category::Basic, Category::Extended])
    );
}

#[test]
fn test_basic_scope_excludes_extended_only_matches() {
    let db = db();
    let searcher = ColorSearcher::new();
    let results = searcher.run("rebeccapurple", &db.select(ColorFilter::Basic));
    assert!(results.is_empty());
    // The same query matches in the extended scope
    let results = searcher.run("rebeccapurple", &db.select(ColorFilter::Extended));
    assert!(results.iter().any(|c| c.name == "rebeccapurple"));
}

#[test]
fn test_copy_text_exactness() {
    let db = db();
    let searcher = ColorSearcher::new();
    let results = searcher.run("red", &db.select(ColorFilter::Basic));
    let red = results
        .iter()
        .find(|c| c.name == "red")
        .expect("red should match");
    assert_eq!(copy_text(red, CopyFormat::Hex), "#FF0000");
    assert_eq!(copy_text(red, CopyFormat::Rgb), "rgb(255, 0, 0)");
    assert_eq!(copy_text(red, CopyFormat::Name), "red");
}

#[test]
fn test_best_match_first() {
    let db = db();
    let searcher = ColorSearcher::new();
    let results = searcher.run("navy", &db.select(ColorFilter::All));
    assert_eq!(results[0].name, "navy");
}
