//! Tests for the listing search predicate.

use crate::model::job::matches_search;

use super::job;

/// Tests that an empty search term matches every posting.
#[test]
fn empty_term_matches_everything() {
    let posting = job(1, "Backend Engineer", "Pune", 40_000.0);

    assert!(matches_search(&posting, ""));
}

/// Tests matching against the title, ignoring case.
///
/// Expected: "engineer" matches "Backend Engineer"
#[test]
fn matches_title_case_insensitively() {
    let posting = job(1, "Backend Engineer", "Pune", 40_000.0);

    assert!(matches_search(&posting, "engineer"));
    assert!(matches_search(&posting, "BACKEND"));
}

/// Tests matching against the description.
#[test]
fn matches_description() {
    let mut posting = job(1, "Backend Engineer", "Pune", 40_000.0);
    posting.description = "Own our Kafka pipelines".to_string();

    assert!(matches_search(&posting, "kafka"));
}

/// Tests matching against the location.
#[test]
fn matches_location() {
    let posting = job(1, "Backend Engineer", "Remote, India", 40_000.0);

    assert!(matches_search(&posting, "india"));
}

/// Tests that a term absent from all three fields does not match.
#[test]
fn rejects_unrelated_term() {
    let posting = job(1, "Backend Engineer", "Pune", 40_000.0);

    assert!(!matches_search(&posting, "designer"));
}
