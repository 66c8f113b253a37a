//! Integration tests for patient search over the seeded store

use ashraya::store::{RecordStore, SearchMode};

#[test]
fn test_empty_query_returns_all_patients() {
    let store = RecordStore::seeded();
    let hits = store.search_patients("", SearchMode::Name);
    assert_eq!(hits.len(), 5);
}

#[test]
fn test_name_search_is_case_insensitive() {
    let store = RecordStore::seeded();
    let hits = store.search_patients("kamala", SearchMode::Name);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Kamala Devi");
}

#[test]
fn test_age_search_exact_and_non_numeric() {
    let store = RecordStore::seeded();

    let hits = store.search_patients("78", SearchMode::Age);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].age, 78);

    // Non-numeric query is an empty result, not an error.
    let hits = store.search_patients("abc", SearchMode::Age);
    assert!(hits.is_empty());
}

#[test]
fn test_admission_date_threshold_is_inclusive() {
    let store = RecordStore::seeded();
    let hits = store.search_patients("2024-02-01", SearchMode::AdmittedOnOrAfter);
    let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();

    // Admitted 2024-01-10, before the threshold.
    assert!(!names.contains(&"Venkatesh Rao"));
    assert_eq!(names.len(), 4);
}

#[test]
fn test_death_date_search_only_matches_deceased() {
    let store = RecordStore::seeded();
    let hits = store.search_patients("2024-01-01", SearchMode::DiedOnOrAfter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Gopal Krishna");
}

#[test]
fn test_search_does_not_mutate_the_store() {
    let store = RecordStore::seeded();
    for _ in 0..3 {
        let _ = store.search_patients("kamala", SearchMode::Name);
        let _ = store.search_patients("abc", SearchMode::Age);
    }
    assert_eq!(store.patients().len(), 5);
    assert_eq!(store.health_records().len(), 2);
}
