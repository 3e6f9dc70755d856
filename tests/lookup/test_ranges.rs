//! Tests for the therapeutic range checker

use pharmcalc::lookup::{is_within_therapeutic_range, LookupError, TherapeuticRanges};

use super::common::{write_table, RANGES_JSON};

#[test]
fn test_within_and_outside_range() {
    let (_dir, path) = write_table("therapeutic_ranges.json", RANGES_JSON);

    assert!(is_within_therapeutic_range(10.0, "drug_a", &path).unwrap());
    assert!(!is_within_therapeutic_range(20.0, "drug_a", &path).unwrap());
}

#[test]
fn test_case_insensitive() {
    let (_dir, path) = write_table("therapeutic_ranges.json", RANGES_JSON);

    assert!(is_within_therapeutic_range(10.0, "Drug_A", &path).unwrap());
    assert!(is_within_therapeutic_range(15.0, "VANCOMYCIN", &path).unwrap());
}

#[test]
fn test_unknown_drug() {
    let (_dir, path) = write_table("therapeutic_ranges.json", RANGES_JSON);

    let err = is_within_therapeutic_range(10.0, "Drug_Z", &path).unwrap_err();
    assert!(matches!(err, LookupError::UnknownDrug { ref drug } if drug == "Drug_Z"));
    assert_eq!(
        err.to_string(),
        "Therapeutic range for drug 'Drug_Z' not found in database"
    );
}

#[test]
fn test_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("therapeutic_ranges.json");

    let err = is_within_therapeutic_range(10.0, "drug_a", &path).unwrap_err();
    assert!(matches!(err, LookupError::MissingDatabase { .. }));
    assert!(err.to_string().ends_with("therapeutic_ranges.json' not found"));
}

#[test]
fn test_malformed_file() {
    let (_dir, path) = write_table("therapeutic_ranges.json", r#"{ "drug_a": "5-15" }"#);

    let err = is_within_therapeutic_range(10.0, "drug_a", &path).unwrap_err();
    assert!(matches!(err, LookupError::Parse { .. }));
}

#[test]
fn test_inverted_range_in_file() {
    let (_dir, path) = write_table("therapeutic_ranges.json", r#"{ "drug_a": [15.0, 5.0] }"#);

    let err = TherapeuticRanges::from_path(&path).unwrap_err();
    assert!(matches!(err, LookupError::InvalidRange { low, high, .. } if low == 15.0 && high == 5.0));
}

#[test]
fn test_names_differing_in_case_fail_the_load() {
    let (_dir, path) = write_table(
        "therapeutic_ranges.json",
        r#"{ "Drug_A": [0.0, 1.0], "drug_a": [5.0, 15.0] }"#,
    );

    // Every call fails the same way instead of picking one of the entries
    for _ in 0..50 {
        let err = is_within_therapeutic_range(10.0, "drug_a", &path).unwrap_err();
        assert!(matches!(err, LookupError::DuplicateDrug { ref drug } if drug == "drug_a"));
    }
}

#[test]
fn test_every_loaded_range_is_ordered() {
    let (_dir, path) = write_table("therapeutic_ranges.json", RANGES_JSON);
    let ranges = TherapeuticRanges::from_path(&path).unwrap();

    assert_eq!(ranges.len(), 2);
    assert!(ranges.iter().all(|(_, r)| r.low() <= r.high()));
}

#[test]
fn test_repeated_calls_are_identical() {
    let (_dir, path) = write_table("therapeutic_ranges.json", RANGES_JSON);

    let first: Vec<bool> = [4.0, 10.0, 16.0]
        .iter()
        .map(|&c| is_within_therapeutic_range(c, "drug_a", &path).unwrap())
        .collect();
    let second: Vec<bool> = [4.0, 10.0, 16.0]
        .iter()
        .map(|&c| is_within_therapeutic_range(c, "drug_a", &path).unwrap())
        .collect();

    assert_eq!(first, vec![false, true, false]);
    assert_eq!(first, second);
}

#[test]
fn test_file_is_reread_on_every_call() {
    let (_dir, path) = write_table("therapeutic_ranges.json", RANGES_JSON);
    assert!(!is_within_therapeutic_range(20.0, "drug_a", &path).unwrap());

    std::fs::write(&path, r#"{ "drug_a": [5.0, 25.0] }"#).unwrap();
    assert!(is_within_therapeutic_range(20.0, "drug_a", &path).unwrap());
}
