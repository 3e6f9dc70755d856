//! Tests for the drug interaction checker

use pharmcalc::lookup::{check_interactions, InteractionTable, LookupError};

use super::common::{write_table, INTERACTIONS_JSON};

#[test]
fn test_single_interaction() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    let found = check_interactions(&["drug_a", "drug_b"], &path).unwrap();
    assert_eq!(
        found,
        vec!["Interaction between drug_a and drug_b: Increased risk of toxicity"]
    );
}

#[test]
fn test_order_does_not_matter() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    let forward = check_interactions(&["drug_a", "drug_b"], &path).unwrap();
    let reverse = check_interactions(&["drug_b", "drug_a"], &path).unwrap();

    assert_eq!(forward.len(), 1);
    assert_eq!(reverse.len(), 1);
    assert!(reverse[0].contains("drug_b") && reverse[0].contains("drug_a"));
    assert!(reverse[0].ends_with("Increased risk of toxicity"));
}

#[test]
fn test_original_case_is_reported() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    let found = check_interactions(&["Warfarin", "Aspirin"], &path).unwrap();
    assert_eq!(
        found,
        vec!["Interaction between Warfarin and Aspirin: Increased risk of bleeding"]
    );
}

#[test]
fn test_padded_names_match_trimmed_keys() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    let found = check_interactions(&[" warfarin", "aspirin "], &path).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("Increased risk of bleeding"));
}

#[test]
fn test_single_drug_has_no_interactions() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    assert!(check_interactions(&["drug_a"], &path).unwrap().is_empty());
}

#[test]
fn test_duplicate_entries_do_not_self_pair() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    assert!(check_interactions(&["drug_a", "drug_a"], &path)
        .unwrap()
        .is_empty());
}

#[test]
fn test_multiple_interactions_in_scan_order() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);

    let drugs = vec![
        "drug_b".to_string(),
        "warfarin".to_string(),
        "drug_a".to_string(),
        "aspirin".to_string(),
    ];
    let found = check_interactions(&drugs, &path).unwrap();

    assert_eq!(
        found,
        vec![
            "Interaction between drug_b and drug_a: Increased risk of toxicity",
            "Interaction between warfarin and aspirin: Increased risk of bleeding",
        ]
    );
}

#[test]
fn test_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drug_interactions.json");

    let err = check_interactions(&["drug_a", "drug_b"], &path).unwrap_err();
    assert!(matches!(err, LookupError::MissingDatabase { .. }));
}

#[test]
fn test_malformed_key() {
    let (_dir, path) = write_table("drug_interactions.json", r#"{ "drug_a": "lonely" }"#);

    let err = InteractionTable::from_path(&path).unwrap_err();
    assert!(matches!(err, LookupError::InvalidPairKey { ref key } if key == "drug_a"));
}

#[test]
fn test_repeated_calls_are_identical() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);
    let drugs = ["aspirin", "drug_a", "warfarin", "drug_b"];

    let first = check_interactions(&drugs, &path).unwrap();
    let second = check_interactions(&drugs, &path).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn test_loaded_table_matches_per_call_check() {
    let (_dir, path) = write_table("drug_interactions.json", INTERACTIONS_JSON);
    let table = InteractionTable::from_path(&path).unwrap();
    let drugs = ["warfarin", "aspirin"];

    assert_eq!(table.check(&drugs), check_interactions(&drugs, &path).unwrap());
    assert!(table.get("ASPIRIN", "warfarin").is_some());
    assert!(table.get("aspirin", "drug_a").is_none());
}
