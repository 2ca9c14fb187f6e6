//! Persisted records that fail the version gate or shape checks are
//! discarded wholesale in favor of defaults - never partially recovered,
//! never surfaced as an error.

mod common;

use common::TestEnv;
use farmgate::storage::STORAGE_VERSION;

fn well_formed_state() -> serde_json::Value {
    serde_json::json!({
        "selectedSpecies": ["beef"],
        "volumes": { "beef": "1000" },
        "timePerAnimal": "45",
        "hourlyWage": "25",
        "showAdvanced": false,
        "comparison": { "A": null, "B": null },
        "customPresets": []
    })
}

#[test]
fn version_mismatch_discards_the_record() {
    let env = TestEnv::new();
    let old = serde_json::json!({ "version": 1, "state": well_formed_state() });
    env.write_state_raw(&old.to_string());

    let result = env.run(&["show", "--json"]);
    assert!(result.success, "stale records must not fail the command");

    let projection: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(
        projection["rows"].as_array().unwrap().len(),
        0,
        "v1 record must be ignored, not migrated"
    );
}

#[test]
fn corrupt_json_falls_back_to_defaults() {
    let env = TestEnv::new();
    env.write_state_raw("{definitely not json");

    let result = env.run(&["show", "--json"]);
    assert!(result.success);

    let projection: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(projection["rows"].as_array().unwrap().len(), 0);
}

#[test]
fn wrong_typed_scalar_discards_everything() {
    let env = TestEnv::new();
    let mut state = well_formed_state();
    state["timePerAnimal"] = serde_json::json!(45);
    let payload = serde_json::json!({ "version": STORAGE_VERSION, "state": state });
    env.write_state_raw(&payload.to_string());

    let projection = env.run_json(&["show"]);
    // The valid species list is NOT salvaged: whole-record discard.
    assert_eq!(projection["rows"].as_array().unwrap().len(), 0);
}

#[test]
fn unknown_species_entries_are_filtered_not_fatal() {
    let env = TestEnv::new();
    let mut state = well_formed_state();
    state["selectedSpecies"] = serde_json::json!(["beef", "unicorn"]);
    state["volumes"] = serde_json::json!({ "beef": "1000", "unicorn": "7" });
    let payload = serde_json::json!({ "version": STORAGE_VERSION, "state": state });
    env.write_state_raw(&payload.to_string());

    let projection = env.run_json(&["show"]);
    let rows = projection["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["species"], "beef");
    assert_eq!(projection["totals"]["annualVolume"], 1000.0);
}

#[test]
fn a_valid_record_is_loaded_as_is() {
    let env = TestEnv::new();
    let payload = serde_json::json!({
        "version": STORAGE_VERSION,
        "state": well_formed_state()
    });
    env.write_state_raw(&payload.to_string());

    let projection = env.run_json(&["show"]);
    assert_eq!(projection["rows"].as_array().unwrap().len(), 1);
    assert_eq!(projection["totals"]["annualCost"], 20.0);
}
