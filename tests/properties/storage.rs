//! Property tests for the persistence codec.

use std::collections::BTreeMap;

use proptest::prelude::*;

use farmgate::species::Species;
use farmgate::state::{
    CalculatorInputs, CalculatorState, Comparison, ScenarioSnapshot,
};
use farmgate::storage::Storage;
use farmgate::SpeciesPreset;

fn text() -> impl Strategy<Value = String> {
    // Arbitrary field text, including separators and quotes.
    proptest::string::string_regex("[ -~]{0,24}").unwrap()
}

fn species_subset() -> impl Strategy<Value = Vec<Species>> {
    proptest::sample::subsequence(Species::ALL.to_vec(), 0..=Species::ALL.len())
}

fn volumes() -> impl Strategy<Value = BTreeMap<Species, String>> {
    proptest::collection::btree_map(
        proptest::sample::select(Species::ALL.to_vec()),
        text(),
        0..=Species::ALL.len(),
    )
}

fn inputs() -> impl Strategy<Value = CalculatorInputs> {
    (species_subset(), volumes(), text(), text()).prop_map(
        |(selected_species, volumes, time_per_animal, hourly_wage)| CalculatorInputs {
            selected_species,
            volumes,
            time_per_animal,
            hourly_wage,
        },
    )
}

fn snapshot_slot() -> impl Strategy<Value = Option<ScenarioSnapshot>> {
    proptest::option::of((inputs(), text()).prop_map(|(inputs, captured_at)| {
        ScenarioSnapshot {
            inputs,
            captured_at,
        }
    }))
}

fn preset() -> impl Strategy<Value = SpeciesPreset> {
    (text(), text(), species_subset(), volumes()).prop_map(|(id, label, species, volumes)| {
        SpeciesPreset {
            id,
            label,
            species,
            volumes,
        }
    })
}

fn well_formed_state() -> impl Strategy<Value = CalculatorState> {
    (
        inputs(),
        any::<bool>(),
        snapshot_slot(),
        snapshot_slot(),
        proptest::collection::vec(preset(), 0..3),
    )
        .prop_map(|(inputs, show_advanced, a, b, custom_presets)| CalculatorState {
            selected_species: inputs.selected_species,
            volumes: inputs.volumes,
            time_per_animal: inputs.time_per_animal,
            hourly_wage: inputs.hourly_wage,
            show_advanced,
            comparison: Comparison { a, b },
            custom_presets,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any well-formed state survives a save/load round trip.
    #[test]
    fn property_save_load_round_trips(state in well_formed_state()) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("state.json"));

        storage.save(&state).unwrap();
        prop_assert_eq!(storage.load(), Some(state));
    }

    /// PROPERTY: loading arbitrary bytes never panics and never errors -
    /// it either produces a state or falls back to nothing.
    #[test]
    fn property_load_is_total_over_garbage(content in ".{0,256}") {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("state.json"));
        std::fs::write(storage.path(), &content).unwrap();

        let _ = storage.load();
    }

    /// PROPERTY: a record with any version other than the current one is
    /// ignored entirely.
    #[test]
    fn property_foreign_versions_are_discarded(
        state in well_formed_state(),
        version in 0_u32..1000,
    ) {
        prop_assume!(version != farmgate::storage::STORAGE_VERSION);

        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("state.json"));
        let payload = serde_json::json!({
            "version": version,
            "state": serde_json::to_value(&state).unwrap(),
        });
        std::fs::write(storage.path(), payload.to_string()).unwrap();

        prop_assert_eq!(storage.load(), None);
    }
}
