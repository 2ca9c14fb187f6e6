//! Preset catalog - named species/volume bundles applied atomically

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::species::Species;
use crate::state::CalculatorState;

/// A named bundle of species and volumes.
///
/// Applying one replaces the current selection and volumes wholesale.
/// Custom presets are addressed by id with replace-on-conflict semantics;
/// two presets are never deduplicated by label or content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesPreset {
    pub id: String,
    pub label: String,
    pub species: Vec<Species>,
    pub volumes: BTreeMap<Species, String>,
}

impl SpeciesPreset {
    fn new(id: &str, label: &str, entries: &[(Species, &str)]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            species: entries.iter().map(|(s, _)| *s).collect(),
            volumes: entries
                .iter()
                .map(|(s, v)| (*s, (*v).to_string()))
                .collect(),
        }
    }
}

/// The built-in catalog. Fixed at compile time, never mutated.
pub fn builtin_presets() -> Vec<SpeciesPreset> {
    vec![
        SpeciesPreset::new("beef-focus", "Beef Focus", &[(Species::Beef, "50000")]),
        SpeciesPreset::new(
            "mixed-red-meat",
            "Mixed Red Meat",
            &[
                (Species::Beef, "30000"),
                (Species::Hog, "10000"),
                (Species::Lamb, "2500"),
            ],
        ),
        SpeciesPreset::new(
            "small-ruminants",
            "Small Ruminants",
            &[(Species::Lamb, "5000"), (Species::Goat, "2000")],
        ),
        SpeciesPreset::new(
            "game-exotics",
            "Game & Exotics",
            &[
                (Species::Bison, "12000"),
                (Species::Venison, "4000"),
                (Species::Yak, "6000"),
            ],
        ),
    ]
}

/// Look up a preset by id across the built-in catalog and the state's
/// custom presets. Built-ins win on an id collision.
pub fn find_preset(state: &CalculatorState, id: &str) -> Option<SpeciesPreset> {
    builtin_presets()
        .into_iter()
        .find(|p| p.id == id)
        .or_else(|| state.custom_presets.iter().find(|p| p.id == id).cloned())
}
