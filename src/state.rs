//! Calculator state and the action set that mutates it
//!
//! `CalculatorState` is the single source of truth; every mutation goes
//! through the pure `reduce` transition. Inputs and projections are
//! derivations of this value, never stored alongside it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HOURLY_WAGE, DEFAULT_TIME_PER_ANIMAL_MINUTES};
use crate::presets::SpeciesPreset;
use crate::species::Species;

/// The raw input fields a projection is computed from.
///
/// Volumes, time, and wage stay in their raw string form; parsing and
/// bounds-checking happen downstream in validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub selected_species: Vec<Species>,
    pub volumes: BTreeMap<Species, String>,
    pub time_per_animal: String,
    pub hourly_wage: String,
}

/// A captured copy of the inputs for side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSnapshot {
    pub inputs: CalculatorInputs,
    pub captured_at: String,
}

/// The two named comparison slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioSlot {
    A,
    B,
}

impl std::fmt::Display for ScenarioSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioSlot::A => write!(f, "A"),
            ScenarioSlot::B => write!(f, "B"),
        }
    }
}

/// Both scenario slots, each independently nullable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(rename = "A")]
    pub a: Option<ScenarioSnapshot>,
    #[serde(rename = "B")]
    pub b: Option<ScenarioSnapshot>,
}

impl Comparison {
    pub fn slot(&self, slot: ScenarioSlot) -> Option<&ScenarioSnapshot> {
        match slot {
            ScenarioSlot::A => self.a.as_ref(),
            ScenarioSlot::B => self.b.as_ref(),
        }
    }

    fn set_slot(&mut self, slot: ScenarioSlot, value: Option<ScenarioSnapshot>) {
        match slot {
            ScenarioSlot::A => self.a = value,
            ScenarioSlot::B => self.b = value,
        }
    }
}

/// The persisted calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub selected_species: Vec<Species>,
    pub volumes: BTreeMap<Species, String>,
    pub time_per_animal: String,
    pub hourly_wage: String,
    pub show_advanced: bool,
    pub comparison: Comparison,
    pub custom_presets: Vec<SpeciesPreset>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            selected_species: Vec::new(),
            volumes: BTreeMap::new(),
            time_per_animal: DEFAULT_TIME_PER_ANIMAL_MINUTES.to_string(),
            hourly_wage: DEFAULT_HOURLY_WAGE.to_string(),
            show_advanced: false,
            comparison: Comparison::default(),
            custom_presets: Vec::new(),
        }
    }
}

impl CalculatorState {
    /// The input fields as a standalone value, for projection and snapshots
    pub fn inputs(&self) -> CalculatorInputs {
        CalculatorInputs {
            selected_species: self.selected_species.clone(),
            volumes: self.volumes.clone(),
            time_per_animal: self.time_per_animal.clone(),
            hourly_wage: self.hourly_wage.clone(),
        }
    }

    /// True iff the state is structurally equal to the hardcoded default.
    ///
    /// Drives the "clear all" affordance; nothing else depends on it.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Every way the calculator state can change
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorAction {
    SetSelectedSpecies(Vec<Species>),
    SetVolume { species: Species, value: String },
    RemoveSpecies(Species),
    ApplyPreset(SpeciesPreset),
    SaveCustomPreset { id: String, label: String },
    DeleteCustomPreset(String),
    SetShowAdvanced(bool),
    SetTimePerAnimal(String),
    SetHourlyWage(String),
    SaveScenario { slot: ScenarioSlot, captured_at: String },
    ClearScenario(ScenarioSlot),
    ResetDefaults,
}

/// Drop duplicate entries while keeping first-occurrence order
fn dedup_species(species: Vec<Species>) -> Vec<Species> {
    let mut seen = Vec::with_capacity(species.len());
    for s in species {
        if !seen.contains(&s) {
            seen.push(s);
        }
    }
    seen
}

/// Apply one action to the state, producing the next state.
///
/// Pure: no I/O, no clock, no mutation of the argument. Only
/// `RemoveSpecies` cascades across two fields (selection and volumes);
/// bulk `SetSelectedSpecies` deliberately leaves stale volume entries in
/// place, since projections only read volumes for selected species.
pub fn reduce(state: &CalculatorState, action: CalculatorAction) -> CalculatorState {
    match action {
        CalculatorAction::SetSelectedSpecies(species) => CalculatorState {
            selected_species: dedup_species(species),
            ..state.clone()
        },
        CalculatorAction::SetVolume { species, value } => {
            let mut volumes = state.volumes.clone();
            volumes.insert(species, value);
            CalculatorState {
                volumes,
                ..state.clone()
            }
        }
        CalculatorAction::RemoveSpecies(species) => {
            let mut volumes = state.volumes.clone();
            volumes.remove(&species);
            CalculatorState {
                selected_species: state
                    .selected_species
                    .iter()
                    .copied()
                    .filter(|s| *s != species)
                    .collect(),
                volumes,
                ..state.clone()
            }
        }
        CalculatorAction::ApplyPreset(preset) => CalculatorState {
            selected_species: preset.species,
            volumes: preset.volumes,
            ..state.clone()
        },
        CalculatorAction::SaveCustomPreset { id, label } => {
            if state.selected_species.is_empty() {
                return state.clone();
            }

            let volumes: BTreeMap<Species, String> = state
                .selected_species
                .iter()
                .filter_map(|s| state.volumes.get(s).map(|v| (*s, v.clone())))
                .collect();

            let next = SpeciesPreset {
                id: id.clone(),
                label,
                species: state.selected_species.clone(),
                volumes,
            };

            let mut custom_presets: Vec<SpeciesPreset> = state
                .custom_presets
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect();
            custom_presets.push(next);

            CalculatorState {
                custom_presets,
                ..state.clone()
            }
        }
        CalculatorAction::DeleteCustomPreset(id) => CalculatorState {
            custom_presets: state
                .custom_presets
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect(),
            ..state.clone()
        },
        CalculatorAction::SetShowAdvanced(show_advanced) => CalculatorState {
            show_advanced,
            ..state.clone()
        },
        CalculatorAction::SetTimePerAnimal(time_per_animal) => CalculatorState {
            time_per_animal,
            ..state.clone()
        },
        CalculatorAction::SetHourlyWage(hourly_wage) => CalculatorState {
            hourly_wage,
            ..state.clone()
        },
        CalculatorAction::SaveScenario { slot, captured_at } => {
            let snapshot = ScenarioSnapshot {
                inputs: state.inputs(),
                captured_at,
            };
            let mut comparison = state.comparison.clone();
            comparison.set_slot(slot, Some(snapshot));
            CalculatorState {
                comparison,
                ..state.clone()
            }
        }
        CalculatorAction::ClearScenario(slot) => {
            let mut comparison = state.comparison.clone();
            comparison.set_slot(slot, None);
            CalculatorState {
                comparison,
                ..state.clone()
            }
        }
        CalculatorAction::ResetDefaults => CalculatorState::default(),
    }
}
