//! Persistence codec - versioned JSON state envelope
//!
//! The persisted record is untrusted input: loading re-validates the
//! version tag and every field's shape. Any parse failure, version
//! mismatch, or shape violation discards the whole record in favor of
//! defaults - there is no migration and no partial recovery.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{FarmgateError, FarmgateResult};
use crate::presets::SpeciesPreset;
use crate::species::Species;
use crate::state::{CalculatorInputs, CalculatorState, Comparison, ScenarioSnapshot};

/// Current envelope version. Version 1 predates comparison slots and
/// custom presets; those records are discarded, not migrated.
pub const STORAGE_VERSION: u32 = 2;

const STATE_DIR: &str = ".farmgate";
const STATE_FILE: &str = "state.json";

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    state: &'a CalculatorState,
}

/// Handle to the single persisted calculator record
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default record location: `~/.farmgate/state.json`
    pub fn default_path() -> FarmgateResult<PathBuf> {
        let home = dirs::home_dir().ok_or(FarmgateError::NoHomeDirectory)?;
        Ok(home.join(STATE_DIR).join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state, or `None` when there is nothing usable.
    ///
    /// Total: corrupt JSON, a foreign version, and malformed shapes all
    /// come back as `None`, never as an error.
    pub fn load(&self) -> Option<CalculatorState> {
        let raw = fs::read_to_string(&self.path).ok()?;
        decode_envelope(&raw)
    }

    /// Overwrite the record with the current version tag.
    pub fn save(&self, state: &CalculatorState) -> FarmgateResult<()> {
        let payload = serde_json::to_string_pretty(&Envelope {
            version: STORAGE_VERSION,
            state,
        })?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(payload.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| FarmgateError::Io(e.error))?;
        Ok(())
    }

    /// Remove the record entirely.
    pub fn clear(&self) -> FarmgateResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Decode a raw envelope string into a sanitized state.
///
/// The version tag must match `STORAGE_VERSION` exactly; everything else
/// goes through the shape sanitizer below.
pub fn decode_envelope(raw: &str) -> Option<CalculatorState> {
    let envelope: Value = serde_json::from_str(raw).ok()?;

    let version = envelope.get("version")?.as_u64()?;
    if version != u64::from(STORAGE_VERSION) {
        return None;
    }

    sanitize_state(envelope.get("state")?)
}

/// Filter a species list down to valid, first-occurrence-unique members.
/// A non-list value degrades to an empty selection.
fn sanitize_species_list(value: Option<&Value>) -> Vec<Species> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let mut species = Vec::new();
    for item in items {
        if let Some(parsed) = item.as_str().and_then(Species::parse) {
            if !species.contains(&parsed) {
                species.push(parsed);
            }
        }
    }
    species
}

/// Keep only valid-species keys mapped to string values.
/// A non-object value degrades to an empty map.
fn sanitize_volumes(value: Option<&Value>) -> BTreeMap<Species, String> {
    let Some(Value::Object(entries)) = value else {
        return BTreeMap::new();
    };

    entries
        .iter()
        .filter_map(|(key, raw)| {
            let species = Species::parse(key)?;
            let volume = raw.as_str()?;
            Some((species, volume.to_string()))
        })
        .collect()
}

fn sanitize_inputs(value: &Value) -> Option<CalculatorInputs> {
    let obj = value.as_object()?;
    Some(CalculatorInputs {
        selected_species: sanitize_species_list(obj.get("selectedSpecies")),
        volumes: sanitize_volumes(obj.get("volumes")),
        time_per_animal: obj.get("timePerAnimal")?.as_str()?.to_string(),
        hourly_wage: obj.get("hourlyWage")?.as_str()?.to_string(),
    })
}

fn sanitize_snapshot(value: &Value) -> Option<ScenarioSnapshot> {
    let obj = value.as_object()?;
    Some(ScenarioSnapshot {
        inputs: sanitize_inputs(obj.get("inputs")?)?,
        captured_at: obj.get("capturedAt")?.as_str()?.to_string(),
    })
}

/// A slot must be absent, null, or a well-formed snapshot. Anything else
/// is a shape violation that discards the whole state.
fn sanitize_slot(value: Option<&Value>) -> Option<Option<ScenarioSnapshot>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(snapshot) => Some(Some(sanitize_snapshot(snapshot)?)),
    }
}

fn sanitize_comparison(value: Option<&Value>) -> Option<Comparison> {
    let value = match value {
        None | Some(Value::Null) => return Some(Comparison::default()),
        Some(value) => value,
    };

    let obj = value.as_object()?;
    Some(Comparison {
        a: sanitize_slot(obj.get("A"))?,
        b: sanitize_slot(obj.get("B"))?,
    })
}

fn sanitize_presets(value: Option<&Value>) -> Option<Vec<SpeciesPreset>> {
    let items = match value {
        None | Some(Value::Null) => return Some(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return None,
    };

    let mut presets = Vec::with_capacity(items.len());
    for item in items {
        let obj = item.as_object()?;
        presets.push(SpeciesPreset {
            id: obj.get("id")?.as_str()?.to_string(),
            label: obj.get("label")?.as_str()?.to_string(),
            species: sanitize_species_list(obj.get("species")),
            volumes: sanitize_volumes(obj.get("volumes")),
        });
    }
    Some(presets)
}

/// Re-validate the whole state shape. Lists and maps are filtered
/// entry-wise; required scalars are strict.
fn sanitize_state(value: &Value) -> Option<CalculatorState> {
    let obj = value.as_object()?;

    Some(CalculatorState {
        selected_species: sanitize_species_list(obj.get("selectedSpecies")),
        volumes: sanitize_volumes(obj.get("volumes")),
        time_per_animal: obj.get("timePerAnimal")?.as_str()?.to_string(),
        hourly_wage: obj.get("hourlyWage")?.as_str()?.to_string(),
        show_advanced: obj.get("showAdvanced")?.as_bool()?,
        comparison: sanitize_comparison(obj.get("comparison"))?,
        custom_presets: sanitize_presets(obj.get("customPresets"))?,
    })
}
