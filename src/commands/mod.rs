//! CLI command implementations
//!
//! Each command opens a session against the state file, dispatches reducer
//! actions, and persists after every change. Opening a session never
//! writes; only dispatches do.

pub mod export;
pub mod inputs;
pub mod interactive;
pub mod preset;
pub mod reset;
pub mod scenario;
pub mod show;

use anyhow::Result;
use farmgate::state::{reduce, CalculatorAction, CalculatorState};
use farmgate::storage::Storage;
use farmgate::validation::{validate_inputs, ValidationErrors};

/// A loaded state plus the storage it persists to.
pub struct Session {
    storage: Storage,
    state: CalculatorState,
}

impl Session {
    /// Load the persisted state, falling back to defaults. Read-only:
    /// nothing is written until the first dispatch.
    pub fn open(storage: Storage) -> Self {
        let state = storage.load().unwrap_or_default();
        Self { storage, state }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Apply one action and mirror the new state to storage.
    pub fn dispatch(&mut self, action: CalculatorAction) -> Result<()> {
        self.state = reduce(&self.state, action);
        self.storage.save(&self.state)?;
        Ok(())
    }

    /// Reset to defaults and remove the persisted record entirely.
    pub fn reset_and_clear(&mut self) -> Result<()> {
        self.state = reduce(&self.state, CalculatorAction::ResetDefaults);
        self.storage.clear()?;
        Ok(())
    }

    pub fn validation_errors(&self) -> ValidationErrors {
        validate_inputs(&self.state.inputs())
    }
}

/// Print field-scoped validation warnings to stderr. Warnings never block
/// the projection; the affected fields just contribute 0.
pub fn print_validation_warnings(errors: &ValidationErrors) {
    for (species, message) in &errors.volumes {
        eprintln!("⚠ {}: {}", species.display_name(), message);
    }
    if let Some(message) = &errors.time_per_animal {
        eprintln!("⚠ {}", message);
    }
    if let Some(message) = &errors.hourly_wage {
        eprintln!("⚠ {}", message);
    }
}
