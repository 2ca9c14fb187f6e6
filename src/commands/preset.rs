//! Preset commands: list, apply, save, delete

use anyhow::{bail, Result};
use farmgate::presets::{builtin_presets, find_preset, SpeciesPreset};
use farmgate::state::CalculatorAction;
use farmgate::storage::Storage;

use super::Session;

fn describe(preset: &SpeciesPreset) -> String {
    let species: Vec<&str> = preset.species.iter().map(|s| s.display_name()).collect();
    format!("{} [{}] - {}", preset.label, preset.id, species.join(", "))
}

pub fn cmd_preset_list(storage: Storage, json: bool) -> Result<()> {
    let session = Session::open(storage);
    let builtins = builtin_presets();
    let customs = &session.state().custom_presets;

    if json {
        let value = serde_json::json!({
            "builtin": builtins,
            "custom": customs,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Built-in presets:");
    for preset in &builtins {
        println!("  {}", describe(preset));
    }

    if customs.is_empty() {
        println!("No custom presets.");
    } else {
        println!("Custom presets:");
        for preset in customs {
            println!("  {}", describe(preset));
        }
    }
    Ok(())
}

pub fn cmd_preset_apply(storage: Storage, id: String, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    let Some(preset) = find_preset(session.state(), &id) else {
        bail!("no preset with id '{id}'");
    };

    let label = preset.label.clone();
    session.dispatch(CalculatorAction::ApplyPreset(preset))?;

    if !json {
        println!("Applied preset '{label}'.");
    }
    super::inputs::print_summary(&session, json)
}

pub fn cmd_preset_save(storage: Storage, id: String, label: String, json: bool) -> Result<()> {
    let mut session = Session::open(storage);

    if session.state().selected_species.is_empty() {
        // Saving with nothing selected is silently ignored, never an error.
        if !json {
            println!("Nothing selected; preset not saved.");
        }
        return Ok(());
    }

    session.dispatch(CalculatorAction::SaveCustomPreset {
        id: id.clone(),
        label: label.clone(),
    })?;

    if !json {
        println!("Saved preset '{label}' [{id}].");
    }
    Ok(())
}

pub fn cmd_preset_delete(storage: Storage, id: String, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    let existed = session.state().custom_presets.iter().any(|p| p.id == id);
    session.dispatch(CalculatorAction::DeleteCustomPreset(id.clone()))?;

    if !json {
        if existed {
            println!("Deleted preset [{id}].");
        } else {
            println!("No custom preset [{id}]; nothing to delete.");
        }
    }
    Ok(())
}
