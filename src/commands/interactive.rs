//! Interactive calculator session
//!
//! A menu loop over the same reducer actions the subcommands dispatch.
//! After the species selection changes, the species menu re-opens via the
//! single-slot timer so rapid adjustments stay in one place - the last
//! schedule wins, earlier ones are canceled.

use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use farmgate::export::{csv_file_name, projection_csv};
use farmgate::presets::{builtin_presets, find_preset};
use farmgate::projection::calculate_projection;
use farmgate::report::render_report;
use farmgate::species::Species;
use farmgate::state::{CalculatorAction, ScenarioSlot};
use farmgate::storage::Storage;
use farmgate::timer::ReopenTimer;
use farmgate::validation::has_validation_errors;
use is_terminal::IsTerminal;

use super::{print_validation_warnings, Session};

/// Delay before the species menu re-opens after a selection change
const MENU_REOPEN_DELAY: Duration = Duration::from_millis(150);

pub fn cmd_interactive(storage: Storage, json: bool) -> Result<()> {
    if json {
        bail!("interactive mode has no JSON output; try 'farmgate show --json'");
    }
    if !std::io::stdout().is_terminal() {
        bail!("interactive mode needs a terminal; try 'farmgate show'");
    }

    println!("Farmgate - meat processor value calculator\n");

    let mut session = Session::open(storage);
    let mut reopen = ReopenTimer::new();

    loop {
        // A pending reopen fires before the main menu comes back: the
        // species picker returns after a selection change, and stops
        // returning once the selection settles.
        if reopen.is_pending() {
            std::thread::sleep(MENU_REOPEN_DELAY);
        }
        if reopen.take_due() {
            select_species(&mut session, &mut reopen)?;
            continue;
        }

        let items = vec![
            "[1] Select species",
            "[2] Enter volumes",
            "[3] Assumptions (time & wage)",
            "[4] Presets",
            "[5] Scenarios & comparison",
            "[6] View projection",
            "[7] Export CSV",
            "[8] Reset to defaults",
            "[0] Quit",
        ];

        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => select_species(&mut session, &mut reopen)?,
            1 => enter_volumes(&mut session)?,
            2 => edit_assumptions(&mut session)?,
            3 => preset_menu(&mut session)?,
            4 => scenario_menu(&mut session)?,
            5 => view_projection(&session),
            6 => export_csv(&session)?,
            7 => reset_defaults(&mut session)?,
            _ => return Ok(()),
        }
    }
}

fn select_species(session: &mut Session, reopen: &mut ReopenTimer) -> Result<()> {
    let before = session.state().selected_species.clone();
    let defaults: Vec<bool> = Species::ALL.iter().map(|s| before.contains(s)).collect();
    let labels: Vec<&str> = Species::ALL.iter().map(|s| s.display_name()).collect();

    let picked = MultiSelect::new()
        .with_prompt("Species (space toggles, enter confirms)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let species: Vec<Species> = picked.into_iter().map(|i| Species::ALL[i]).collect();
    let changed = species != before;
    session.dispatch(CalculatorAction::SetSelectedSpecies(species))?;

    if changed {
        reopen.schedule(MENU_REOPEN_DELAY);
    }
    Ok(())
}

fn enter_volumes(session: &mut Session) -> Result<()> {
    let selected = session.state().selected_species.clone();
    if selected.is_empty() {
        println!("No species selected yet.");
        return Ok(());
    }

    for species in selected {
        let current = session
            .state()
            .volumes
            .get(&species)
            .cloned()
            .unwrap_or_default();

        let value: String = Input::new()
            .with_prompt(format!(
                "Annual volume for {} (lbs hanging weight)",
                species.display_name()
            ))
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;

        session.dispatch(CalculatorAction::SetVolume { species, value })?;
    }

    print_validation_warnings(&session.validation_errors());
    Ok(())
}

fn edit_assumptions(session: &mut Session) -> Result<()> {
    let time: String = Input::new()
        .with_prompt("Time savings per animal (minutes)")
        .with_initial_text(session.state().time_per_animal.clone())
        .allow_empty(true)
        .interact_text()?;
    session.dispatch(CalculatorAction::SetTimePerAnimal(time))?;

    let wage: String = Input::new()
        .with_prompt("Average hourly wage ($)")
        .with_initial_text(session.state().hourly_wage.clone())
        .allow_empty(true)
        .interact_text()?;
    session.dispatch(CalculatorAction::SetHourlyWage(wage))?;

    let show = Confirm::new()
        .with_prompt("Keep the advanced assumptions visible?")
        .default(session.state().show_advanced)
        .interact()?;
    session.dispatch(CalculatorAction::SetShowAdvanced(show))?;

    print_validation_warnings(&session.validation_errors());
    Ok(())
}

fn preset_menu(session: &mut Session) -> Result<()> {
    let builtins = builtin_presets();
    let customs = session.state().custom_presets.clone();

    let mut items: Vec<String> = builtins
        .iter()
        .map(|p| format!("Apply: {}", p.label))
        .collect();
    items.extend(customs.iter().map(|p| format!("Apply: {} (custom)", p.label)));
    items.push("Save current selection as preset".to_string());
    if !customs.is_empty() {
        items.push("Delete a custom preset".to_string());
    }
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Presets")
        .items(&items)
        .default(0)
        .interact()?;

    let apply_count = builtins.len() + customs.len();
    if choice < apply_count {
        let id = if choice < builtins.len() {
            builtins[choice].id.clone()
        } else {
            customs[choice - builtins.len()].id.clone()
        };
        if let Some(preset) = find_preset(session.state(), &id) {
            let label = preset.label.clone();
            session.dispatch(CalculatorAction::ApplyPreset(preset))?;
            println!("Applied preset '{label}'.");
        }
        return Ok(());
    }

    if choice == apply_count {
        if session.state().selected_species.is_empty() {
            println!("Nothing selected; preset not saved.");
            return Ok(());
        }
        let id: String = Input::new().with_prompt("Preset id").interact_text()?;
        let label: String = Input::new().with_prompt("Preset label").interact_text()?;
        session.dispatch(CalculatorAction::SaveCustomPreset { id, label })?;
        println!("Preset saved.");
        return Ok(());
    }

    if !customs.is_empty() && choice == apply_count + 1 {
        let labels: Vec<&str> = customs.iter().map(|p| p.label.as_str()).collect();
        let which = Select::new()
            .with_prompt("Delete which preset?")
            .items(&labels)
            .default(0)
            .interact()?;
        session.dispatch(CalculatorAction::DeleteCustomPreset(customs[which].id.clone()))?;
        println!("Preset deleted.");
    }

    Ok(())
}

fn scenario_menu(session: &mut Session) -> Result<()> {
    let items = vec![
        "Save current inputs as scenario A",
        "Save current inputs as scenario B",
        "Clear scenario A",
        "Clear scenario B",
        "Compare scenarios",
        "Back",
    ];

    let choice = Select::new()
        .with_prompt("Scenarios")
        .items(&items)
        .default(0)
        .interact()?;

    match choice {
        0 | 1 => {
            let slot = if choice == 0 {
                ScenarioSlot::A
            } else {
                ScenarioSlot::B
            };
            session.dispatch(CalculatorAction::SaveScenario {
                slot,
                captured_at: Utc::now().to_rfc3339(),
            })?;
            println!("Scenario {slot} saved.");
        }
        2 | 3 => {
            let slot = if choice == 2 {
                ScenarioSlot::A
            } else {
                ScenarioSlot::B
            };
            session.dispatch(CalculatorAction::ClearScenario(slot))?;
            println!("Scenario {slot} cleared.");
        }
        4 => {
            // Reuse the one-shot command's rendering.
            super::scenario::cmd_compare(session.storage().clone(), false)?;
        }
        _ => {}
    }
    Ok(())
}

fn view_projection(session: &Session) {
    let inputs = session.state().inputs();
    let errors = session.validation_errors();
    if has_validation_errors(&errors) {
        print_validation_warnings(&errors);
        eprintln!("(fields with warnings count as 0 below)");
    }
    let projection = calculate_projection(&inputs);
    print!("{}", render_report(&projection, &inputs, Utc::now()));
}

fn export_csv(session: &Session) -> Result<()> {
    let now = Utc::now();
    let file_name: String = Input::new()
        .with_prompt("Export file name")
        .with_initial_text(csv_file_name(now))
        .interact_text()?;

    let inputs = session.state().inputs();
    let projection = calculate_projection(&inputs);
    let csv = projection_csv(&projection, &inputs, now)?;
    std::fs::write(&file_name, csv)?;
    println!("Wrote {file_name}");
    Ok(())
}

fn reset_defaults(session: &mut Session) -> Result<()> {
    if session.state().is_default() {
        println!("Already at defaults; nothing to clear.");
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt("Clear all inputs, scenarios, and custom presets?")
        .default(false)
        .interact()?;

    if confirmed {
        session.reset_and_clear()?;
        println!("Reset to defaults; saved state cleared.");
    }
    Ok(())
}
