//! Input-mutating commands: selection, volumes, assumptions

use anyhow::Result;
use farmgate::format::format_amount;
use farmgate::projection::calculate_projection;
use farmgate::state::CalculatorAction;
use farmgate::species::Species;
use farmgate::storage::Storage;

use super::{print_validation_warnings, Session};

/// Print the one-line outcome every mutating command ends with.
pub(crate) fn print_summary(session: &Session, json: bool) -> Result<()> {
    let projection = calculate_projection(&session.state().inputs());
    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!(
            "Annual net benefit: ${}  (savings ${} - cost ${})",
            format_amount(projection.totals.annual_net_benefit),
            format_amount(projection.totals.annual_savings),
            format_amount(projection.totals.annual_cost),
        );
    }
    Ok(())
}

pub fn cmd_select(storage: Storage, species: Vec<Species>, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    session.dispatch(CalculatorAction::SetSelectedSpecies(species))?;

    if !json {
        let selected = session.state().selected_species.clone();
        if selected.is_empty() {
            println!("Selection cleared.");
        } else {
            let names: Vec<&str> = selected.iter().map(|s| s.display_name()).collect();
            println!("Selected: {}", names.join(", "));
        }
    }
    print_summary(&session, json)
}

pub fn cmd_remove(storage: Storage, species: Species, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    session.dispatch(CalculatorAction::RemoveSpecies(species))?;

    if !json {
        println!("Removed {} (volume entry dropped).", species.display_name());
    }
    print_summary(&session, json)
}

pub fn cmd_volume(storage: Storage, species: Species, value: String, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    let selected = session.state().selected_species.contains(&species);
    session.dispatch(CalculatorAction::SetVolume { species, value })?;

    if !json {
        if !selected {
            eprintln!(
                "note: {} is not currently selected; its volume is stored but ignored",
                species.display_name()
            );
        }
        print_validation_warnings(&session.validation_errors());
    }
    print_summary(&session, json)
}

pub fn cmd_time(storage: Storage, minutes: String, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    session.dispatch(CalculatorAction::SetTimePerAnimal(minutes))?;

    if !json {
        print_validation_warnings(&session.validation_errors());
    }
    print_summary(&session, json)
}

pub fn cmd_wage(storage: Storage, dollars: String, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    session.dispatch(CalculatorAction::SetHourlyWage(dollars))?;

    if !json {
        print_validation_warnings(&session.validation_errors());
    }
    print_summary(&session, json)
}

pub fn cmd_advanced(storage: Storage, show: bool, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    session.dispatch(CalculatorAction::SetShowAdvanced(show))?;

    if !json {
        println!(
            "Advanced assumptions {}.",
            if show { "shown" } else { "hidden" }
        );
    }
    print_summary(&session, json)
}
