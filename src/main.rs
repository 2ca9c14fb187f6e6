//! Farmgate CLI - meat processor value calculator
//!
//! Usage: farmgate [COMMAND]
//!
//! Without a command, farmgate starts an interactive session. Commands
//! mirror the calculator's action surface: select species, set volumes and
//! assumptions, apply presets, capture scenarios, show/export projections.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use farmgate::storage::Storage;

use cli::{Cli, Commands, PresetCommands, ScenarioCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = match cli.state_file {
        Some(path) => path,
        None => Storage::default_path()?,
    };
    if cli.verbose > 0 {
        eprintln!("state file: {}", path.display());
    }
    let storage = Storage::new(path);

    match cli.command {
        Some(Commands::Select { species }) => {
            commands::inputs::cmd_select(storage, species, cli.json)
        }
        Some(Commands::Remove { species }) => {
            commands::inputs::cmd_remove(storage, species, cli.json)
        }
        Some(Commands::Volume { species, value }) => {
            commands::inputs::cmd_volume(storage, species, value, cli.json)
        }
        Some(Commands::Time { minutes }) => commands::inputs::cmd_time(storage, minutes, cli.json),
        Some(Commands::Wage { dollars }) => commands::inputs::cmd_wage(storage, dollars, cli.json),
        Some(Commands::Advanced { state }) => {
            commands::inputs::cmd_advanced(storage, state.as_bool(), cli.json)
        }
        Some(Commands::Preset { command }) => match command {
            PresetCommands::List => commands::preset::cmd_preset_list(storage, cli.json),
            PresetCommands::Apply { id } => commands::preset::cmd_preset_apply(storage, id, cli.json),
            PresetCommands::Save { id, label } => {
                commands::preset::cmd_preset_save(storage, id, label, cli.json)
            }
            PresetCommands::Delete { id } => {
                commands::preset::cmd_preset_delete(storage, id, cli.json)
            }
        },
        Some(Commands::Scenario { command }) => match command {
            ScenarioCommands::Save { slot } => {
                commands::scenario::cmd_scenario_save(storage, slot, cli.json)
            }
            ScenarioCommands::Clear { slot } => {
                commands::scenario::cmd_scenario_clear(storage, slot, cli.json)
            }
        },
        Some(Commands::Compare) => commands::scenario::cmd_compare(storage, cli.json),
        Some(Commands::Show) => commands::show::cmd_show(storage, cli.json),
        Some(Commands::Export { out }) => commands::export::cmd_export(storage, out, cli.json),
        Some(Commands::Reset { yes }) => commands::reset::cmd_reset(storage, yes, cli.json),
        None => commands::interactive::cmd_interactive(storage, cli.json),
    }
}
