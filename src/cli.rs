use std::path::PathBuf;

use clap::{Parser, Subcommand};
use farmgate::{ScenarioSlot, Species};

/// Farmgate - meat processor value calculator
#[derive(Parser, Debug)]
#[command(name = "farmgate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'farmgate' without arguments for an interactive session.")]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the persisted state file (defaults to ~/.farmgate/state.json)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn as_bool(self) -> bool {
        matches!(self, Toggle::On)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the selected species list (an empty list clears it)
    Select {
        /// Species to select, in display order
        species: Vec<Species>,
    },

    /// Remove one species from the selection (also drops its volume)
    Remove { species: Species },

    /// Set the annual processing volume for a species, in pounds
    Volume {
        species: Species,
        /// Raw value; bad numbers are flagged by validation, not rejected here
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Set the time savings per animal, in minutes
    Time {
        #[arg(allow_hyphen_values = true)]
        minutes: String,
    },

    /// Set the average hourly wage, in dollars
    Wage {
        #[arg(allow_hyphen_values = true)]
        dollars: String,
    },

    /// Show or hide the advanced assumptions panel
    Advanced { state: Toggle },

    /// List, apply, save, or delete presets
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Capture or clear comparison scenarios
    Scenario {
        #[command(subcommand)]
        command: ScenarioCommands,
    },

    /// Compare saved scenarios against the current inputs
    Compare,

    /// Show the projection for the current inputs
    Show,

    /// Export the projection as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Reset to defaults and clear the saved state
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List built-in and custom presets
    List,

    /// Apply a preset by id (replaces selection and volumes wholesale)
    Apply { id: String },

    /// Save the current selection and volumes as a custom preset
    Save { id: String, label: String },

    /// Delete a custom preset by id
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ScenarioCommands {
    /// Capture the current inputs into a slot
    Save { slot: ScenarioSlot },

    /// Clear a slot
    Clear { slot: ScenarioSlot },
}
