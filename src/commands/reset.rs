//! Reset to defaults and clear the persisted record

use anyhow::Result;
use dialoguer::Confirm;
use is_terminal::IsTerminal;
use farmgate::storage::Storage;

use super::Session;

pub fn cmd_reset(storage: Storage, yes: bool, json: bool) -> Result<()> {
    let mut session = Session::open(storage);

    if session.state().is_default() {
        if !json {
            println!("Already at defaults; nothing to clear.");
        }
        return Ok(());
    }

    let confirmed = if yes || !std::io::stdin().is_terminal() {
        true
    } else {
        Confirm::new()
            .with_prompt("Clear all inputs, scenarios, and custom presets?")
            .default(false)
            .interact()?
    };

    if !confirmed {
        if !json {
            println!("Aborted.");
        }
        return Ok(());
    }

    session.reset_and_clear()?;
    if json {
        println!("{}", serde_json::json!({ "reset": true }));
    } else {
        println!("Reset to defaults; saved state cleared.");
    }
    Ok(())
}
