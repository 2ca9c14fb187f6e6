//! Scenario commands: capture, clear, compare

use anyhow::Result;
use chrono::Utc;
use farmgate::projection::{calculate_projection, ProjectionTotals};
use farmgate::report::render_comparison;
use farmgate::state::{CalculatorAction, ScenarioSlot};
use farmgate::storage::Storage;

use super::Session;

pub fn cmd_scenario_save(storage: Storage, slot: ScenarioSlot, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    let captured_at = Utc::now().to_rfc3339();
    session.dispatch(CalculatorAction::SaveScenario {
        slot,
        captured_at: captured_at.clone(),
    })?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "slot": slot.to_string(), "capturedAt": captured_at })
        );
    } else {
        println!("Saved scenario {slot} ({captured_at}).");
    }
    Ok(())
}

pub fn cmd_scenario_clear(storage: Storage, slot: ScenarioSlot, json: bool) -> Result<()> {
    let mut session = Session::open(storage);
    session.dispatch(CalculatorAction::ClearScenario(slot))?;

    if !json {
        println!("Cleared scenario {slot}.");
    }
    Ok(())
}

fn slot_entry(
    session: &Session,
    slot: ScenarioSlot,
) -> (String, Option<ProjectionTotals>) {
    match session.state().comparison.slot(slot) {
        Some(snapshot) => (
            format!("Scenario {} ({})", slot, snapshot.captured_at),
            Some(calculate_projection(&snapshot.inputs).totals),
        ),
        None => (format!("Scenario {slot} (empty)"), None),
    }
}

pub fn cmd_compare(storage: Storage, json: bool) -> Result<()> {
    let session = Session::open(storage);
    let (label_a, totals_a) = slot_entry(&session, ScenarioSlot::A);
    let (label_b, totals_b) = slot_entry(&session, ScenarioSlot::B);
    let current = calculate_projection(&session.state().inputs()).totals;

    if json {
        let value = serde_json::json!({
            "A": totals_a,
            "B": totals_b,
            "current": current,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let entries = [
        (label_a, totals_a.as_ref()),
        (label_b, totals_b.as_ref()),
        ("Current".to_string(), Some(&current)),
    ];
    println!("{}", render_comparison(&entries));
    Ok(())
}
