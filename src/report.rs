//! Printable projection report
//!
//! Renders the human-readable document: assumptions, annual and monthly
//! totals, and the per-species breakdown table. Pure formatting over a
//! computed projection.

use chrono::{DateTime, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::format::format_amount;
use crate::projection::{ProjectionResult, ProjectionTotals};
use crate::state::CalculatorInputs;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn amount_cell(value: f64) -> Cell {
    Cell::new(format_amount(value)).set_alignment(CellAlignment::Right)
}

fn species_table(projection: &ProjectionResult) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        "Species",
        "Annual Heads",
        "Annual Volume (lbs)",
        "Annual Savings ($)",
        "Annual Cost ($)",
        "Annual Net ($)",
        "Monthly Net ($)",
    ]);

    for row in &projection.rows {
        table.add_row(vec![
            Cell::new(row.species.display_name()),
            Cell::new(row.annual_heads).set_alignment(CellAlignment::Right),
            amount_cell(row.annual_volume),
            amount_cell(row.annual_savings),
            amount_cell(row.annual_cost),
            amount_cell(row.annual_net_benefit),
            amount_cell(row.monthly_net_benefit),
        ]);
    }

    let totals = &projection.totals;
    table.add_row(vec![
        Cell::new("TOTAL"),
        Cell::new(""),
        amount_cell(totals.annual_volume),
        amount_cell(totals.annual_savings),
        amount_cell(totals.annual_cost),
        amount_cell(totals.annual_net_benefit),
        amount_cell(totals.monthly_net_benefit),
    ]);

    table
}

/// Render the full report document.
pub fn render_report(
    projection: &ProjectionResult,
    inputs: &CalculatorInputs,
    generated_at: DateTime<Utc>,
) -> String {
    let totals = &projection.totals;
    let mut out = String::new();

    out.push_str("Farmgate Value Calculator Report\n");
    out.push_str(&format!("Generated: {}\n\n", generated_at.to_rfc3339()));

    out.push_str("Assumptions\n");
    out.push_str(&format!(
        "  Time savings per animal: {} minutes\n",
        inputs.time_per_animal
    ));
    out.push_str(&format!("  Average hourly wage: ${}\n\n", inputs.hourly_wage));

    out.push_str("Annual Totals\n");
    out.push_str(&format!(
        "  Volume: {} lbs\n",
        format_amount(totals.annual_volume)
    ));
    out.push_str(&format!(
        "  Savings: ${}\n",
        format_amount(totals.annual_savings)
    ));
    out.push_str(&format!("  Cost: ${}\n", format_amount(totals.annual_cost)));
    out.push_str(&format!(
        "  Net benefit: ${}\n\n",
        format_amount(totals.annual_net_benefit)
    ));

    out.push_str("Monthly Totals\n");
    out.push_str(&format!(
        "  Volume: {} lbs\n",
        format_amount(totals.monthly_volume)
    ));
    out.push_str(&format!(
        "  Savings: ${}\n",
        format_amount(totals.monthly_savings)
    ));
    out.push_str(&format!("  Cost: ${}\n", format_amount(totals.monthly_cost)));
    out.push_str(&format!(
        "  Net benefit: ${}\n\n",
        format_amount(totals.monthly_net_benefit)
    ));

    out.push_str("Species Breakdown\n");
    if projection.rows.is_empty() {
        out.push_str("  (no species selected)\n");
    } else {
        out.push_str(&species_table(projection).to_string());
        out.push('\n');
    }

    out
}

/// Render scenario totals side by side. `None` marks an empty slot.
pub fn render_comparison(entries: &[(String, Option<&ProjectionTotals>)]) -> String {
    let mut table = base_table();
    table.set_header(vec![
        "Scenario",
        "Annual Volume (lbs)",
        "Annual Savings ($)",
        "Annual Cost ($)",
        "Annual Net ($)",
        "Monthly Net ($)",
    ]);

    for (label, totals) in entries {
        match totals {
            Some(totals) => {
                table.add_row(vec![
                    Cell::new(label),
                    amount_cell(totals.annual_volume),
                    amount_cell(totals.annual_savings),
                    amount_cell(totals.annual_cost),
                    amount_cell(totals.annual_net_benefit),
                    amount_cell(totals.monthly_net_benefit),
                ]);
            }
            None => {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                    Cell::new("-").set_alignment(CellAlignment::Center),
                ]);
            }
        }
    }

    table.to_string()
}
