//! Projection engine
//!
//! Turns the raw inputs into per-species rows and aggregate totals, annual
//! and monthly. Fields with validation errors contribute 0 for the duration
//! of the computation; the stored raw strings are untouched.

use serde::Serialize;

use crate::calculations::{calculate_heads, calculate_labor_value};
use crate::constants::{COST_PER_LB, MONTHS_PER_YEAR};
use crate::species::Species;
use crate::state::CalculatorInputs;
use crate::validation::{parse_non_negative_number, validate_inputs};

/// Projected figures for one selected species
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    pub species: Species,
    pub annual_heads: u64,
    pub annual_volume: f64,
    pub annual_savings: f64,
    pub annual_cost: f64,
    pub annual_net_benefit: f64,
    pub monthly_volume: f64,
    pub monthly_savings: f64,
    pub monthly_cost: f64,
    pub monthly_net_benefit: f64,
}

/// Element-wise sums across all rows; all zero when nothing is selected
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionTotals {
    pub annual_volume: f64,
    pub annual_savings: f64,
    pub annual_cost: f64,
    pub annual_net_benefit: f64,
    pub monthly_volume: f64,
    pub monthly_savings: f64,
    pub monthly_cost: f64,
    pub monthly_net_benefit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub rows: Vec<ProjectionRow>,
    pub totals: ProjectionTotals,
}

/// Compute the projection for the given inputs.
///
/// Pure and idempotent: identical inputs yield identical rows and totals.
/// Row order follows the selection order.
pub fn calculate_projection(inputs: &CalculatorInputs) -> ProjectionResult {
    let errors = validate_inputs(inputs);
    let time_per_animal = if errors.time_per_animal.is_some() {
        0.0
    } else {
        parse_non_negative_number(&inputs.time_per_animal)
    };
    let hourly_wage = if errors.hourly_wage.is_some() {
        0.0
    } else {
        parse_non_negative_number(&inputs.hourly_wage)
    };

    let rows: Vec<ProjectionRow> = inputs
        .selected_species
        .iter()
        .map(|&species| {
            let annual_volume = if errors.volumes.contains_key(&species) {
                0.0
            } else {
                let raw = inputs.volumes.get(&species).map(String::as_str).unwrap_or("");
                parse_non_negative_number(raw)
            };
            let annual_heads = if annual_volume > 0.0 {
                calculate_heads(annual_volume, species.avg_hanging_weight())
            } else {
                0
            };
            let annual_savings = calculate_labor_value(annual_heads, time_per_animal, hourly_wage);
            let annual_cost = annual_volume * COST_PER_LB;
            let annual_net_benefit = annual_savings - annual_cost;

            ProjectionRow {
                species,
                annual_heads,
                annual_volume,
                annual_savings,
                annual_cost,
                annual_net_benefit,
                monthly_volume: annual_volume / MONTHS_PER_YEAR,
                monthly_savings: annual_savings / MONTHS_PER_YEAR,
                monthly_cost: annual_cost / MONTHS_PER_YEAR,
                monthly_net_benefit: annual_net_benefit / MONTHS_PER_YEAR,
            }
        })
        .collect();

    let totals = rows.iter().fold(ProjectionTotals::default(), |acc, row| {
        ProjectionTotals {
            annual_volume: acc.annual_volume + row.annual_volume,
            annual_savings: acc.annual_savings + row.annual_savings,
            annual_cost: acc.annual_cost + row.annual_cost,
            annual_net_benefit: acc.annual_net_benefit + row.annual_net_benefit,
            monthly_volume: acc.monthly_volume + row.monthly_volume,
            monthly_savings: acc.monthly_savings + row.monthly_savings,
            monthly_cost: acc.monthly_cost + row.monthly_cost,
            monthly_net_benefit: acc.monthly_net_benefit + row.monthly_net_benefit,
        }
    });

    ProjectionResult { rows, totals }
}
