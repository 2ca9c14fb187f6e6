//! CSV export
//!
//! Flattens a projection into the tabular report consumed by spreadsheets:
//! assumptions, annual totals, monthly totals, then the per-species
//! breakdown. Pure over its arguments; the caller supplies the timestamp.

use chrono::{DateTime, Utc};
use csv::WriterBuilder;

use crate::error::{FarmgateError, FarmgateResult};
use crate::format::format_amount;
use crate::projection::ProjectionResult;
use crate::state::CalculatorInputs;

/// Suggested file name for an export generated on `date`
pub fn csv_file_name(date: DateTime<Utc>) -> String {
    format!("farmgate-projection-{}.csv", date.format("%Y-%m-%d"))
}

/// Render the projection as CSV text.
pub fn projection_csv(
    projection: &ProjectionResult,
    inputs: &CalculatorInputs,
    generated_at: DateTime<Utc>,
) -> FarmgateResult<String> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    wtr.write_record(["Farmgate Value Calculator Export"])?;
    wtr.write_record(["Generated At", &generated_at.to_rfc3339()])?;
    wtr.write_record([""])?;

    wtr.write_record(["Assumptions"])?;
    wtr.write_record(["Time Savings per Animal (minutes)", &inputs.time_per_animal])?;
    wtr.write_record(["Average Hourly Wage ($)", &inputs.hourly_wage])?;
    wtr.write_record([""])?;

    let totals = &projection.totals;
    wtr.write_record(["Annual Totals"])?;
    wtr.write_record(["Annual Volume (lbs)", &format_amount(totals.annual_volume)])?;
    wtr.write_record(["Annual Savings ($)", &format_amount(totals.annual_savings)])?;
    wtr.write_record(["Annual Cost ($)", &format_amount(totals.annual_cost)])?;
    wtr.write_record([
        "Annual Net Benefit ($)",
        &format_amount(totals.annual_net_benefit),
    ])?;
    wtr.write_record([""])?;

    wtr.write_record(["Monthly Totals"])?;
    wtr.write_record(["Monthly Volume (lbs)", &format_amount(totals.monthly_volume)])?;
    wtr.write_record(["Monthly Savings ($)", &format_amount(totals.monthly_savings)])?;
    wtr.write_record(["Monthly Cost ($)", &format_amount(totals.monthly_cost)])?;
    wtr.write_record([
        "Monthly Net Benefit ($)",
        &format_amount(totals.monthly_net_benefit),
    ])?;
    wtr.write_record([""])?;

    wtr.write_record(["Species Breakdown"])?;
    wtr.write_record([
        "Species",
        "Annual Heads",
        "Annual Volume (lbs)",
        "Annual Savings ($)",
        "Annual Cost ($)",
        "Annual Net Benefit ($)",
        "Monthly Volume (lbs)",
        "Monthly Savings ($)",
        "Monthly Cost ($)",
        "Monthly Net Benefit ($)",
    ])?;

    for row in &projection.rows {
        wtr.write_record([
            row.species.as_str(),
            &format_amount(row.annual_heads as f64),
            &format_amount(row.annual_volume),
            &format_amount(row.annual_savings),
            &format_amount(row.annual_cost),
            &format_amount(row.annual_net_benefit),
            &format_amount(row.monthly_volume),
            &format_amount(row.monthly_savings),
            &format_amount(row.monthly_cost),
            &format_amount(row.monthly_net_benefit),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| FarmgateError::Io(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
