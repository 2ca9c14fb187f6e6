//! Input validation
//!
//! Bounds-checks the raw string fields. A field with an error is displayed
//! to the user and treated as 0 downstream; it never blocks a projection.

use std::collections::BTreeMap;

use crate::constants::{MAX_ANNUAL_VOLUME, MAX_HOURLY_WAGE, MAX_TIME_PER_ANIMAL_MINUTES};
use crate::format::format_bound;
use crate::species::Species;
use crate::state::CalculatorInputs;

/// Field-scoped validation messages. Absent entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub volumes: BTreeMap<Species, String>,
    pub time_per_animal: Option<String>,
    pub hourly_wage: Option<String>,
}

/// Check one bounded numeric field. Blank input is "unset", not an error.
fn validate_bounded_number(value: &str, label: &str, max: f64) -> Option<String> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return None;
    }

    let parsed: f64 = match normalized.parse() {
        Ok(v) => v,
        Err(_) => return Some(format!("{label} must be a valid number.")),
    };
    if !parsed.is_finite() {
        return Some(format!("{label} must be a valid number."));
    }

    if parsed < 0.0 {
        return Some(format!("{label} cannot be negative."));
    }

    if parsed > max {
        return Some(format!("{label} must be {} or less.", format_bound(max)));
    }

    None
}

/// Parse a raw field for computation: 0 for anything unparsable or
/// negative. Max bounds are validation's concern, not parsing's.
pub fn parse_non_negative_number(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => parsed,
        _ => 0.0,
    }
}

/// Validate every bounded field of the inputs.
///
/// Only currently-selected species are checked for volume; stale volume
/// strings for unselected species are ignored. Pure and total.
pub fn validate_inputs(inputs: &CalculatorInputs) -> ValidationErrors {
    let mut volumes = BTreeMap::new();
    for species in &inputs.selected_species {
        let raw = inputs.volumes.get(species).map(String::as_str).unwrap_or("");
        if let Some(error) = validate_bounded_number(raw, "Annual volume", MAX_ANNUAL_VOLUME) {
            volumes.insert(*species, error);
        }
    }

    ValidationErrors {
        volumes,
        time_per_animal: validate_bounded_number(
            &inputs.time_per_animal,
            "Time savings per animal",
            MAX_TIME_PER_ANIMAL_MINUTES,
        ),
        hourly_wage: validate_bounded_number(&inputs.hourly_wage, "Hourly wage", MAX_HOURLY_WAGE),
    }
}

/// True iff any field currently carries an error
pub fn has_validation_errors(errors: &ValidationErrors) -> bool {
    errors.time_per_animal.is_some() || errors.hourly_wage.is_some() || !errors.volumes.is_empty()
}
