//! Calculator reference constants
//!
//! Fixed assumptions shared by validation, projection, and the default state.

/// Processing cost charged per pound of hanging weight
pub const COST_PER_LB: f64 = 0.02;

/// Default time savings per animal, in minutes (raw input form)
pub const DEFAULT_TIME_PER_ANIMAL_MINUTES: &str = "45";

/// Default average hourly wage, in dollars (raw input form)
pub const DEFAULT_HOURLY_WAGE: &str = "25";

/// Upper bound for a single species' annual volume, in pounds
pub const MAX_ANNUAL_VOLUME: f64 = 1_000_000.0;

/// Upper bound for time savings per animal, in minutes
pub const MAX_TIME_PER_ANIMAL_MINUTES: f64 = 600.0;

/// Upper bound for the hourly wage, in dollars
pub const MAX_HOURLY_WAGE: f64 = 1_000.0;

/// Months used to derive monthly figures from annual ones
pub const MONTHS_PER_YEAR: f64 = 12.0;
