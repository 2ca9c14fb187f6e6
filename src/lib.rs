//! Farmgate - meat processor value calculator
//!
//! Computes labor-savings and cost projections from annual processing
//! volumes across animal species. The library is a pure core: a state
//! reducer, a validation pass, a projection engine, and a versioned
//! persistence codec. Rendering and prompting live in the CLI binary.

pub mod calculations;
pub mod constants;
pub mod error;
pub mod export;
pub mod format;
pub mod presets;
pub mod projection;
pub mod report;
pub mod species;
pub mod state;
pub mod storage;
pub mod timer;
pub mod validation;

// Re-exports for convenience
pub use calculations::{calculate_heads, calculate_labor_value};
pub use error::{FarmgateError, FarmgateResult};
pub use presets::{builtin_presets, find_preset, SpeciesPreset};
pub use projection::{calculate_projection, ProjectionResult, ProjectionRow, ProjectionTotals};
pub use species::Species;
pub use state::{
    reduce, CalculatorAction, CalculatorInputs, CalculatorState, Comparison, ScenarioSlot,
    ScenarioSnapshot,
};
pub use storage::{Storage, STORAGE_VERSION};
pub use validation::{
    has_validation_errors, parse_non_negative_number, validate_inputs, ValidationErrors,
};
