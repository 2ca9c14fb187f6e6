#![no_main]

use libfuzzer_sys::fuzz_target;

use farmgate::species::Species;
use farmgate::state::CalculatorInputs;
use farmgate::validation::{parse_non_negative_number, validate_inputs};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Fuzz field parsing and validation - neither should ever panic
        let _ = parse_non_negative_number(raw);

        let inputs = CalculatorInputs {
            selected_species: Species::ALL.to_vec(),
            volumes: Species::ALL.iter().map(|s| (*s, raw.to_string())).collect(),
            time_per_animal: raw.to_string(),
            hourly_wage: raw.to_string(),
        };
        let _ = validate_inputs(&inputs);
    }
});
