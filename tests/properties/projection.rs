//! Property tests for the projection engine.

use std::collections::BTreeMap;

use proptest::prelude::*;

use farmgate::projection::calculate_projection;
use farmgate::species::Species;
use farmgate::state::CalculatorInputs;
use farmgate::validation::validate_inputs;

fn field_string() -> impl Strategy<Value = String> {
    // Mix of plausible numbers, blanks, and garbage: projections must be
    // total over all of them.
    prop_oneof![
        (0.0_f64..2_000_000.0).prop_map(|v| format!("{v:.2}")),
        (0_u64..2_000_000).prop_map(|v| v.to_string()),
        Just(String::new()),
        Just("   ".to_string()),
        Just("-5".to_string()),
        Just("abc".to_string()),
        Just("1e4".to_string()),
        Just("inf".to_string()),
    ]
}

fn species_subset() -> impl Strategy<Value = Vec<Species>> {
    proptest::sample::subsequence(Species::ALL.to_vec(), 0..=Species::ALL.len())
}

fn arbitrary_inputs() -> impl Strategy<Value = CalculatorInputs> {
    (
        species_subset(),
        proptest::collection::vec(field_string(), Species::ALL.len()),
        field_string(),
        field_string(),
    )
        .prop_map(|(selected, volumes, time, wage)| {
            let volumes: BTreeMap<Species, String> = Species::ALL
                .iter()
                .copied()
                .zip(volumes)
                .collect();
            CalculatorInputs {
                selected_species: selected,
                volumes,
                time_per_animal: time,
                hourly_wage: wage,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one row per selected species, in selection order.
    #[test]
    fn property_one_row_per_selected_species(inputs in arbitrary_inputs()) {
        let result = calculate_projection(&inputs);
        prop_assert_eq!(result.rows.len(), inputs.selected_species.len());
        for (row, species) in result.rows.iter().zip(&inputs.selected_species) {
            prop_assert_eq!(row.species, *species);
        }
    }

    /// PROPERTY: every figure is finite; nothing degrades to NaN.
    #[test]
    fn property_projection_is_always_finite(inputs in arbitrary_inputs()) {
        let result = calculate_projection(&inputs);
        for row in &result.rows {
            prop_assert!(row.annual_volume.is_finite());
            prop_assert!(row.annual_savings.is_finite());
            prop_assert!(row.annual_cost.is_finite());
            prop_assert!(row.annual_net_benefit.is_finite());
            prop_assert!(row.annual_volume >= 0.0);
            prop_assert!(row.annual_savings >= 0.0);
            prop_assert!(row.annual_cost >= 0.0);
        }
        prop_assert!(result.totals.annual_net_benefit.is_finite());
    }

    /// PROPERTY: totals are the element-wise sums of the rows.
    #[test]
    fn property_totals_are_sums(inputs in arbitrary_inputs()) {
        let result = calculate_projection(&inputs);

        let volume: f64 = result.rows.iter().map(|r| r.annual_volume).sum();
        let savings: f64 = result.rows.iter().map(|r| r.annual_savings).sum();
        let cost: f64 = result.rows.iter().map(|r| r.annual_cost).sum();
        let net: f64 = result.rows.iter().map(|r| r.annual_net_benefit).sum();

        prop_assert_eq!(result.totals.annual_volume, volume);
        prop_assert_eq!(result.totals.annual_savings, savings);
        prop_assert_eq!(result.totals.annual_cost, cost);
        prop_assert_eq!(result.totals.annual_net_benefit, net);
    }

    /// PROPERTY: identical inputs produce identical projections.
    #[test]
    fn property_projection_is_idempotent(inputs in arbitrary_inputs()) {
        prop_assert_eq!(calculate_projection(&inputs), calculate_projection(&inputs));
    }

    /// PROPERTY: a field with a validation error contributes exactly 0.
    #[test]
    fn property_error_fields_contribute_zero(inputs in arbitrary_inputs()) {
        let errors = validate_inputs(&inputs);
        let result = calculate_projection(&inputs);

        for row in &result.rows {
            if errors.volumes.contains_key(&row.species) {
                prop_assert_eq!(row.annual_volume, 0.0);
                prop_assert_eq!(row.annual_heads, 0);
                prop_assert_eq!(row.annual_cost, 0.0);
            }
        }
        if errors.time_per_animal.is_some() || errors.hourly_wage.is_some() {
            for row in &result.rows {
                prop_assert_eq!(row.annual_savings, 0.0);
            }
        }
    }

    /// PROPERTY: validation itself never panics on arbitrary field text.
    #[test]
    fn property_validation_never_panics(
        selected in species_subset(),
        raw in ".{0,64}",
    ) {
        let inputs = CalculatorInputs {
            selected_species: selected,
            volumes: Species::ALL.iter().map(|s| (*s, raw.clone())).collect(),
            time_per_animal: raw.clone(),
            hourly_wage: raw.clone(),
        };
        let _ = validate_inputs(&inputs);
        let _ = calculate_projection(&inputs);
    }
}
