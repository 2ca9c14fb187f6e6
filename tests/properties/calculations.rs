//! Property tests for the calculation primitives.

use proptest::prelude::*;

use farmgate::calculations::{calculate_heads, calculate_labor_value};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: non-positive weights always yield 0 heads.
    #[test]
    fn property_heads_zero_for_non_positive_inputs(
        total in -1.0e9_f64..=0.0,
        avg in -1.0e6_f64..=1.0e6,
    ) {
        prop_assert_eq!(calculate_heads(total, avg), 0);
        prop_assert_eq!(calculate_heads(avg.abs() + 1.0, -avg.abs()), 0);
    }

    /// PROPERTY: positive weights floor the quotient, never round up.
    #[test]
    fn property_heads_is_the_floored_quotient(
        total in 0.001_f64..1.0e9,
        avg in 0.001_f64..1.0e6,
    ) {
        let heads = calculate_heads(total, avg);
        prop_assert_eq!(heads, (total / avg).floor() as u64);
        // Floored: the counted animals never exceed the quotient.
        prop_assert!((heads as f64) <= total / avg);
    }

    /// PROPERTY: zero heads produce zero labor value for any assumptions.
    #[test]
    fn property_labor_value_zero_without_heads(
        minutes in -1.0e6_f64..1.0e6,
        wage in -1.0e6_f64..1.0e6,
    ) {
        prop_assert_eq!(calculate_labor_value(0, minutes, wage), 0.0);
    }

    /// PROPERTY: labor value is linear in heads.
    #[test]
    fn property_labor_value_scales_linearly(
        heads in 0_u64..10_000,
        minutes in 0.0_f64..600.0,
        wage in 0.0_f64..1000.0,
    ) {
        let one = calculate_labor_value(1, minutes, wage);
        let many = calculate_labor_value(heads, minutes, wage);
        prop_assert!((many - one * heads as f64).abs() < 1e-6 * (1.0 + many.abs()));
    }
}
