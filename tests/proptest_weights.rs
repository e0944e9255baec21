//! Property-based tests for weight normalization.
//!
//! Ensures the normalization policies handle arbitrary input without
//! panicking, and that key invariants hold across random inputs.

use proptest::prelude::*;
use icp_tools::weights::{
    rescale_proportional, OverallCategory, OverallWeights, WeightStatus, WEIGHT_TARGET,
};

/// Rounding can leave a rescaled group off target by at most half a point
/// per value.
fn max_drift(len: usize) -> u32 {
    (len as u32 + 1) / 2
}

/// Groups of 2..=8 weights that sum to exactly 100, built from sorted cut
/// points so no case is rejected.
fn balanced_group() -> impl Strategy<Value = Vec<u32>> {
    (2usize..=8)
        .prop_flat_map(|len| prop::collection::vec(0u32..=100, len - 1))
        .prop_map(|mut cuts| {
            cuts.sort_unstable();
            let mut parts = Vec::with_capacity(cuts.len() + 1);
            let mut prev = 0;
            for cut in cuts {
                parts.push(cut - prev);
                prev = cut;
            }
            parts.push(100 - prev);
            parts
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn rescale_lands_near_target(values in prop::collection::vec(0u32..=1000, 2..=8)) {
        let mut values = values;
        prop_assume!(values.iter().sum::<u32>() > 0);

        rescale_proportional("test", &mut values).unwrap();

        let total: u32 = values.iter().sum();
        let drift = max_drift(values.len());
        prop_assert!(
            total >= WEIGHT_TARGET - drift && total <= WEIGHT_TARGET + drift,
            "total {total} outside accepted drift for {values:?}"
        );
    }

    #[test]
    fn rescale_preserves_order(values in prop::collection::vec(1u32..=500, 2..=8)) {
        let mut rescaled = values.clone();
        rescale_proportional("test", &mut rescaled).unwrap();

        // Scaling and rounding are both monotone, so relative order survives
        for i in 0..values.len() {
            for j in 0..values.len() {
                if values[i] <= values[j] {
                    prop_assert!(
                        rescaled[i] <= rescaled[j],
                        "order of {:?} not preserved in {rescaled:?}", values
                    );
                }
            }
        }
    }

    #[test]
    fn rescale_is_identity_on_balanced_groups(values in balanced_group()) {
        let mut rescaled = values.clone();
        rescale_proportional("test", &mut rescaled).unwrap();

        // The scale factor is exactly 1.0, so nothing moves
        prop_assert_eq!(rescaled, values);
    }

    #[test]
    fn rescale_second_pass_stays_within_drift(values in prop::collection::vec(0u32..=1000, 2..=8)) {
        let mut once = values;
        prop_assume!(once.iter().sum::<u32>() > 0);
        rescale_proportional("test", &mut once).unwrap();

        let mut twice = once.clone();
        rescale_proportional("test", &mut twice).unwrap();

        // A second pass corrects only rounding drift, so no value can move
        // farther than the group's accepted drift. A balanced first pass
        // moves nothing at all.
        let bound = max_drift(once.len());
        for (before, after) in once.iter().zip(&twice) {
            prop_assert!(
                before.abs_diff(*after) <= bound,
                "second pass moved {before} to {after} in {once:?}"
            );
        }
        if once.iter().sum::<u32>() == WEIGHT_TARGET {
            prop_assert_eq!(&twice, &once);
        }
    }

    #[test]
    fn rescale_keeps_values_in_range(values in prop::collection::vec(0u32..=10_000, 2..=8)) {
        let mut values = values;
        prop_assume!(values.iter().sum::<u32>() > 0);

        rescale_proportional("test", &mut values).unwrap();
        prop_assert!(values.iter().all(|&v| v <= WEIGHT_TARGET));
    }

    #[test]
    fn rescale_preserves_zero(values in prop::collection::vec(0u32..=1000, 3..=8)) {
        let mut values = values;
        prop_assume!(values.iter().sum::<u32>() > 0);
        values[0] = 0;
        prop_assume!(values.iter().sum::<u32>() > 0);

        rescale_proportional("test", &mut values).unwrap();
        prop_assert_eq!(values[0], 0);
    }

    #[test]
    fn redistribute_never_panics(
        company in 0u32..=200,
        individual in 0u32..=200,
        technical in 0u32..=200,
        market in 0u32..=200,
        value in 0u32..=200,
        pick in 0usize..4,
    ) {
        let mut weights = OverallWeights { company, individual, technical, market };
        let category = OverallCategory::all()[pick];

        let status = weights.set_and_redistribute(category, value);

        // Changed category holds its clamped value
        prop_assert_eq!(weights.get(category), value.min(WEIGHT_TARGET));
        prop_assert_eq!(status, weights.status());
        prop_assert!(weights.values().iter().all(|&v| v <= WEIGHT_TARGET));
    }

    #[test]
    fn redistribute_lands_near_target(value in 0u32..=100, pick in 0usize..4) {
        let mut weights = OverallWeights::default();
        let category = OverallCategory::all()[pick];

        let status = weights.set_and_redistribute(category, value);

        // value + 3 * round((100 - value) / 3) is within 2 of 100
        prop_assert!(
            status.total.abs_diff(WEIGHT_TARGET) <= 2,
            "total {} for value {value}", status.total
        );
    }

    #[test]
    fn weight_status_total_is_sum(values in prop::collection::vec(0u32..=100, 0..=8)) {
        let status = WeightStatus::from_values(&values);
        prop_assert_eq!(status.total, values.iter().sum::<u32>());
        prop_assert_eq!(status.balanced, status.total == WEIGHT_TARGET);
    }
}
