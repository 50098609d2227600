//! Property-based tests across the public analysis API
//!
//! Properties covered:
//! 1. Scale and shift invariance of CV and Cohen's d
//! 2. Mann-Whitney U complement symmetry
//! 3. Outlier fences
//! 4. Test selection decision table
//! 5. Ranking order and positions
//! 6. Gesture error counting bounds

use proptest::prelude::*;
use suturestat::dispersion::coefficient_of_variation;
use suturestat::gestures::count_errors;
use suturestat::hypothesis::{
    cohens_d, interpret_effect_size, mann_whitney_u, select_test, TestKind, TestResult,
};
use suturestat::outliers::detect_outliers;
use suturestat::ranking::{rank_metrics, MetricOutcome};

fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, 2..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_cv_is_scale_free(
        sample in prop::collection::vec(1.0f64..1000.0, 2..40),
        scale in 0.01f64..100.0,
    ) {
        let scaled: Vec<f64> = sample.iter().map(|x| x * scale).collect();
        let cv = coefficient_of_variation(&sample).unwrap();
        let scaled_cv = coefficient_of_variation(&scaled).unwrap();
        prop_assert!((cv - scaled_cv).abs() < 1e-9 * cv.max(1.0));
    }

    #[test]
    fn prop_mann_whitney_complement(a in sample_strategy(), b in sample_strategy()) {
        if let (Ok(ab), Ok(ba)) = (mann_whitney_u(&a, &b), mann_whitney_u(&b, &a)) {
            let product = (a.len() * b.len()) as f64;
            prop_assert!((ab.statistic + ba.statistic - product).abs() < 1e-9);
            prop_assert!((ab.p_value - ba.p_value).abs() < 1e-12);
            prop_assert!((0.0..=1.0).contains(&ab.p_value));
        }
    }

    #[test]
    fn prop_cohens_d_ignores_common_shift(
        a in sample_strategy(),
        b in sample_strategy(),
        shift in -500.0f64..500.0,
    ) {
        let shifted_a: Vec<f64> = a.iter().map(|x| x + shift).collect();
        let shifted_b: Vec<f64> = b.iter().map(|x| x + shift).collect();
        if let (Ok(d), Ok(shifted)) = (cohens_d(&a, &b), cohens_d(&shifted_a, &shifted_b)) {
            prop_assert!((d - shifted).abs() < 1e-6 * d.abs().max(1.0));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_outliers_lie_outside_fences(sample in sample_strategy()) {
        let report = detect_outliers(&sample).unwrap();
        for x in &report.outliers {
            prop_assert!(*x < report.lower_fence || *x > report.upper_fence);
        }
        prop_assert!(report.lower_fence <= report.q1);
        prop_assert!(report.upper_fence >= report.q3);
    }

    #[test]
    fn prop_selection_depends_only_on_flags(both_normal: bool, equal_variance: bool) {
        let kind = select_test(both_normal, equal_variance);
        let expected = match (both_normal, equal_variance) {
            (true, true) => TestKind::IndependentT,
            (true, false) => TestKind::WelchT,
            (false, _) => TestKind::MannWhitneyU,
        };
        prop_assert_eq!(kind, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_ranking_is_descending_with_dense_positions(
        entries in prop::collection::vec((0.0f64..1.0, -5.0f64..5.0), 0..12),
    ) {
        let outcomes = entries
            .iter()
            .enumerate()
            .map(|(i, &(p_value, d))| MetricOutcome::Completed {
                metric_name: format!("metric_{i}"),
                result: TestResult {
                    test: TestKind::WelchT,
                    statistic: 0.0,
                    p_value,
                    significant: p_value < 0.05,
                    cohens_d: d,
                    effect_category: interpret_effect_size(d),
                },
            })
            .collect();
        let ranking = rank_metrics(outcomes);

        prop_assert_eq!(ranking.ranked.len(), entries.len());
        for (i, metric) in ranking.ranked.iter().enumerate() {
            prop_assert_eq!(metric.rank_position, i + 1);
        }
        for pair in ranking.ranked.windows(2) {
            prop_assert!(pair[0].rank_score >= pair[1].rank_score);
            // A significant metric is never below a non-significant one
            prop_assert!(pair[0].significant || !pair[1].significant);
        }
    }

    #[test]
    fn prop_error_count_is_bounded(sequence in prop::collection::vec(1u8..=5, 0..30)) {
        let result = count_errors(&sequence);
        prop_assert!(result.count <= 4);
        prop_assert_eq!(result.count, result.reasons.len());
    }
}
