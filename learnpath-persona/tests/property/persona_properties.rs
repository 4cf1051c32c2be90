use learnpath_persona::bootstrap;
use learnpath_persona::{KMeans, KMeansParams, StandardScaler};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bootstrap_rows_stay_bounded(n in 0usize..200, seed in any::<u64>()) {
        let rows = bootstrap::feature_dataset(n, seed);
        prop_assert_eq!(rows.len(), n);
        for row in rows {
            prop_assert_eq!(row.len(), 6);
            for value in row {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn bootstrap_is_deterministic_per_seed(n in 1usize..100, seed in any::<u64>()) {
        prop_assert_eq!(
            bootstrap::feature_dataset(n, seed),
            bootstrap::feature_dataset(n, seed)
        );
    }

    #[test]
    fn scaled_dimensions_are_centered(
        rows in prop::collection::vec(
            prop::collection::vec(-100.0f64..100.0, 3),
            2..30,
        )
    ) {
        let scaler = StandardScaler::fit(&rows).unwrap();
        let scaled = scaler.transform(&rows).unwrap();
        let n = scaled.len() as f64;
        for d in 0..3 {
            let mean: f64 = scaled.iter().map(|row| row[d]).sum::<f64>() / n;
            prop_assert!(mean.abs() < 1e-6, "dimension {} mean was {}", d, mean);
        }
    }

    #[test]
    fn kmeans_assigns_every_row_a_valid_cluster(
        rows in prop::collection::vec(
            prop::collection::vec(0.0f64..1.0, 4),
            2..40,
        ),
        seed in any::<u64>(),
    ) {
        let params = KMeansParams {
            k: 2,
            max_iterations: 50,
            convergence_threshold: 1e-4,
            seed,
        };
        let model = KMeans::fit(&rows, &params).unwrap();
        for row in &rows {
            prop_assert!(model.predict(row).unwrap() < 2);
        }
    }
}
