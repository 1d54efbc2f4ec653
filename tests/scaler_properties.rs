//! Property-based tests for metric scaling and chart ranking
//!
//! These tests verify invariants that should hold for all inputs:
//! - Scaling by 1 reproduces the stored values (rounded to 2 places)
//! - Lookup ignores the case of the requested name
//! - Names not in the dataset always produce NotFound
//! - Scaled values are the rounded product and scale linearly
//! - Ranking drops absent values, sorts descending and respects the limit

mod common;

use proptest::prelude::*;
use suryacore::{
    compute_metrics, rank_for_chart, round_metric, Dataset, EntityRow, Lookup, MetricValue,
    ScaledResult, Schema,
};

fn single_row_dataset(values: &[Option<f64>]) -> Dataset {
    let metrics: Vec<String> = (0..values.len()).map(|i| format!("M{i}")).collect();
    Dataset::new(
        Schema::with_metrics(metrics),
        vec![EntityRow::new("Maize", Some(30.0), values.to_vec())],
    )
    .unwrap()
}

fn metric_values() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::of(-1000.0f64..1000.0), 0..12)
}

/// Flip the case of each character according to `mask`.
fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn test_scale_by_one_is_identity_for_fixture() {
    let dataset = common::fixture_dataset();
    for row in dataset.rows() {
        let first = dataset.find(&row.name).unwrap();
        let result = compute_metrics(&dataset, &row.name, 1.0).found().unwrap();
        let metrics: Vec<&str> = dataset.schema().metric_columns().collect();

        assert_eq!(result.len(), metrics.len());
        for (metric, raw) in metrics.iter().zip(&first.metrics) {
            let expected = match raw {
                Some(v) => MetricValue::Value(round_metric(*v)),
                None => MetricValue::Absent,
            };
            assert_eq!(result.get(metric), Some(expected), "{} / {}", row.name, metric);
        }
    }
}

#[test]
fn test_documented_maize_example() {
    let dataset = Dataset::new(
        Schema::with_metrics(["PROTEIN", "FIBER"]),
        vec![EntityRow::new("Maize", Some(30.0), vec![Some(8.5), None])],
    )
    .unwrap();

    let result = compute_metrics(&dataset, "maize", 3.0).found().unwrap();
    assert_eq!(result.get("PROTEIN"), Some(MetricValue::Value(25.5)));
    assert_eq!(result.get("FIBER"), Some(MetricValue::Absent));

    assert_eq!(
        compute_metrics(&dataset, "Soy", 3.0),
        Lookup::NotFound {
            name: "Soy".to_string()
        }
    );
}

#[test]
fn test_documented_ranking_example() {
    let result: ScaledResult = vec![
        ("A".to_string(), MetricValue::Value(5.0)),
        ("B".to_string(), MetricValue::Absent),
        ("C".to_string(), MetricValue::Value(10.0)),
    ]
    .into_iter()
    .collect();

    let ranked: Vec<(String, f64)> = rank_for_chart(&result, 20)
        .into_iter()
        .map(|r| (r.name, r.value))
        .collect();
    assert_eq!(
        ranked,
        vec![("C".to_string(), 10.0), ("A".to_string(), 5.0)]
    );
}

proptest! {
    /// Property: lookup is case-insensitive on the requested name
    #[test]
    fn prop_lookup_is_case_insensitive(
        mask in prop::collection::vec(any::<bool>(), 1..16),
        scale in 0.1f64..10.0,
    ) {
        let dataset = common::fixture_dataset();
        for name in dataset.ingredient_names() {
            let recased = recase(name, &mask);
            prop_assert_eq!(
                compute_metrics(&dataset, name, scale),
                compute_metrics(&dataset, &recased, scale)
            );
        }
    }

    /// Property: names absent from the dataset are always NotFound
    #[test]
    fn prop_unknown_names_not_found(name in "[A-Za-z ]{1,20}") {
        let dataset = common::fixture_dataset();
        prop_assume!(dataset.find(&name).is_none());
        prop_assert_eq!(
            compute_metrics(&dataset, &name, 3.0),
            Lookup::NotFound { name: name.clone() }
        );
    }

    /// Property: each present value is round(v * scale) and Absent stays Absent
    #[test]
    fn prop_scaled_value_is_rounded_product(
        values in metric_values(),
        scale in -20.0f64..20.0,
    ) {
        let dataset = single_row_dataset(&values);
        let result = compute_metrics(&dataset, "MAIZE", scale).found().unwrap();

        prop_assert_eq!(result.len(), values.len());
        for (entry, raw) in result.iter().zip(&values) {
            match raw {
                Some(v) => {
                    prop_assert_eq!(entry.value, MetricValue::Value(round_metric(v * scale)))
                }
                None => prop_assert_eq!(entry.value, MetricValue::Absent),
            }
        }
    }

    /// Property: doubling the scale doubles the output within rounding tolerance
    #[test]
    fn prop_doubling_scale_doubles_output(
        values in metric_values(),
        scale in 0.01f64..10.0,
    ) {
        let dataset = single_row_dataset(&values);
        let single = compute_metrics(&dataset, "Maize", scale).found().unwrap();
        let double = compute_metrics(&dataset, "Maize", scale * 2.0).found().unwrap();

        for (a, b) in single.iter().zip(double.iter()) {
            if let (MetricValue::Value(x), MetricValue::Value(y)) = (a.value, b.value) {
                prop_assert!((y - 2.0 * x).abs() <= 0.0151, "{} vs {}", y, 2.0 * x);
            } else {
                prop_assert!(a.value.is_absent() && b.value.is_absent());
            }
        }
    }

    /// Property: ranking never includes Absent, is sorted descending and
    /// never exceeds the requested size
    #[test]
    fn prop_ranking_invariants(
        values in metric_values(),
        max_items in 0usize..15,
    ) {
        let result: ScaledResult = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("M{i}"), MetricValue::from(*v)))
            .collect();
        let ranked = rank_for_chart(&result, max_items);

        let present = values.iter().filter(|v| v.is_some()).count();
        prop_assert_eq!(ranked.len(), present.min(max_items));
        for item in &ranked {
            prop_assert!(!result.get(&item.name).unwrap().is_absent());
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }
}
