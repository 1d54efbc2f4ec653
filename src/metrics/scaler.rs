use crate::core::{Lookup, MetricValue, ScaledResult};
use crate::dataset::Dataset;

/// Decimal places kept in every scaled value.
pub const DECIMAL_PLACES: i32 = 2;

/// Round to [`DECIMAL_PLACES`], half away from zero. Negative zero becomes zero.
///
/// Values too large to shift by the decimal factor carry no fractional digits
/// and are returned unchanged.
pub fn round_metric(value: f64) -> f64 {
    let factor = 10f64.powi(DECIMAL_PLACES);
    let shifted = value * factor;
    if !shifted.is_finite() {
        return value;
    }
    let rounded = shifted.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Look `name` up (case-insensitively, first match wins) and scale every
/// metric of the row by `scale_factor`.
///
/// The scale is not range-checked here; callers constrain user input.
/// Negative and fractional factors are multiplied through like any other.
/// A product that is not a finite number (an infinite or NaN factor) is
/// reported as `Absent`.
pub fn compute_metrics(dataset: &Dataset, name: &str, scale_factor: f64) -> Lookup {
    let Some(row) = dataset.find(name) else {
        return Lookup::NotFound {
            name: name.to_string(),
        };
    };

    let result: ScaledResult = dataset
        .schema()
        .metric_columns()
        .zip(&row.metrics)
        .map(|(metric, raw)| {
            let value = match MetricValue::from(*raw) {
                MetricValue::Value(v) => MetricValue::from(Some(round_metric(v * scale_factor))),
                MetricValue::Absent => MetricValue::Absent,
            };
            (metric.to_string(), value)
        })
        .collect();

    Lookup::Found(result)
}
