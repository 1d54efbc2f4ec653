//! Scaling per-kg reference values and ranking the results for charting.

mod ranking;
mod scaler;

pub use ranking::{rank_for_chart, DEFAULT_CHART_ITEMS};
pub use scaler::{compute_metrics, round_metric, DECIMAL_PLACES};
