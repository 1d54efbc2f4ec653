use crate::core::{MetricValue, RankedMetric, ScaledResult};

/// Number of bars shown when no limit is configured.
pub const DEFAULT_CHART_ITEMS: usize = 20;

/// Present values only, largest first, at most `max_items` of them.
///
/// The sort is stable, so equal values keep their column order. An empty
/// return means there is nothing to chart.
pub fn rank_for_chart(result: &ScaledResult, max_items: usize) -> Vec<RankedMetric> {
    let mut ranked: Vec<RankedMetric> = result
        .iter()
        .filter_map(|entry| match entry.value {
            MetricValue::Value(value) if !value.is_nan() => Some(RankedMetric {
                name: entry.name.clone(),
                value,
            }),
            _ => None,
        })
        .collect();

    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(max_items);
    ranked
}
