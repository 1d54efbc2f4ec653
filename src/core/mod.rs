//! Core value types shared by the scaler, the ranking step and the writers.

use serde::{Deserialize, Serialize};

/// A single metric value in a scaled result.
///
/// Missing source data is carried as `Absent` instead of a numeric sentinel,
/// so no arithmetic can accidentally be performed on it. Serializes as a
/// JSON number or `null`.
///
/// Converting from `Option<f64>` only yields `Value` for finite numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum MetricValue {
    Value(f64),
    Absent,
}

impl MetricValue {
    pub fn as_option(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Self::Value(v),
            _ => Self::Absent,
        }
    }
}

impl From<MetricValue> for Option<f64> {
    fn from(value: MetricValue) -> Self {
        value.as_option()
    }
}

/// One named entry of a scaled result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub name: String,
    pub value: MetricValue,
}

/// Metric name → scaled value, in dataset column order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaledResult {
    entries: Vec<MetricEntry>,
}

impl ScaledResult {
    pub fn get(&self, metric: &str) -> Option<MetricValue> {
        self.entries
            .iter()
            .find(|entry| entry.name == metric)
            .map(|entry| entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricEntry> {
        self.entries.iter()
    }
}

impl FromIterator<(String, MetricValue)> for ScaledResult {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| MetricEntry { name, value })
                .collect(),
        }
    }
}

/// Outcome of looking an ingredient up and scaling it.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Found(ScaledResult),
    /// No row matched the requested name, case-insensitively.
    NotFound { name: String },
}

impl Lookup {
    pub fn found(self) -> Option<ScaledResult> {
        match self {
            Self::Found(result) => Some(result),
            Self::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A present metric value selected for the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedMetric {
    pub name: String,
    pub value: f64,
}
