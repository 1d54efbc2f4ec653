// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod formatting;
pub mod metrics;
pub mod observability;
pub mod output;

// Re-export commonly used types
pub use crate::core::{Lookup, MetricEntry, MetricValue, RankedMetric, ScaledResult};

pub use crate::dataset::{
    load_dataset, read_dataset, Dataset, DuplicatePolicy, EntityRow, Schema, COST_COLUMN,
    NAME_COLUMN,
};

pub use crate::metrics::{compute_metrics, rank_for_chart, round_metric, DEFAULT_CHART_ITEMS};

pub use crate::config::SuryacoreConfig;
pub use crate::errors::{Error, Result};
pub use crate::output::{create_writer, CalculationReport, OutputFormat, OutputWriter};
