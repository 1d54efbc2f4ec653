use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dataset::DuplicatePolicy;
use crate::errors::{Error, Result};
use crate::metrics::DEFAULT_CHART_ITEMS;
use crate::output::OutputFormat;

/// Root configuration structure for suryacore
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SuryacoreConfig {
    /// Reference dataset location and load policy
    #[serde(default)]
    pub data: Option<DataConfig>,

    /// Sample size bounds used to validate user input
    #[serde(default)]
    pub sample: Option<SampleConfig>,

    /// Bar chart settings
    #[serde(default)]
    pub chart: Option<ChartConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub duplicate_names: DuplicatePolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            duplicate_names: DuplicatePolicy::default(),
        }
    }
}

/// Sample size in kg. The scaler accepts any factor; these bounds are
/// applied to what a user may ask for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SampleConfig {
    #[serde(default = "default_sample_min")]
    pub min: f64,
    #[serde(default = "default_sample_max")]
    pub max: f64,
    #[serde(default = "default_sample_size")]
    pub default: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            min: default_sample_min(),
            max: default_sample_max(),
            default: default_sample_size(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

pub fn default_data_path() -> PathBuf {
    PathBuf::from("data/ingredients.csv")
}

pub fn default_sample_min() -> f64 {
    1.0
}

pub fn default_sample_max() -> f64 {
    10.0
}

pub fn default_sample_size() -> f64 {
    3.0
}

pub fn default_max_items() -> usize {
    DEFAULT_CHART_ITEMS
}

impl SuryacoreConfig {
    pub fn data_path(&self) -> PathBuf {
        self.data.clone().unwrap_or_default().path
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.data
            .as_ref()
            .map(|d| d.duplicate_names)
            .unwrap_or_default()
    }

    pub fn sample(&self) -> SampleConfig {
        self.sample.unwrap_or_default()
    }

    pub fn chart_max_items(&self) -> usize {
        self.chart.unwrap_or_default().max_items
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    /// Reject values that would make every request invalid.
    pub fn validate(&self) -> Result<()> {
        let sample = self.sample();
        if sample.min.is_nan() || sample.min <= 0.0 {
            return Err(Error::configuration(format!(
                "sample.min must be positive, got {}",
                sample.min
            )));
        }
        if sample.min > sample.max {
            return Err(Error::configuration(format!(
                "sample.min ({}) is greater than sample.max ({})",
                sample.min, sample.max
            )));
        }
        if sample.default < sample.min || sample.default > sample.max {
            return Err(Error::configuration(format!(
                "sample.default ({}) is outside {}..={}",
                sample.default, sample.min, sample.max
            )));
        }
        if self.chart_max_items() == 0 {
            return Err(Error::configuration("chart.max_items must be at least 1"));
        }
        Ok(())
    }
}
