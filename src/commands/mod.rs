//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Scale one ingredient's per-kg values by a sample size
//! - **list**: Show the selectable ingredients and the metric count
//! - **init**: Write a default `.suryacore.toml`
//!
//! Each handler loads configuration, then the dataset, exactly once and
//! passes the dataset by reference into the computation.

pub mod calculate;
pub mod init;
pub mod list;

pub use calculate::{handle_calculate, CalculateConfig};
pub use init::init_config;
pub use list::{handle_list, ListConfig};

use crate::config::{self, SuryacoreConfig};
use crate::dataset::{load_dataset, Dataset};
use anyhow::{Context, Result};
use std::path::Path;

/// Use the explicit config file when given, otherwise discover one.
pub fn resolve_config(explicit: Option<&Path>) -> Result<SuryacoreConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

pub(crate) fn open_dataset(path: &Path, config: &SuryacoreConfig) -> Result<Dataset> {
    load_dataset(path, config.duplicate_policy())
        .with_context(|| format!("Failed to load dataset from {}", path.display()))
}
