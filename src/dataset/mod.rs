//! Read-only ingredient reference table.
//!
//! A [`Dataset`] is built once by the entry point (normally through
//! [`load_dataset`]) and then passed by reference into every computation.
//! Nothing mutates it after construction, so it can be shared freely.

mod loader;
mod schema;

pub use loader::{load_dataset, parse_cell, read_dataset, DuplicatePolicy};
pub use schema::{Schema, COST_COLUMN, NAME_COLUMN};

use crate::errors::{Error, Result};
use std::collections::BTreeSet;

/// One ingredient. `metrics` is aligned with [`Schema::metric_columns`].
#[derive(Clone, Debug, PartialEq)]
pub struct EntityRow {
    pub name: String,
    pub cost: Option<f64>,
    pub metrics: Vec<Option<f64>>,
}

impl EntityRow {
    pub fn new(name: impl Into<String>, cost: Option<f64>, metrics: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            cost,
            metrics,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<EntityRow>,
}

impl Dataset {
    /// Build a dataset from already-parsed rows.
    ///
    /// Every row must carry exactly one slot per metric column.
    pub fn new(schema: Schema, rows: Vec<EntityRow>) -> Result<Self> {
        if let Some(row) = rows
            .iter()
            .find(|row| row.metrics.len() != schema.metric_count())
        {
            return Err(Error::validation(format!(
                "row '{}' has {} metric values, schema has {} metric columns",
                row.name,
                row.metrics.len(),
                schema.metric_count()
            )));
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[EntityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose name matches `name` case-insensitively.
    pub fn find(&self, name: &str) -> Option<&EntityRow> {
        let wanted = name.to_lowercase();
        self.rows
            .iter()
            .find(|row| row.name.to_lowercase() == wanted)
    }

    /// Unique ingredient names, sorted.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
