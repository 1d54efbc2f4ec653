use crate::errors::{Error, Result};

pub const NAME_COLUMN: &str = "NAME";
pub const COST_COLUMN: &str = "COST";

/// Column layout of a dataset, computed once from the header row.
///
/// Every column other than `NAME` and `COST` is a metric. Metric order is the
/// header order and is the order every scaled result is reported in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    name_index: usize,
    cost_index: usize,
    metric_indices: Vec<usize>,
}

impl Schema {
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect();

        let position = |wanted: &str| columns.iter().position(|c| c == wanted);
        let name_index =
            position(NAME_COLUMN).ok_or_else(|| Error::MissingColumn(NAME_COLUMN.into()))?;
        let cost_index =
            position(COST_COLUMN).ok_or_else(|| Error::MissingColumn(COST_COLUMN.into()))?;

        let metric_indices = (0..columns.len())
            .filter(|&i| i != name_index && i != cost_index)
            .collect();

        Ok(Self {
            columns,
            name_index,
            cost_index,
            metric_indices,
        })
    }

    /// Convenience constructor for a schema with `NAME`, `COST` and the given
    /// metrics, in that order.
    pub fn with_metrics<I, S>(metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = [NAME_COLUMN.to_string(), COST_COLUMN.to_string()]
            .into_iter()
            .chain(metrics.into_iter().map(Into::into))
            .collect();
        let metric_indices = (2..columns.len()).collect();
        Self {
            columns,
            name_index: 0,
            cost_index: 1,
            metric_indices,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn name_index(&self) -> usize {
        self.name_index
    }

    pub fn cost_index(&self) -> usize {
        self.cost_index
    }

    pub(crate) fn metric_indices(&self) -> &[usize] {
        &self.metric_indices
    }

    pub fn metric_columns(&self) -> impl Iterator<Item = &str> {
        self.metric_indices.iter().map(|&i| self.columns[i].as_str())
    }

    pub fn metric_count(&self) -> usize {
        self.metric_indices.len()
    }
}
