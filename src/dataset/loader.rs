use super::{Dataset, EntityRow, Schema};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::ParseFloatError;
use std::path::Path;

/// What to do when two rows share a name (compared case-insensitively).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep every row; lookups resolve to the first one. Duplicates are logged.
    #[default]
    FirstWins,
    /// Fail the load on the first duplicate.
    Reject,
}

/// Cell contents treated as "no data", after trimming.
const NULL_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-"];

/// Parse a numeric cell. `Ok(None)` means the value is absent.
pub fn parse_cell(raw: &str) -> std::result::Result<Option<f64>, ParseFloatError> {
    let cell = raw.trim();
    if NULL_TOKENS.contains(&cell) {
        return Ok(None);
    }
    let value = cell.parse::<f64>()?;
    Ok((!value.is_nan()).then_some(value))
}

/// Load a dataset from a CSV file on disk.
pub fn load_dataset(path: &Path, policy: DuplicatePolicy) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let dataset = read_dataset(BufReader::new(file), path, policy)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        metrics = dataset.schema().metric_count(),
        "Loaded ingredient dataset"
    );
    Ok(dataset)
}

/// Read a dataset from any CSV source. `source` is only used in messages.
pub fn read_dataset<R: Read>(reader: R, source: &Path, policy: DuplicatePolicy) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::EmptyDataset {
            path: source.to_path_buf(),
        });
    }
    let schema = Schema::from_headers(headers.iter())?;

    let mut rows = Vec::new();
    let mut seen: HashMap<String, u64> = HashMap::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let name = record.get(schema.name_index()).unwrap_or("").trim();
        if name.is_empty() {
            tracing::debug!(line, "Skipping row without a name");
            continue;
        }

        let numeric = |index: usize| -> Result<Option<f64>> {
            let raw = record.get(index).unwrap_or("");
            parse_cell(raw).map_err(|_| Error::InvalidNumber {
                column: schema.columns()[index].clone(),
                value: raw.trim().to_string(),
                line,
            })
        };

        let cost = numeric(schema.cost_index())?;
        let metrics = schema
            .metric_indices()
            .iter()
            .map(|&i| numeric(i))
            .collect::<Result<Vec<_>>>()?;

        if let Some(&first_line) = seen.get(&name.to_lowercase()) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateName {
                        name: name.to_string(),
                        line,
                        first_line,
                    });
                }
                DuplicatePolicy::FirstWins => {
                    tracing::warn!(
                        name,
                        line,
                        first_line,
                        "Duplicate ingredient name; lookups use the first row"
                    );
                }
            }
        } else {
            seen.insert(name.to_lowercase(), line);
        }

        rows.push(EntityRow::new(name, cost, metrics));
    }

    if rows.is_empty() {
        return Err(Error::EmptyDataset {
            path: source.to_path_buf(),
        });
    }

    Dataset::new(schema, rows)
}
