//! Rendering of calculation results and ingredient listings.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::core::{Lookup, RankedMetric, ScaledResult};
use crate::formatting::FormattingConfig;
use crate::metrics::rank_for_chart;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// What a calculation produced, ready for any writer.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Found {
        metrics: ScaledResult,
        /// Empty when there is nothing to chart.
        ranking: Vec<RankedMetric>,
    },
    /// Carries the name that failed to match.
    NotFound { name: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalculationReport {
    pub ingredient: String,
    pub sample_size: f64,
    pub outcome: Outcome,
    pub show_chart: bool,
}

impl CalculationReport {
    pub fn from_lookup(
        lookup: Lookup,
        ingredient: &str,
        sample_size: f64,
        chart_items: usize,
        show_chart: bool,
    ) -> Self {
        let outcome = match lookup {
            Lookup::Found(metrics) => {
                let ranking = rank_for_chart(&metrics, chart_items);
                Outcome::Found { metrics, ranking }
            }
            Lookup::NotFound { name } => Outcome::NotFound { name },
        };
        Self {
            ingredient: ingredient.to_string(),
            sample_size,
            outcome,
            show_chart,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.outcome, Outcome::NotFound { .. })
    }

    /// "3kg", "2.5kg"
    pub fn sample_label(&self) -> String {
        format!("{}kg", self.sample_size)
    }

    pub fn title(&self) -> String {
        format!(
            "Nutritional values for {} of {}",
            self.sample_label(),
            self.ingredient
        )
    }

    pub fn value_header(&self) -> String {
        format!("{} Value", self.sample_label())
    }

    pub fn chart_title(&self) -> String {
        format!(
            "Top Nutrient Contributions for {} of {}",
            self.sample_label(),
            self.ingredient
        )
    }

    /// The user-facing message for a failed lookup, if the lookup failed.
    pub fn not_found_message(&self) -> Option<String> {
        match &self.outcome {
            Outcome::NotFound { name } => Some(not_found_message(name)),
            Outcome::Found { .. } => None,
        }
    }
}

pub fn not_found_message(name: &str) -> String {
    format!("Ingredient '{name}' not found in data.")
}

/// The selectable ingredients of a dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngredientListing {
    pub ingredients: Vec<String>,
    pub metric_count: usize,
}

pub trait OutputWriter {
    fn write_calculation(&mut self, report: &CalculationReport) -> Result<()>;
    fn write_listing(&mut self, listing: &IngredientListing) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    formatting: FormattingConfig,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// Run `render` against stdout, or against `output_file` when given.
pub fn with_destination(
    format: OutputFormat,
    formatting: FormattingConfig,
    output_file: Option<&Path>,
    render: impl FnOnce(&mut dyn OutputWriter) -> Result<()>,
) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            // Files never get ANSI escapes.
            let formatting = FormattingConfig::plain();
            let mut writer = create_writer(format, formatting, std::io::BufWriter::new(file));
            render(writer.as_mut())
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(format, formatting, stdout.lock());
            render(writer.as_mut())
        }
    }
}

/// Number formatting shared by the text writers.
pub(crate) fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MetricValue;

    fn found_lookup() -> Lookup {
        Lookup::Found(
            vec![
                ("A".to_string(), MetricValue::Value(5.0)),
                ("B".to_string(), MetricValue::Absent),
                ("C".to_string(), MetricValue::Value(10.0)),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_report_ranks_found_metrics() {
        let report = CalculationReport::from_lookup(found_lookup(), "Maize", 3.0, 20, true);
        match report.outcome {
            Outcome::Found { ranking, metrics } => {
                assert_eq!(metrics.len(), 3);
                let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["C", "A"]);
            }
            Outcome::NotFound { .. } => panic!("expected found"),
        }
    }

    #[test]
    fn test_report_labels() {
        let report = CalculationReport::from_lookup(found_lookup(), "Maize", 3.0, 20, true);
        assert_eq!(report.title(), "Nutritional values for 3kg of Maize");
        assert_eq!(report.value_header(), "3kg Value");

        let fractional = CalculationReport::from_lookup(found_lookup(), "Maize", 2.5, 20, true);
        assert_eq!(fractional.sample_label(), "2.5kg");
    }

    #[test]
    fn test_not_found_message_names_ingredient() {
        let report = CalculationReport::from_lookup(
            Lookup::NotFound {
                name: "Soy".to_string(),
            },
            "Soy",
            3.0,
            20,
            true,
        );
        assert!(report.is_not_found());
        assert_eq!(
            report.not_found_message().as_deref(),
            Some("Ingredient 'Soy' not found in data.")
        );
    }

    #[test]
    fn test_not_found_message_uses_lookup_name() {
        let report = CalculationReport::from_lookup(
            Lookup::NotFound {
                name: "soya meal".to_string(),
            },
            "Soya Meal",
            3.0,
            20,
            true,
        );
        assert_eq!(
            report.outcome,
            Outcome::NotFound {
                name: "soya meal".to_string()
            }
        );
        assert_eq!(
            report.not_found_message().as_deref(),
            Some("Ingredient 'soya meal' not found in data.")
        );

        let found = CalculationReport::from_lookup(found_lookup(), "Maize", 3.0, 20, true);
        assert_eq!(found.not_found_message(), None);
    }

    #[test]
    fn test_output_format_parses_from_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let parsed: Wrapper = toml::from_str(r#"format = "markdown""#).unwrap();
        assert_eq!(parsed.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_format_value_two_decimals() {
        assert_eq!(format_value(25.5), "25.50");
        assert_eq!(format_value(-0.1), "-0.10");
    }
}
