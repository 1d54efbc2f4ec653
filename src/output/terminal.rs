use super::{
    format_value, not_found_message, CalculationReport, IngredientListing, Outcome, OutputWriter,
};
use crate::core::{MetricValue, RankedMetric, ScaledResult};
use crate::formatting::{create_formatter, FormattingConfig, OutputFormatter};
use anyhow::Result;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Widest bar, in terminal cells.
const BAR_WIDTH: usize = 40;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: create_formatter(formatting),
            plain: formatting.is_plain(),
        }
    }

    fn write_metrics_table(
        &mut self,
        report: &CalculationReport,
        metrics: &ScaledResult,
    ) -> Result<()> {
        let mut table = Table::new();
        table
            .load_preset(if self.plain { ASCII_FULL } else { UTF8_FULL })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Nutrient"),
                Cell::new(report.value_header()).set_alignment(CellAlignment::Right),
            ]);

        for entry in metrics.iter() {
            let value = match entry.value {
                MetricValue::Value(v) => format_value(v),
                MetricValue::Absent => "N/A".to_string(),
            };
            table.add_row(vec![
                Cell::new(&entry.name),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_chart(&mut self, report: &CalculationReport, ranking: &[RankedMetric]) -> Result<()> {
        writeln!(self.writer)?;
        if ranking.is_empty() {
            let icon = self.formatter.emoji("⚠️", "[WARN]");
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .warning(&format!("{icon} No nutrient data available to chart."))
            )?;
            return Ok(());
        }

        let icon = self.formatter.emoji("🔬", "[CHART]");
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .header(&format!("{icon} {}", report.chart_title()))
        )?;

        let label_width = ranking
            .iter()
            .map(|r| UnicodeWidthStr::width(r.name.as_str()))
            .max()
            .unwrap_or(0);
        let (full, empty) = if self.plain { ('#', '-') } else { ('█', '░') };

        for (rank, line) in render_bars(ranking, BAR_WIDTH).into_iter().enumerate() {
            let padding = label_width - UnicodeWidthStr::width(line.name.as_str());
            let glyph = if line.negative { empty } else { full };
            let bar: String = std::iter::repeat(glyph).take(line.cells).collect();
            writeln!(
                self.writer,
                "{}{} {} {}",
                line.name,
                " ".repeat(padding),
                self.formatter.bar(&bar, rank),
                self.formatter.dim(&format_value(line.value))
            )?;
        }
        Ok(())
    }
}

/// One chart row: how many cells its bar takes.
#[derive(Debug, PartialEq)]
pub(crate) struct BarLine {
    pub name: String,
    pub value: f64,
    pub cells: usize,
    pub negative: bool,
}

/// Scale bars against the largest magnitude. Any non-zero value gets at
/// least one cell so it stays visible.
pub(crate) fn render_bars(ranking: &[RankedMetric], width: usize) -> Vec<BarLine> {
    let max = ranking
        .iter()
        .map(|r| r.value.abs())
        .fold(0.0_f64, f64::max);

    ranking
        .iter()
        .map(|r| {
            let cells = if max == 0.0 || r.value == 0.0 {
                0
            } else {
                ((r.value.abs() / max) * width as f64).round().max(1.0) as usize
            };
            BarLine {
                name: r.name.clone(),
                value: r.value,
                cells,
                negative: r.value < 0.0,
            }
        })
        .collect()
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_calculation(&mut self, report: &CalculationReport) -> Result<()> {
        match &report.outcome {
            Outcome::NotFound { name } => {
                let icon = self.formatter.emoji("❌", "[ERROR]");
                writeln!(
                    self.writer,
                    "{}",
                    self.formatter
                        .error(&format!("{icon} {}", not_found_message(name)))
                )?;
            }
            Outcome::Found { metrics, ranking } => {
                let icon = self.formatter.emoji("✅", "[OK]");
                writeln!(
                    self.writer,
                    "{}",
                    self.formatter.success(&format!("{icon} {}", report.title()))
                )?;
                self.write_metrics_table(report, metrics)?;
                if report.show_chart {
                    self.write_chart(report, ranking)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_listing(&mut self, listing: &IngredientListing) -> Result<()> {
        let icon = self.formatter.emoji("🌾", "*");
        writeln!(
            self.writer,
            "{}",
            self.formatter.header(&format!(
                "{icon} {} ingredients, {} metrics per ingredient",
                listing.ingredients.len(),
                listing.metric_count
            ))
        )?;
        for name in &listing.ingredients {
            writeln!(self.writer, "  {name}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
