use super::{
    format_value, not_found_message, CalculationReport, IngredientListing, Outcome, OutputWriter,
};
use crate::core::{MetricValue, RankedMetric, ScaledResult};
use anyhow::Result;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_metrics(&mut self, report: &CalculationReport, metrics: &ScaledResult) -> Result<()> {
        writeln!(self.writer, "| Nutrient | {} |", report.value_header())?;
        writeln!(self.writer, "|----------|------:|")?;
        for entry in metrics.iter() {
            let value = match entry.value {
                MetricValue::Value(v) => format_value(v),
                MetricValue::Absent => "N/A".to_string(),
            };
            writeln!(self.writer, "| {} | {} |", escape_cell(&entry.name), value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_ranking(
        &mut self,
        report: &CalculationReport,
        ranking: &[RankedMetric],
    ) -> Result<()> {
        writeln!(self.writer, "## {}", report.chart_title())?;
        writeln!(self.writer)?;
        if ranking.is_empty() {
            writeln!(self.writer, "> No nutrient data available to chart.")?;
            return Ok(());
        }
        for (position, item) in ranking.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. **{}**: {}",
                position + 1,
                item.name,
                format_value(item.value)
            )?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_calculation(&mut self, report: &CalculationReport) -> Result<()> {
        match &report.outcome {
            Outcome::NotFound { name } => {
                writeln!(self.writer, "> **Error:** {}", not_found_message(name))?;
            }
            Outcome::Found { metrics, ranking } => {
                writeln!(self.writer, "# {}", report.title())?;
                writeln!(self.writer)?;
                self.write_metrics(report, metrics)?;
                if report.show_chart {
                    self.write_ranking(report, ranking)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_listing(&mut self, listing: &IngredientListing) -> Result<()> {
        writeln!(self.writer, "# Ingredients")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Currently supporting **{} metrics** per ingredient.",
            listing.metric_count
        )?;
        writeln!(self.writer)?;
        for name in &listing.ingredients {
            writeln!(self.writer, "- {name}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
