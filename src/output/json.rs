use super::{not_found_message, CalculationReport, IngredientListing, Outcome, OutputWriter};
use anyhow::Result;
use serde_json::json;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, value: &serde_json::Value) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn calculation_to_json(report: &CalculationReport) -> serde_json::Value {
    match &report.outcome {
        Outcome::Found { metrics, ranking } => json!({
            "ingredient": report.ingredient,
            "sample_size": report.sample_size,
            "metrics": metrics,
            "ranking": ranking,
        }),
        Outcome::NotFound { name } => json!({
            "ingredient": report.ingredient,
            "sample_size": report.sample_size,
            "error": "not_found",
            "message": not_found_message(name),
        }),
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_calculation(&mut self, report: &CalculationReport) -> Result<()> {
        self.emit(&calculation_to_json(report))
    }

    fn write_listing(&mut self, listing: &IngredientListing) -> Result<()> {
        self.emit(&serde_json::to_value(listing)?)
    }
}
