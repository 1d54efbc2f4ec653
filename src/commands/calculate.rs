use super::{open_dataset, resolve_config};
use crate::config::{format_cli_errors, validate_calculate_args};
use crate::formatting::FormattingConfig;
use crate::metrics::compute_metrics;
use crate::output::{with_destination, CalculationReport, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CalculateConfig {
    pub ingredient: String,
    pub sample_size: Option<f64>,
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub no_chart: bool,
    pub plain: bool,
    /// Treat an unknown ingredient as a failure.
    pub strict: bool,
}

pub fn handle_calculate(args: CalculateConfig) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let bounds = config.sample();
    let sample_size = args.sample_size.unwrap_or(bounds.default);
    let data_path = args.data.clone().unwrap_or_else(|| config.data_path());

    let errors =
        validate_calculate_args(&args.ingredient, sample_size, &bounds, args.top, &data_path);
    if !errors.is_empty() {
        anyhow::bail!("Invalid arguments:\n{}", format_cli_errors(&errors));
    }

    let dataset = open_dataset(&data_path, &config)?;
    let lookup = compute_metrics(&dataset, &args.ingredient, sample_size);
    tracing::debug!(
        ingredient = %args.ingredient,
        sample_size,
        found = !lookup.is_not_found(),
        "Computed metrics"
    );

    let chart_items = args.top.unwrap_or_else(|| config.chart_max_items());
    let report = CalculationReport::from_lookup(
        lookup,
        &args.ingredient,
        sample_size,
        chart_items,
        !args.no_chart,
    );

    let format = args.format.unwrap_or_else(|| config.default_format());
    let formatting = FormattingConfig::resolve(args.plain, config.use_color());
    with_destination(format, formatting, args.output.as_deref(), |writer| {
        writer.write_calculation(&report)
    })?;

    if let Some(message) = report.not_found_message().filter(|_| args.strict) {
        anyhow::bail!(message);
    }
    Ok(())
}
