use super::{open_dataset, resolve_config};
use crate::config::validate_data_path;
use crate::formatting::FormattingConfig;
use crate::output::{with_destination, IngredientListing, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_list(args: ListConfig) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let data_path = args.data.clone().unwrap_or_else(|| config.data_path());
    if let Some(error) = validate_data_path(&data_path) {
        anyhow::bail!("Invalid arguments:\n{error}");
    }

    let dataset = open_dataset(&data_path, &config)?;
    let listing = IngredientListing {
        ingredients: dataset
            .ingredient_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        metric_count: dataset.schema().metric_count(),
    };

    let format = args.format.unwrap_or_else(|| config.default_format());
    let formatting = FormattingConfig::resolve(args.plain, config.use_color());
    with_destination(format, formatting, args.output.as_deref(), |writer| {
        writer.write_listing(&listing)
    })
}
