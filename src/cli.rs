use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "suryacore")]
#[command(about = "Nutritional metrics calculator for per-kg ingredient data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .suryacore.toml)
    #[arg(short, long, global = true, env = "SURYACORE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate nutrient values for a sample of one ingredient
    Calculate {
        /// Ingredient name (case-insensitive)
        ingredient: String,

        /// Sample size in kg (defaults to [sample] default, normally 3)
        #[arg(short, long = "sample-size", visible_alias = "kg")]
        sample_size: Option<f64>,

        /// Ingredient reference CSV
        #[arg(short, long, env = "SURYACORE_DATA")]
        data: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N nutrients in the chart
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Skip the ranked chart
        #[arg(long = "no-chart")]
        no_chart: bool,

        /// Plain output (ASCII only, no colors, no emoji)
        #[arg(long)]
        plain: bool,

        /// Exit with an error when the ingredient is not found
        #[arg(long)]
        strict: bool,
    },

    /// List available ingredients
    List {
        /// Ingredient reference CSV
        #[arg(short, long, env = "SURYACORE_DATA")]
        data: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plain output (ASCII only, no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
