use anyhow::Result;
use clap::Parser;
use suryacore::cli::{Cli, Commands};
use suryacore::commands::{CalculateConfig, ListConfig};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    suryacore::observability::init_tracing(cli.verbosity);

    match cli.command {
        Commands::Calculate {
            ingredient,
            sample_size,
            data,
            format,
            output,
            top,
            no_chart,
            plain,
            strict,
        } => suryacore::commands::handle_calculate(CalculateConfig {
            ingredient,
            sample_size,
            data,
            config: cli.config,
            format,
            output,
            top,
            no_chart,
            plain,
            strict,
        }),
        Commands::List {
            data,
            format,
            output,
            plain,
        } => suryacore::commands::handle_list(ListConfig {
            data,
            config: cli.config,
            format,
            output,
            plain,
        }),
        Commands::Init { force } => suryacore::commands::init_config(force),
    }
}
