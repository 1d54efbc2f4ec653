// Core configuration types
pub mod cli_validation;
mod core;
mod loader;

pub use self::core::{
    default_data_path, default_max_items, default_sample_max, default_sample_min,
    default_sample_size, ChartConfig, DataConfig, OutputConfig, SampleConfig, SuryacoreConfig,
};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use cli_validation::{
    format_cli_errors, validate_calculate_args, validate_data_path, CliValidationError,
};

/// Template written by `suryacore init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Suryacore Configuration

[data]
path = "data/ingredients.csv"
# "first-wins" or "reject"
duplicate_names = "first-wins"

[sample]
min = 1
max = 10
default = 3

[chart]
max_items = 20

[output]
default_format = "terminal"
"#;
