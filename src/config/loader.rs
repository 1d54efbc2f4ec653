use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SuryacoreConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".suryacore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<SuryacoreConfig> {
    let config = toml::from_str::<SuryacoreConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<SuryacoreConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::configuration(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Discovery variant: unreadable or invalid files are skipped with a warning.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SuryacoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Ignoring invalid config file, using defaults"
            );
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            path = %config_path.display(),
            error = %error,
            "Failed to read config file"
        );
    }
}

/// `start` and up to `max_depth - 1` of its ancestors
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> SuryacoreConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "No config found, using default config"
            );
            SuryacoreConfig::default()
        })
}

/// Search the current directory and its ancestors for a config file.
pub fn load_config() -> SuryacoreConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to get current directory, using default config");
            SuryacoreConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }

    #[test]
    fn test_config_found_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[chart]\nmax_items = 7\n",
        )
        .unwrap();
        let nested = temp.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.chart_max_items(), 7);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "[chart]\nmax_items = 0\n").unwrap();

        let config = load_config_from(temp.path().to_path_buf());
        assert_eq!(config, SuryacoreConfig::default());
    }

    #[test]
    fn test_explicit_config_errors_are_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[sample]\nmin = 4\nmax = 2\n").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_explicit_missing_config_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from_path(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            parse_and_validate_config("[chart\n"),
            Err(Error::TomlParse(_))
        ));
    }
}
