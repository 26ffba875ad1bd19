use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::TechmapConfig;
use super::roi::{AssumptionsConfig, BenchmarkDefaults};
use crate::errors::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy.
pub const CONFIG_FILE_NAME: &str = ".techmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and replace invalid sections with their defaults.
///
/// Malformed TOML is an error; out-of-range values are not, they are
/// logged and the affected section falls back to defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<TechmapConfig> {
    let mut config = toml::from_str::<TechmapConfig>(contents)?;

    if let Some(ref assumptions) = config.assumptions {
        if let Err(e) = assumptions.validate() {
            tracing::warn!("Invalid assumptions: {}. Using defaults.", e);
            config.assumptions = Some(AssumptionsConfig::default());
        }
    }

    if let Some(ref defaults) = config.benchmark_defaults {
        if let Err(e) = defaults.validate() {
            tracing::warn!("Invalid benchmark defaults: {}. Using defaults.", e);
            config.benchmark_defaults = Some(BenchmarkDefaults::default());
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file. Missing files are errors here.
pub fn load_config_from(path: &Path) -> Result<TechmapConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TechmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

/// Find and load the nearest `.techmap.toml` above `start`.
pub fn load_config_near(start: PathBuf) -> TechmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TechmapConfig::default()
        })
}

pub fn load_config() -> TechmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_near(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            TechmapConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_assumptions_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [assumptions]
            cost_per_technology = -5.0
        "#})
        .unwrap();
        assert_eq!(config.assumptions, Some(AssumptionsConfig::default()));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = parse_and_validate_config("[assumptions\ncost = ").unwrap_err();
        assert_eq!(err.code(), crate::errors::ErrorCode::CONFIG_PARSE);
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_load_config_near_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[benchmark_defaults]\ndowntime = 20.0\n",
        )
        .unwrap();
        let nested = temp.path().join("plants").join("north");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_near(nested);
        assert_eq!(config.roi_config().benchmark_defaults.downtime, 20.0);
    }

    #[test]
    fn test_load_config_from_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from(&temp.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.code(), crate::errors::ErrorCode::IO_FILE);
    }
}
