use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default configuration into `dir`, returning the file path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_template() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("[assumptions]"));
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "# mine").unwrap();

        let err = init_config_in(dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        init_config_in(dir.path(), true).unwrap();
        let contents = std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(contents, DEFAULT_CONFIG_TEMPLATE);
    }
}
