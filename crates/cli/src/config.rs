//! CLI configuration
//!
//! Optional `config.toml` in the platform config directory. Everything
//! has a sensible default; a missing file is not an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Overrides the default database location
    pub database_path: Option<PathBuf>,
}

impl Config {
    /// Load from the default location; absent file yields defaults
    pub fn load_default() -> anyhow::Result<Self> {
        match config_file_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; absent file yields defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("parsing config at {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn config_file_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("app", "atrio", "atrio")?;
    Some(dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_parse_database_path() {
        let config = Config::from_toml(r#"database_path = "/tmp/atrio-test.db""#).unwrap();
        assert_eq!(
            config.database_path,
            Some(PathBuf::from("/tmp/atrio-test.db"))
        );
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "database_path = [broken").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
