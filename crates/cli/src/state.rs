//! Application context: database location and handle

use std::path::PathBuf;

use anyhow::Context;
use atrio_core::Database;
use directories::ProjectDirs;

use crate::config::Config;

pub struct AppContext {
    pub db: Database,
}

impl AppContext {
    /// Open the database, preferring the CLI flag, then the config file,
    /// then the platform data directory.
    pub fn init(db_path_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::load_default()?;

        let db_path = match db_path_override.or(config.database_path) {
            Some(path) => path,
            None => default_db_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating data directory {}", parent.display()))?;
        }

        let db = Database::open(&db_path)
            .with_context(|| format!("opening database at {}", db_path.display()))?;

        Ok(Self { db })
    }
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("app", "atrio", "atrio")
        .context("could not determine data directory")?;
    Ok(dirs.data_dir().join("atrio.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_explicit_path_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("atrio.db");

        let ctx = AppContext::init(Some(path.clone())).unwrap();
        assert!(path.exists());
        assert!(ctx.db.schema_version() >= 1);
    }
}
