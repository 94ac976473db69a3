//! SQLite storage layer for Atrio
//!
//! The single durable store behind the access model. Everything is
//! synchronous and runs on the caller's thread; a save followed by a
//! load observes the write.

mod migrations;
mod parse;
mod progress;
mod sessions;

use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

use crate::error::Result;

pub use progress::ProgressStore;
pub use sessions::{SessionStore, SLOT_AI_HUB, SLOT_MAIN, SLOT_VAULT};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initialize database schema via migrations
    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)?;
        Ok(())
    }

    /// Get current schema version
    pub fn schema_version(&self) -> u32 {
        self.conn
            .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap_or(0)
    }

    /// Get session slot store
    pub fn sessions(&self) -> SessionStore<'_> {
        SessionStore::new(&self.conn)
    }

    /// Get completion progress store
    pub fn progress(&self) -> ProgressStore<'_> {
        ProgressStore::new(&self.conn)
    }

    /// Raw connection access (tests and maintenance tooling)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
