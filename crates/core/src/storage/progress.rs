//! Completion progress persistence
//!
//! Tracks which content items the member marked as completed, per product.
//! Progress is advisory UI state: it has no bearing on unlock scheduling.

use std::collections::BTreeSet;

use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::instrument;

use crate::error::Result;

pub struct ProgressStore<'a> {
    conn: &'a Connection,
}

impl<'a> ProgressStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Flip completion for an item: present becomes absent and vice versa
    #[instrument(skip(self))]
    pub fn toggle(&self, product_id: &str, item_id: &str) -> Result<()> {
        if self.is_completed(product_id, item_id)? {
            self.conn.execute(
                "DELETE FROM progress WHERE product_id = ?1 AND item_id = ?2",
                params![product_id, item_id],
            )?;
        } else {
            self.conn.execute(
                "INSERT INTO progress (product_id, item_id, completed_at) VALUES (?1, ?2, ?3)",
                params![product_id, item_id, Utc::now().to_rfc3339()],
            )?;
        }
        Ok(())
    }

    /// Whether an item is marked completed
    pub fn is_completed(&self, product_id: &str, item_id: &str) -> Result<bool> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM progress WHERE product_id = ?1 AND item_id = ?2",
            params![product_id, item_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Completed item ids for a product
    pub fn completed(&self, product_id: &str) -> Result<BTreeSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT item_id FROM progress WHERE product_id = ?1")?;

        let ids = stmt
            .query_map(params![product_id], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;

        Ok(ids)
    }

    /// Count of completed items for a product
    pub fn completed_count(&self, product_id: &str) -> Result<u32> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM progress WHERE product_id = ?1",
            params![product_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Wipe all progress (logout path)
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM progress", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    #[test]
    fn test_toggle_marks_and_unmarks() {
        let db = Database::open_in_memory().unwrap();
        let store = db.progress();

        assert!(!store.is_completed("mente-milionaria", "cap1").unwrap());

        store.toggle("mente-milionaria", "cap1").unwrap();
        assert!(store.is_completed("mente-milionaria", "cap1").unwrap());

        store.toggle("mente-milionaria", "cap1").unwrap();
        assert!(!store.is_completed("mente-milionaria", "cap1").unwrap());
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let db = Database::open_in_memory().unwrap();
        let store = db.progress();

        store.toggle("p", "a").unwrap();
        let before = store.completed("p").unwrap();

        store.toggle("p", "b").unwrap();
        store.toggle("p", "b").unwrap();

        assert_eq!(store.completed("p").unwrap(), before);
    }

    #[test]
    fn test_completed_is_scoped_per_product() {
        let db = Database::open_in_memory().unwrap();
        let store = db.progress();

        store.toggle("mente-milionaria", "cap1").unwrap();
        store.toggle("mente-blindada", "dia-1").unwrap();
        store.toggle("mente-blindada", "dia-2").unwrap();

        assert_eq!(store.completed("mente-milionaria").unwrap().len(), 1);
        assert_eq!(store.completed_count("mente-blindada").unwrap(), 2);
    }

    #[test]
    fn test_clear_all() {
        let db = Database::open_in_memory().unwrap();
        let store = db.progress();

        store.toggle("p", "a").unwrap();
        store.toggle("p", "b").unwrap();
        store.clear_all().unwrap();

        assert!(store.completed("p").unwrap().is_empty());

        // Clearing again is not an error
        store.clear_all().unwrap();
    }
}
