//! Session slot persistence
//!
//! One durable row per slot holding the serialized entitlement record.
//! A record that fails to deserialize is treated as absent: the row is
//! deleted and the slot reverts to signed-out/locked. Timed slots are
//! additionally validated against `now` on load; an expired grant is
//! discarded as a side effect.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{instrument, warn};

use super::parse::{parse_datetime, OptionalExt};
use crate::error::Result;
use crate::models::{AccessStatus, Entitlement, TimedGrant};

/// Slot key for the member-area session
pub const SLOT_MAIN: &str = "session.main";
/// Slot key for the digital vault
pub const SLOT_VAULT: &str = "session.vault";
/// Slot key for the AI tools hub
pub const SLOT_AI_HUB: &str = "session.aiHub";

pub struct SessionStore<'a> {
    conn: &'a Connection,
}

impl<'a> SessionStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Persist the member-area entitlement
    #[instrument(skip(self, entitlement), fields(tier = %entitlement.tier))]
    pub fn save_member(&self, entitlement: &Entitlement) -> Result<()> {
        self.write(SLOT_MAIN, entitlement)
    }

    /// Load the member-area entitlement, if any
    pub fn load_member(&self) -> Result<Option<Entitlement>> {
        self.read(SLOT_MAIN)
    }

    /// Persist a timed grant into the given slot
    #[instrument(skip(self, grant), fields(tier = %grant.tier))]
    pub fn save_grant(&self, slot: &str, grant: &TimedGrant) -> Result<()> {
        self.write(slot, grant)
    }

    /// Load a timed slot, discarding an expired grant as a side effect
    pub fn load_grant(&self, slot: &str, now: DateTime<Utc>) -> Result<AccessStatus> {
        let grant: Option<TimedGrant> = self.read(slot)?;
        match grant {
            Some(grant) if grant.is_expired(now) => {
                self.clear_slot(slot)?;
                Ok(AccessStatus::Locked)
            }
            Some(grant) => Ok(AccessStatus::Granted(grant)),
            None => Ok(AccessStatus::Locked),
        }
    }

    /// When the slot was last written, if it holds a record
    pub fn slot_updated_at(&self, slot: &str) -> Result<Option<DateTime<Utc>>> {
        let updated = self
            .conn
            .query_row(
                "SELECT updated_at FROM session_slots WHERE slot = ?1",
                params![slot],
                |row| parse_datetime(&row.get::<_, String>(0)?),
            )
            .optional()?;
        Ok(updated)
    }

    /// Remove the stored record for a slot; clearing an empty slot is a no-op
    pub fn clear_slot(&self, slot: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM session_slots WHERE slot = ?1", params![slot])?;
        Ok(())
    }

    fn write<T: Serialize>(&self, slot: &str, record: &T) -> Result<()> {
        let record_json = serde_json::to_string(record)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO session_slots (slot, record_json, updated_at)
             VALUES (?1, ?2, ?3)",
            params![slot, record_json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>> {
        let row = self
            .conn
            .query_row(
                "SELECT record_json FROM session_slots WHERE slot = ?1",
                params![slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        let Some(record_json) = row else {
            return Ok(None);
        };

        match serde_json::from_str(&record_json) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // Corrupt stored data is never fatal; drop it and sign out.
                warn!(slot, error = %e, "Discarding unreadable session record");
                self.clear_slot(slot)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessTier, TimedTier};
    use crate::storage::Database;
    use chrono::Duration;

    fn entitlement() -> Entitlement {
        Entitlement {
            tier: AccessTier::Premium,
            products: vec!["mente-milionaria".into(), "mente-blindada".into()],
            granted_at: Utc::now(),
        }
    }

    #[test]
    fn test_member_save_load_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();

        let ent = entitlement();
        store.save_member(&ent).unwrap();
        assert_eq!(store.load_member().unwrap(), Some(ent));
    }

    #[test]
    fn test_save_observes_own_write() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();

        let mut ent = entitlement();
        store.save_member(&ent).unwrap();

        ent.tier = AccessTier::Basic;
        ent.products = vec!["mente-milionaria".into()];
        store.save_member(&ent).unwrap();

        assert_eq!(store.load_member().unwrap(), Some(ent));
    }

    #[test]
    fn test_empty_slot_loads_as_absent() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.sessions().load_member().unwrap(), None);
        assert_eq!(
            db.sessions().load_grant(SLOT_VAULT, Utc::now()).unwrap(),
            AccessStatus::Locked
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();

        store.save_member(&entitlement()).unwrap();
        store.clear_slot(SLOT_MAIN).unwrap();
        store.clear_slot(SLOT_MAIN).unwrap();
        assert_eq!(store.load_member().unwrap(), None);
    }

    #[test]
    fn test_corrupt_record_is_dropped() {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute(
                "INSERT INTO session_slots (slot, record_json, updated_at) VALUES (?1, ?2, ?3)",
                params![SLOT_MAIN, "{not json", Utc::now().to_rfc3339()],
            )
            .unwrap();

        assert_eq!(db.sessions().load_member().unwrap(), None);

        // The row itself must be gone, not just ignored
        let count: u32 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM session_slots WHERE slot = ?1",
                params![SLOT_MAIN],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_expired_grant_cleared_on_load() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();

        let granted = Utc::now();
        let grant = TimedGrant::new(TimedTier::Weekly, granted);
        store.save_grant(SLOT_VAULT, &grant).unwrap();

        // Still valid the day before expiry
        let status = store
            .load_grant(SLOT_VAULT, granted + Duration::days(6))
            .unwrap();
        assert_eq!(status, AccessStatus::Granted(grant));

        // Eight elapsed days: locked, and the stored row is gone
        let status = store
            .load_grant(SLOT_VAULT, granted + Duration::days(8))
            .unwrap();
        assert_eq!(status, AccessStatus::Locked);

        let count: u32 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM session_slots", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_lifetime_grant_never_expires_on_load() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();

        let grant = TimedGrant::new(TimedTier::Lifetime, Utc::now());
        store.save_grant(SLOT_AI_HUB, &grant).unwrap();

        let far_future = Utc::now() + Duration::days(5000);
        let status = store.load_grant(SLOT_AI_HUB, far_future).unwrap();
        assert_eq!(status, AccessStatus::Granted(grant));
    }

    #[test]
    fn test_slot_updated_at() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();

        assert!(store.slot_updated_at(SLOT_MAIN).unwrap().is_none());
        store.save_member(&entitlement()).unwrap();
        assert!(store.slot_updated_at(SLOT_MAIN).unwrap().is_some());
    }

    #[test]
    fn test_slots_are_independent() {
        let db = Database::open_in_memory().unwrap();
        let store = db.sessions();
        let now = Utc::now();

        store
            .save_grant(SLOT_VAULT, &TimedGrant::new(TimedTier::Monthly, now))
            .unwrap();

        assert!(matches!(
            store.load_grant(SLOT_VAULT, now).unwrap(),
            AccessStatus::Granted(_)
        ));
        assert_eq!(store.load_grant(SLOT_AI_HUB, now).unwrap(), AccessStatus::Locked);
        assert_eq!(store.load_member().unwrap(), None);
    }
}
