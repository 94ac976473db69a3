//! Per-area façades over resolution, persistence and progress
//!
//! Three independent areas share one mechanism: the member area (tiered
//! product access plus completion progress) and two timed areas (the
//! digital vault and the AI tools hub), each bound to its own key table
//! and session slot.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::info;

use super::tables::{KeyTable, AI_HUB_KEYS, MEMBER_KEYS, VAULT_KEYS};
use super::{resolve_member, resolve_timed};
use crate::error::Result;
use crate::models::{AccessStatus, Entitlement, TimedGrant, TimedTier};
use crate::storage::{Database, SLOT_AI_HUB, SLOT_MAIN, SLOT_VAULT};

/// The member area: login, entitlement and completion progress
pub struct MemberArea<'a> {
    db: &'a Database,
}

impl<'a> MemberArea<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Resolve a key and persist the resulting entitlement
    ///
    /// A failed resolution leaves any stored session untouched.
    pub fn login(&self, key: &str, now: DateTime<Utc>) -> Result<Entitlement> {
        let entitlement = resolve_member(&MEMBER_KEYS, key, now)?;
        self.db.sessions().save_member(&entitlement)?;
        info!(tier = %entitlement.tier, "Member signed in");
        Ok(entitlement)
    }

    /// The persisted entitlement, if signed in
    pub fn current(&self) -> Result<Option<Entitlement>> {
        self.db.sessions().load_member()
    }

    /// Erase the entitlement and all completion progress; idempotent
    pub fn logout(&self) -> Result<()> {
        self.db.sessions().clear_slot(SLOT_MAIN)?;
        self.db.progress().clear_all()?;
        Ok(())
    }

    /// Flip completion for an item and persist immediately
    ///
    /// Completion never affects unlock state; callers are expected not
    /// to invoke this on items they present as locked.
    pub fn toggle_complete(&self, product_id: &str, item_id: &str) -> Result<()> {
        self.db.progress().toggle(product_id, item_id)
    }

    pub fn is_completed(&self, product_id: &str, item_id: &str) -> Result<bool> {
        self.db.progress().is_completed(product_id, item_id)
    }

    pub fn completed(&self, product_id: &str) -> Result<BTreeSet<String>> {
        self.db.progress().completed(product_id)
    }

    pub fn completed_count(&self, product_id: &str) -> Result<u32> {
        self.db.progress().completed_count(product_id)
    }
}

/// A timed gated area (vault or AI hub) bound to its table and slot
pub struct GatedArea<'a> {
    db: &'a Database,
    slot: &'static str,
    table: &'static KeyTable<TimedTier>,
}

impl<'a> GatedArea<'a> {
    /// The digital vault
    pub fn vault(db: &'a Database) -> Self {
        Self {
            db,
            slot: SLOT_VAULT,
            table: &VAULT_KEYS,
        }
    }

    /// The AI tools hub
    pub fn ai_hub(db: &'a Database) -> Self {
        Self {
            db,
            slot: SLOT_AI_HUB,
            table: &AI_HUB_KEYS,
        }
    }

    /// Resolve a key and persist the resulting grant
    pub fn unlock(&self, key: &str, now: DateTime<Utc>) -> Result<TimedGrant> {
        let grant = resolve_timed(self.table, key, now)?;
        self.db.sessions().save_grant(self.slot, &grant)?;
        info!(area = self.table.area, tier = %grant.tier, "Area unlocked");
        Ok(grant)
    }

    /// Current access, discarding an expired grant as a side effect
    pub fn status(&self, now: DateTime<Utc>) -> Result<AccessStatus> {
        self.db.sessions().load_grant(self.slot, now)
    }

    /// Drop the stored grant; idempotent
    pub fn lock(&self) -> Result<()> {
        self.db.sessions().clear_slot(self.slot)
    }
}
