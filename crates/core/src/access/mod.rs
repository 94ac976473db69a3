//! Entitlement resolution and gated-area façades
//!
//! Resolution is a pure function of (table, key, now). The area façades
//! bind a table to its persisted session slot and write through to the
//! store synchronously, so a reload after a successful login observes
//! the grant.

mod area;
mod tables;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::{Entitlement, TimedGrant};

pub use area::{GatedArea, MemberArea};
pub use tables::{KeyEntry, KeyTable, MemberGrantSpec, AI_HUB_KEYS, MEMBER_KEYS, VAULT_KEYS};

/// Resolve a member key against a table
///
/// `granted_at` is stamped with `now`; a miss is `Error::InvalidKey`
/// with no hint about near-matches.
pub fn resolve_member(
    table: &KeyTable<MemberGrantSpec>,
    key: &str,
    now: DateTime<Utc>,
) -> Result<Entitlement> {
    let spec = table.lookup(key).ok_or(Error::InvalidKey)?;
    Ok(Entitlement {
        tier: spec.tier,
        products: spec.products.iter().map(|p| p.to_string()).collect(),
        granted_at: now,
    })
}

/// Resolve a timed key against a table, computing expiry at resolution time
pub fn resolve_timed(
    table: &KeyTable<crate::models::TimedTier>,
    key: &str,
    now: DateTime<Utc>,
) -> Result<TimedGrant> {
    let tier = table.lookup(key).ok_or(Error::InvalidKey)?;
    Ok(TimedGrant::new(*tier, now))
}
