//! Entitlement models for the member area and the timed access slots

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Member-area access tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    Basic,
    Premium,
}

impl std::fmt::Display for AccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessTier::Basic => write!(f, "basic"),
            AccessTier::Premium => write!(f, "premium"),
        }
    }
}

/// What a resolved member key grants
///
/// `granted_at` is the zero point for the day-based unlock schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub tier: AccessTier,
    pub products: Vec<String>,
    pub granted_at: DateTime<Utc>,
}

impl Entitlement {
    pub fn grants_product(&self, product_id: &str) -> bool {
        self.products.iter().any(|p| p == product_id)
    }
}

/// Tier vocabulary for the timed slots (vault, AI hub)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimedTier {
    Weekly,
    Monthly,
    Lifetime,
}

impl TimedTier {
    /// Access duration in days; `None` means no expiry
    pub fn duration_days(&self) -> Option<u32> {
        match self {
            TimedTier::Weekly => Some(7),
            TimedTier::Monthly => Some(30),
            TimedTier::Lifetime => None,
        }
    }
}

impl std::fmt::Display for TimedTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimedTier::Weekly => write!(f, "weekly"),
            TimedTier::Monthly => write!(f, "monthly"),
            TimedTier::Lifetime => write!(f, "lifetime"),
        }
    }
}

/// A resolved timed grant with its expiry computed at resolution time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedGrant {
    pub tier: TimedTier,
    pub granted_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TimedGrant {
    pub fn new(tier: TimedTier, now: DateTime<Utc>) -> Self {
        Self {
            tier,
            granted_at: now,
            expires_at: tier
                .duration_days()
                .map(|d| now + Duration::days(i64::from(d))),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

/// Load result for a timed slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessStatus {
    /// No grant on record (or the stored grant expired)
    Locked,
    Granted(TimedGrant),
}

impl AccessStatus {
    pub fn is_locked(&self) -> bool {
        matches!(self, AccessStatus::Locked)
    }
}
