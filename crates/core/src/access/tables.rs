//! Static key tables
//!
//! Each gated area has its own table mapping literal key strings to a
//! grant spec. Lookup is exact match: no case folding, no trimming, no
//! hashing. The tables are compiled in; they are entitlement mapping,
//! not a security boundary.

use crate::models::{AccessTier, TimedTier};

/// A single key entry: what the literal key string grants
pub struct KeyEntry<G: 'static> {
    pub key: &'static str,
    pub grant: G,
}

/// A static key table for one gated area
pub struct KeyTable<G: 'static> {
    pub area: &'static str,
    pub entries: &'static [KeyEntry<G>],
}

impl<G> KeyTable<G> {
    /// Exact-match lookup on the literal key string
    pub fn lookup(&self, key: &str) -> Option<&G> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.grant)
    }
}

/// Grant spec for the member area: a tier plus the products it unlocks
pub struct MemberGrantSpec {
    pub tier: AccessTier,
    pub products: &'static [&'static str],
}

/// Member-area login keys
pub const MEMBER_KEYS: KeyTable<MemberGrantSpec> = KeyTable {
    area: "member",
    entries: &[
        KeyEntry {
            key: "desbloquear27",
            grant: MemberGrantSpec {
                tier: AccessTier::Basic,
                products: &["mente-milionaria"],
            },
        },
        KeyEntry {
            key: "menteblindada97",
            grant: MemberGrantSpec {
                tier: AccessTier::Premium,
                products: &["mente-milionaria", "mente-blindada"],
            },
        },
    ],
};

/// Digital vault keys
pub const VAULT_KEYS: KeyTable<TimedTier> = KeyTable {
    area: "vault",
    entries: &[
        KeyEntry {
            key: "cofresemanal",
            grant: TimedTier::Weekly,
        },
        KeyEntry {
            key: "cofremensal",
            grant: TimedTier::Monthly,
        },
        KeyEntry {
            key: "cofrevitalicio",
            grant: TimedTier::Lifetime,
        },
    ],
};

/// AI tools hub keys
pub const AI_HUB_KEYS: KeyTable<TimedTier> = KeyTable {
    area: "ai-hub",
    entries: &[
        KeyEntry {
            key: "iasemanal",
            grant: TimedTier::Weekly,
        },
        KeyEntry {
            key: "iamensal",
            grant: TimedTier::Monthly,
        },
        KeyEntry {
            key: "iavitalicio",
            grant: TimedTier::Lifetime,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(MEMBER_KEYS.lookup("desbloquear27").is_some());
        // No normalization of any kind
        assert!(MEMBER_KEYS.lookup("DESBLOQUEAR27").is_none());
        assert!(MEMBER_KEYS.lookup(" desbloquear27").is_none());
        assert!(MEMBER_KEYS.lookup("desbloquear2").is_none());
        assert!(MEMBER_KEYS.lookup("").is_none());
    }

    #[test]
    fn test_member_table_grants() {
        let basic = MEMBER_KEYS.lookup("desbloquear27").unwrap();
        assert_eq!(basic.tier, AccessTier::Basic);
        assert_eq!(basic.products, &["mente-milionaria"]);

        let premium = MEMBER_KEYS.lookup("menteblindada97").unwrap();
        assert_eq!(premium.tier, AccessTier::Premium);
        assert_eq!(premium.products, &["mente-milionaria", "mente-blindada"]);
    }

    #[test]
    fn test_timed_tables_are_independently_keyed() {
        assert_eq!(VAULT_KEYS.lookup("cofresemanal"), Some(&TimedTier::Weekly));
        assert_eq!(VAULT_KEYS.lookup("cofremensal"), Some(&TimedTier::Monthly));
        assert_eq!(VAULT_KEYS.lookup("cofrevitalicio"), Some(&TimedTier::Lifetime));

        // Vault keys do not open the hub and vice versa
        assert!(AI_HUB_KEYS.lookup("cofresemanal").is_none());
        assert!(VAULT_KEYS.lookup("iasemanal").is_none());
        assert_eq!(AI_HUB_KEYS.lookup("iavitalicio"), Some(&TimedTier::Lifetime));
    }
}
