//! Day-based unlock scheduling
//!
//! Pure functions over (item, grant time, now). Callers sample `now` once
//! per evaluation pass so every item in the pass is judged against the
//! same instant; nothing here reads the system clock.

use chrono::{DateTime, Duration, Utc};

use crate::models::ContentItem;

/// Whole days of wall-clock time elapsed since the grant
///
/// Floors toward zero; an absent grant counts as zero elapsed days, which
/// keeps every day-gated item locked.
pub fn days_passed(granted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    let Some(granted) = granted_at else {
        return 0;
    };

    let elapsed = now.signed_duration_since(granted);
    if elapsed < Duration::zero() {
        return 0;
    }

    u32::try_from(elapsed.num_days()).unwrap_or(u32::MAX)
}

/// Whether an item is currently accessible
///
/// Independent of completion state: an item with offset 0 is always
/// unlocked once the owning product is entitled.
pub fn is_unlocked(item: &ContentItem, granted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    item.unlock_offset_days == 0 || item.unlock_offset_days <= days_passed(granted_at, now)
}

/// Whole days until the item unlocks (0 when already unlocked)
pub fn days_remaining(
    item: &ContentItem,
    granted_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> u32 {
    let passed = days_passed(granted_at, now);
    item.unlock_offset_days.saturating_sub(passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentKind;

    fn gated_item(offset: u32) -> ContentItem {
        ContentItem::new("cap3", "Chapter 3", "", ContentKind::Video).unlocks_on_day(offset)
    }

    #[test]
    fn test_offset_zero_always_unlocked() {
        let item = gated_item(0);
        let now = Utc::now();
        assert!(is_unlocked(&item, None, now));
        assert!(is_unlocked(&item, Some(now), now));
        assert_eq!(days_remaining(&item, None, now), 0);
    }

    #[test]
    fn test_unlock_boundary_at_three_days() {
        let item = gated_item(3);
        let granted = Utc::now();

        // 2.9 elapsed days: still locked, one whole day remaining
        let almost = granted + Duration::minutes((2.9 * 24.0 * 60.0) as i64);
        assert!(!is_unlocked(&item, Some(granted), almost));
        assert_eq!(days_remaining(&item, Some(granted), almost), 1);

        // exactly 3 days: unlocked
        let exact = granted + Duration::days(3);
        assert!(is_unlocked(&item, Some(granted), exact));
        assert_eq!(days_remaining(&item, Some(granted), exact), 0);

        // just past 3 days: still unlocked
        let past = exact + Duration::seconds(9);
        assert!(is_unlocked(&item, Some(granted), past));
    }

    #[test]
    fn test_locked_case_always_has_positive_remaining() {
        let item = gated_item(5);
        let granted = Utc::now();
        for day in 0..5 {
            let now = granted + Duration::days(day);
            assert!(!is_unlocked(&item, Some(granted), now));
            assert_eq!(days_remaining(&item, Some(granted), now), 5 - day as u32);
        }
    }

    #[test]
    fn test_absent_grant_keeps_gated_items_locked() {
        let item = gated_item(3);
        let now = Utc::now();
        assert_eq!(days_passed(None, now), 0);
        assert!(!is_unlocked(&item, None, now));
        assert_eq!(days_remaining(&item, None, now), 3);
    }

    #[test]
    fn test_grant_in_the_future_counts_as_zero_days() {
        let item = gated_item(3);
        let now = Utc::now();
        let granted = now + Duration::days(2);
        assert_eq!(days_passed(Some(granted), now), 0);
        assert!(!is_unlocked(&item, Some(granted), now));
    }

    #[test]
    fn test_deterministic_for_same_now() {
        let item = gated_item(3);
        let granted = Utc::now();
        let now = granted + Duration::hours(50);
        assert_eq!(
            is_unlocked(&item, Some(granted), now),
            is_unlocked(&item, Some(granted), now)
        );
        assert_eq!(
            days_remaining(&item, Some(granted), now),
            days_remaining(&item, Some(granted), now)
        );
    }
}
