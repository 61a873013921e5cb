use super::{calendar::gap_minutes, message::Message};

pub const DEFAULT_TIGHT_GAP_MINUTES: i64 = 2;
pub const DEFAULT_MEDIUM_GAP_MINUTES: i64 = 5;

/// Vertical gap between a message and the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingTier {
    Tight,
    Medium,
    Loose,
    /// First message of a calendar day; rendered with a date divider.
    SectionBreak,
}

impl SpacingTier {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Medium => "medium",
            Self::Loose => "loose",
            Self::SectionBreak => "section-break",
        }
    }
}

/// Inclusive minute thresholds for consecutive messages from the same sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingPolicy {
    pub tight_max_minutes: i64,
    pub medium_max_minutes: i64,
}

impl Default for SpacingPolicy {
    fn default() -> Self {
        Self {
            tight_max_minutes: DEFAULT_TIGHT_GAP_MINUTES,
            medium_max_minutes: DEFAULT_MEDIUM_GAP_MINUTES,
        }
    }
}

impl SpacingPolicy {
    /// Tier for `current` following `prev` on the same calendar day.
    pub fn same_day_tier(&self, prev: &Message, current: &Message) -> SpacingTier {
        if prev.sender_id != current.sender_id {
            return SpacingTier::Medium;
        }

        match gap_minutes(prev.timestamp_ms, current.timestamp_ms) {
            gap if gap <= self.tight_max_minutes => SpacingTier::Tight,
            gap if gap <= self.medium_max_minutes => SpacingTier::Medium,
            _ => SpacingTier::Loose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{other_msg, own_msg, JAN_1_2024_10AM, MINUTE_MS};

    fn tier_after(gap_ms: i64) -> SpacingTier {
        let prev = own_msg(1, JAN_1_2024_10AM);
        let current = own_msg(2, JAN_1_2024_10AM + gap_ms);
        SpacingPolicy::default().same_day_tier(&prev, &current)
    }

    #[test]
    fn same_sender_gap_boundaries() {
        assert_eq!(tier_after(0), SpacingTier::Tight);
        assert_eq!(tier_after(2 * MINUTE_MS), SpacingTier::Tight);
        assert_eq!(tier_after(2 * MINUTE_MS + 59_999), SpacingTier::Tight);
        assert_eq!(tier_after(3 * MINUTE_MS), SpacingTier::Medium);
        assert_eq!(tier_after(5 * MINUTE_MS), SpacingTier::Medium);
        assert_eq!(tier_after(6 * MINUTE_MS), SpacingTier::Loose);
    }

    #[test]
    fn sender_change_is_medium_even_for_short_gap() {
        let prev = own_msg(1, JAN_1_2024_10AM);
        let current = other_msg(2, JAN_1_2024_10AM + MINUTE_MS);

        assert_eq!(
            SpacingPolicy::default().same_day_tier(&prev, &current),
            SpacingTier::Medium
        );
    }

    #[test]
    fn sender_change_is_medium_for_long_gap() {
        let prev = own_msg(1, JAN_1_2024_10AM);
        let current = other_msg(2, JAN_1_2024_10AM + 90 * MINUTE_MS);

        assert_eq!(
            SpacingPolicy::default().same_day_tier(&prev, &current),
            SpacingTier::Medium
        );
    }

    #[test]
    fn custom_thresholds_shift_boundaries() {
        let policy = SpacingPolicy {
            tight_max_minutes: 0,
            medium_max_minutes: 10,
        };
        let prev = own_msg(1, JAN_1_2024_10AM);

        assert_eq!(
            policy.same_day_tier(&prev, &own_msg(2, JAN_1_2024_10AM + MINUTE_MS)),
            SpacingTier::Medium
        );
        assert_eq!(
            policy.same_day_tier(&prev, &own_msg(3, JAN_1_2024_10AM + 11 * MINUTE_MS)),
            SpacingTier::Loose
        );
    }
}
