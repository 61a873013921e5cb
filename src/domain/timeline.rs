//! Timeline projection: per-message display directives.
//!
//! Given a conversation snapshot, derives for every message whether its
//! delivery/read status is shown, whether a date divider precedes it, and how
//! much vertical space separates it from the previous message.
//!
//! At most one own message shows its status by default (the newest one). The
//! read confirmation moves to an earlier message when newer own messages are
//! still unread, and a pin reveals the status of any other own message.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

use super::{
    calendar::calendar_day,
    conversation::ConversationView,
    delivery_status::{resolve_status, StatusLabel},
    message::Message,
    spacing::{SpacingPolicy, SpacingTier},
};

/// Positions singled out by the backward scan over own messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Landmarks {
    /// Chronologically last own message.
    pub last_own: Option<usize>,
    /// Chronologically last own message that someone has read.
    pub last_read_own: Option<usize>,
}

/// Finds both landmarks in a single backward pass, stopping once both are known.
pub fn locate_landmarks(messages: &[Message], viewer_id: i64) -> Landmarks {
    let mut landmarks = Landmarks::default();

    for (index, message) in messages.iter().enumerate().rev() {
        if !message.is_from(viewer_id) {
            continue;
        }

        if landmarks.last_own.is_none() {
            landmarks.last_own = Some(index);
        }
        if landmarks.last_read_own.is_none() && message.is_seen() {
            landmarks.last_read_own = Some(index);
        }

        if landmarks.last_own.is_some() && landmarks.last_read_own.is_some() {
            break;
        }
    }

    landmarks
}

/// Why (or whether) a message's status text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusVisibility {
    #[default]
    Hidden,
    /// Newest own message that nobody has read yet.
    Newest,
    /// Read confirmation, revealed through the visible read-marker set.
    ReadMarker,
    /// Non-newest own message the viewer clicked open.
    Pinned,
}

impl StatusVisibility {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Newest => "newest",
            Self::ReadMarker => "read-marker",
            Self::Pinned => "pinned",
        }
    }
}

/// Display directives for one message, index-aligned with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDirective {
    pub index: usize,
    pub message_id: i64,
    pub is_own: bool,
    pub is_latest_own_message: bool,
    pub is_last_read_own_message: bool,
    pub status_label: StatusLabel,
    pub status_visibility: StatusVisibility,
    pub show_date_divider: bool,
    pub spacing_tier: SpacingTier,
}

impl RenderDirective {
    pub fn show_status(&self) -> bool {
        self.status_visibility != StatusVisibility::Hidden
    }
}

/// Stateless projector; configuration only affects day boundaries and gap tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineProjector {
    day_offset: FixedOffset,
    spacing: SpacingPolicy,
}

impl Default for TimelineProjector {
    fn default() -> Self {
        Self::new(Utc.fix(), SpacingPolicy::default())
    }
}

impl TimelineProjector {
    pub fn new(day_offset: FixedOffset, spacing: SpacingPolicy) -> Self {
        Self {
            day_offset,
            spacing,
        }
    }

    pub fn day_offset(&self) -> FixedOffset {
        self.day_offset
    }

    /// Projects every message of the snapshot, preserving order.
    ///
    /// Messages must be sorted by timestamp; the order is not repaired here.
    pub fn project(&self, view: &ConversationView) -> Vec<RenderDirective> {
        let messages = view.messages.as_slice();
        debug_assert!(
            view.is_chronological(),
            "conversation messages must be in chronological order"
        );

        let landmarks = locate_landmarks(messages, view.viewer_id);
        let mut directives = Vec::with_capacity(messages.len());
        let mut prev: Option<(&Message, NaiveDate)> = None;

        for (index, message) in messages.iter().enumerate() {
            let day = calendar_day(message.timestamp_ms, self.day_offset);
            let is_own = message.is_from(view.viewer_id);
            let is_latest_own_message = is_own && landmarks.last_own == Some(index);
            let is_last_read_own_message = is_own && landmarks.last_read_own == Some(index);
            let status_label = resolve_status(message, view.external_status_for(message.id));

            let status_visibility = if is_own {
                own_status_visibility(
                    is_latest_own_message,
                    is_last_read_own_message,
                    &status_label,
                    view.is_pinned(message.id),
                    view.is_read_marker_visible(message.id),
                )
            } else {
                StatusVisibility::Hidden
            };

            let (show_date_divider, spacing_tier) = match prev {
                Some((prev_message, prev_day)) if prev_day == day => {
                    (false, self.spacing.same_day_tier(prev_message, message))
                }
                _ => (true, SpacingTier::SectionBreak),
            };

            directives.push(RenderDirective {
                index,
                message_id: message.id,
                is_own,
                is_latest_own_message,
                is_last_read_own_message,
                status_label,
                status_visibility,
                show_date_divider,
                spacing_tier,
            });

            prev = Some((message, day));
        }

        directives
    }
}

fn own_status_visibility(
    is_latest: bool,
    is_last_read: bool,
    label: &StatusLabel,
    is_pinned: bool,
    read_marker_visible: bool,
) -> StatusVisibility {
    if label.is_empty() {
        return StatusVisibility::Hidden;
    }

    match (is_latest, is_last_read) {
        // Everything sent so far has been seen.
        (true, true) if read_marker_visible => StatusVisibility::ReadMarker,
        (true, true) => StatusVisibility::Hidden,
        (true, false) => StatusVisibility::Newest,
        // Newer own messages are still unread; the confirmation sits here. Pins
        // cannot claim this slot.
        (false, true) if read_marker_visible && *label == StatusLabel::Read => {
            StatusVisibility::ReadMarker
        }
        (false, true) => StatusVisibility::Hidden,
        (false, false) if is_pinned => StatusVisibility::Pinned,
        (false, false) => StatusVisibility::Hidden,
    }
}
