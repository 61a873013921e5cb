use std::collections::{HashMap, HashSet};

use super::message::Message;

/// Read-only snapshot handed to the projector on every render.
///
/// Everything here is owned by the caller: the pinned and read-marker sets are
/// session-local interaction state and the external map reflects acknowledgements
/// that have not yet landed in the messages' own receipt fields.
///
/// `messages` must be in ascending chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationView {
    pub viewer_id: i64,
    pub messages: Vec<Message>,
    pub external_status: HashMap<i64, String>,
    pub pinned_message_ids: HashSet<i64>,
    pub visible_read_marker_ids: HashSet<i64>,
}

impl ConversationView {
    pub fn new(viewer_id: i64, messages: Vec<Message>) -> Self {
        Self {
            viewer_id,
            messages,
            ..Self::default()
        }
    }

    pub fn with_external_status(mut self, message_id: i64, label: impl Into<String>) -> Self {
        self.external_status.insert(message_id, label.into());
        self
    }

    pub fn with_pinned(mut self, message_id: i64) -> Self {
        self.pinned_message_ids.insert(message_id);
        self
    }

    pub fn with_visible_read_marker(mut self, message_id: i64) -> Self {
        self.visible_read_marker_ids.insert(message_id);
        self
    }

    pub fn external_status_for(&self, message_id: i64) -> Option<&str> {
        self.external_status.get(&message_id).map(String::as_str)
    }

    pub fn is_pinned(&self, message_id: i64) -> bool {
        self.pinned_message_ids.contains(&message_id)
    }

    pub fn is_read_marker_visible(&self, message_id: i64) -> bool {
        self.visible_read_marker_ids.contains(&message_id)
    }

    pub fn is_chronological(&self) -> bool {
        self.messages
            .windows(2)
            .all(|pair| pair[0].timestamp_ms <= pair[1].timestamp_ms)
    }

    /// Stable sort by timestamp; messages sharing a timestamp keep their order.
    pub fn sort_chronologically(&mut self) {
        self.messages.sort_by_key(|message| message.timestamp_ms);
    }

    /// Keeps only the most recent `limit` messages.
    ///
    /// Landmarks are recomputed over the window, so an own message outside it can
    /// no longer claim the read marker.
    pub fn recent_window(mut self, limit: usize) -> Self {
        if self.messages.len() > limit {
            let start = self.messages.len() - limit;
            self.messages.drain(..start);
        }
        self
    }
}
