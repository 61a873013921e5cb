//! TOML-backed conversation snapshots.
//!
//! ```toml
//! viewer_id = 1
//! pinned_message_ids = [3]
//! visible_read_marker_ids = [5]
//!
//! [[external_status]]
//! message_id = 7
//! label = "Sending"
//!
//! [[messages]]
//! id = 1
//! sender_id = 1
//! sender_name = "Me"
//! text = "hi"
//! created_at = "2024-01-01T10:00:00Z"
//! seen_by_count = 1
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::DateTime;
use serde::Deserialize;

use crate::{
    domain::{conversation::ConversationView, message::Message},
    infra::{contracts::SnapshotSource, error::AppError},
};

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    viewer_id: i64,
    #[serde(default)]
    pinned_message_ids: Vec<i64>,
    #[serde(default)]
    visible_read_marker_ids: Vec<i64>,
    #[serde(default)]
    external_status: Vec<ExternalStatusEntry>,
    #[serde(default)]
    messages: Vec<MessageEntry>,
}

#[derive(Debug, Deserialize)]
struct ExternalStatusEntry {
    message_id: i64,
    label: String,
}

#[derive(Debug, Deserialize)]
struct MessageEntry {
    id: i64,
    sender_id: i64,
    #[serde(default)]
    sender_name: String,
    #[serde(default)]
    text: String,
    created_at: String,
    #[serde(default)]
    seen_by_count: u32,
    #[serde(default)]
    delivered_to_count: u32,
}

impl MessageEntry {
    fn into_message(self) -> Result<Message, AppError> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at).map_err(|source| {
            AppError::SnapshotTimestamp {
                message_id: self.id,
                value: self.created_at.clone(),
                source,
            }
        })?;

        Ok(Message {
            id: self.id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            text: self.text,
            timestamp_ms: created_at.timestamp_millis(),
            seen_by_count: self.seen_by_count,
            delivered_to_count: self.delivered_to_count,
        })
    }
}

impl SnapshotFile {
    fn into_view(self) -> Result<ConversationView, AppError> {
        let messages = self
            .messages
            .into_iter()
            .map(MessageEntry::into_message)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConversationView {
            viewer_id: self.viewer_id,
            messages,
            external_status: self
                .external_status
                .into_iter()
                .map(|entry| (entry.message_id, entry.label))
                .collect(),
            pinned_message_ids: self.pinned_message_ids.into_iter().collect(),
            visible_read_marker_ids: self.visible_read_marker_ids.into_iter().collect(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn load_snapshot(&self) -> Result<ConversationView, AppError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| AppError::SnapshotRead {
            path: self.path.clone(),
            source,
        })?;

        let file: SnapshotFile = toml::from_str(&raw).map_err(|source| AppError::SnapshotParse {
            path: self.path.clone(),
            source,
        })?;

        file.into_view()
    }
}
