use std::fmt;

use super::message::Message;

/// Delivery/read status shown next to an own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLabel {
    Sent,
    Delivered,
    Read,
    /// Authoritative label from the external status map that is not one of the built-ins.
    External(String),
}

impl StatusLabel {
    /// Maps an external label onto a built-in variant only on an exact match.
    pub fn from_external(label: &str) -> Self {
        match label {
            "Sent" => Self::Sent,
            "Delivered" => Self::Delivered,
            "Read" => Self::Read,
            other => Self::External(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sent => "Sent",
            Self::Delivered => "Delivered",
            Self::Read => "Read",
            Self::External(label) => label,
        }
    }

    /// Empty external labels never render.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the single status label for a message.
///
/// The external status wins when present; otherwise the message's own receipt
/// fields decide, falling back to `Sent`.
pub fn resolve_status(message: &Message, external_status: Option<&str>) -> StatusLabel {
    if let Some(label) = external_status {
        return StatusLabel::from_external(label);
    }

    if message.is_seen() {
        StatusLabel::Read
    } else if message.is_delivered() {
        StatusLabel::Delivered
    } else {
        StatusLabel::Sent
    }
}
