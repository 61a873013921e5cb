/// A single chat message as supplied by the conversation store.
///
/// The engine only reads messages; receipt counts are reduced to "any / none".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub text: String,
    pub timestamp_ms: i64,
    /// Number of other participants that have read the message.
    pub seen_by_count: u32,
    /// Number of recipient devices the message has reached.
    pub delivered_to_count: u32,
}

impl Message {
    pub fn is_from(&self, user_id: i64) -> bool {
        self.sender_id == user_id
    }

    pub fn is_seen(&self) -> bool {
        self.seen_by_count > 0
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered_to_count > 0
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{other_msg, own_msg, VIEWER};

    #[test]
    fn is_from_compares_sender_with_user() {
        let message = own_msg(1, 0);

        assert!(message.is_from(VIEWER));
        assert!(!other_msg(2, 0).is_from(VIEWER));
    }

    #[test]
    fn receipt_flags_only_care_about_emptiness() {
        let mut message = own_msg(1, 0);
        assert!(!message.is_seen());
        assert!(!message.is_delivered());

        message.seen_by_count = 3;
        message.delivered_to_count = 1;

        assert!(message.is_seen());
        assert!(message.is_delivered());
    }
}
