use crate::domain::{conversation::ConversationView, message::Message};

pub const VIEWER: i64 = 1;
pub const PEER: i64 = 2;

pub const MINUTE_MS: i64 = 60_000;
pub const JAN_1_2024_10AM: i64 = 1_704_103_200_000; // 2024-01-01 10:00:00 UTC

pub fn msg(id: i64, sender_id: i64, timestamp_ms: i64) -> Message {
    Message {
        id,
        sender_id,
        sender_name: if sender_id == VIEWER { "Me" } else { "Alice" }.to_owned(),
        text: format!("message {id}"),
        timestamp_ms,
        seen_by_count: 0,
        delivered_to_count: 0,
    }
}

pub fn own_msg(id: i64, timestamp_ms: i64) -> Message {
    msg(id, VIEWER, timestamp_ms)
}

pub fn other_msg(id: i64, timestamp_ms: i64) -> Message {
    msg(id, PEER, timestamp_ms)
}

pub fn seen(mut message: Message) -> Message {
    message.seen_by_count = 1;
    message.delivered_to_count = 1;
    message
}

pub fn delivered(mut message: Message) -> Message {
    message.delivered_to_count = 1;
    message
}

pub fn view(messages: Vec<Message>) -> ConversationView {
    ConversationView::new(VIEWER, messages)
}
