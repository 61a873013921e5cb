//! Plain-text rendering of projected timelines.
//!
//! Maps directives onto visual elements:
//! - date separators where a calendar day starts
//! - blank spacer lines sized by the spacing tier
//! - sender headers when the sender changes or a new day starts
//! - status text under messages whose status is shown

use chrono::FixedOffset;

use crate::domain::{
    calendar::{calendar_day, format_day, format_time},
    conversation::ConversationView,
    message::Message,
    spacing::SpacingTier,
    timeline::RenderDirective,
};

const OWN_SENDER_NAME: &str = "You";
const EMPTY_MESSAGE: &str = "[Empty message]";
const INDENT: &str = "      "; // aligns with "HH:MM "

/// A visual element of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineElement {
    /// Date separator line (e.g., "——— 14 Feb 2026 ———").
    DateSeparator(String),
    /// Blank lines between consecutive messages.
    Spacer(usize),
    Message {
        time: String,
        sender: Option<String>,
        content: String,
        status: Option<String>,
    },
}

fn spacer_lines(tier: SpacingTier) -> usize {
    match tier {
        SpacingTier::Tight | SpacingTier::SectionBreak => 0,
        SpacingTier::Medium => 1,
        SpacingTier::Loose => 2,
    }
}

/// Builds visual elements for `view.messages`, zipped with their directives.
pub fn build_timeline_elements(
    view: &ConversationView,
    directives: &[RenderDirective],
    day_offset: FixedOffset,
) -> Vec<TimelineElement> {
    let mut elements = Vec::new();
    let mut prev_sender: Option<i64> = None;

    for (message, directive) in view.messages.iter().zip(directives) {
        if directive.show_date_divider {
            let day = calendar_day(message.timestamp_ms, day_offset);
            elements.push(TimelineElement::DateSeparator(format_day(day)));
        } else {
            match spacer_lines(directive.spacing_tier) {
                0 => {}
                lines => elements.push(TimelineElement::Spacer(lines)),
            }
        }

        let show_sender = directive.show_date_divider || prev_sender != Some(message.sender_id);
        let sender = show_sender.then(|| sender_label(message, directive.is_own));

        elements.push(TimelineElement::Message {
            time: format_time(message.timestamp_ms, day_offset),
            sender,
            content: message.text.clone(),
            status: directive
                .show_status()
                .then(|| directive.status_label.to_string()),
        });

        prev_sender = Some(message.sender_id);
    }

    elements
}

fn sender_label(message: &Message, is_own: bool) -> String {
    if is_own {
        OWN_SENDER_NAME.to_owned()
    } else if message.sender_name.is_empty() {
        format!("#{}", message.sender_id)
    } else {
        message.sender_name.clone()
    }
}

/// Flattens elements into printable lines.
pub fn render_lines(elements: &[TimelineElement]) -> Vec<String> {
    let mut lines = Vec::new();

    for element in elements {
        match element {
            TimelineElement::DateSeparator(date) => {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("——— {} ———", date));
                lines.push(String::new());
            }
            TimelineElement::Spacer(count) => {
                lines.extend(std::iter::repeat_n(String::new(), *count));
            }
            TimelineElement::Message {
                time,
                sender,
                content,
                status,
            } => push_message_lines(
                &mut lines,
                time,
                sender.as_deref(),
                content,
                status.as_deref(),
            ),
        }
    }

    lines
}

fn push_message_lines(
    lines: &mut Vec<String>,
    time: &str,
    sender: Option<&str>,
    content: &str,
    status: Option<&str>,
) {
    let mut content_lines = content.lines();

    match sender {
        Some(name) => {
            // Header row, then every content line indented.
            lines.push(format!("{:>5} {}:", time, name));
            let mut any = false;
            for text_line in content_lines {
                lines.push(format!("{INDENT}{text_line}"));
                any = true;
            }
            if !any {
                lines.push(format!("{INDENT}{EMPTY_MESSAGE}"));
            }
        }
        None => {
            let first = content_lines.next().unwrap_or(EMPTY_MESSAGE);
            lines.push(format!("{:>5} {}", time, first));
            for text_line in content_lines {
                lines.push(format!("{INDENT}{text_line}"));
            }
        }
    }

    if let Some(status) = status {
        lines.push(format!("{INDENT}· {status}"));
    }
}
