//! Presentation state engine for chat message timelines.
//!
//! [`domain::timeline::TimelineProjector`] turns a [`domain::conversation::ConversationView`]
//! into one [`domain::timeline::RenderDirective`] per message.

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
#[cfg(test)]
mod test_support;
pub mod ui;
pub mod usecases;
