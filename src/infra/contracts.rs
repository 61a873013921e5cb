use crate::{
    domain::conversation::ConversationView,
    infra::{config::AppConfig, error::AppError},
};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError>;
}

/// Produces the conversation snapshot to project.
pub trait SnapshotSource {
    fn load_snapshot(&self) -> Result<ConversationView, AppError>;
}
