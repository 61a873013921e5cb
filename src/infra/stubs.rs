use crate::{
    domain::conversation::ConversationView,
    infra::{
        config::AppConfig,
        contracts::{ConfigAdapter, SnapshotSource},
        error::AppError,
    },
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError> {
        Ok(AppConfig::default())
    }
}

/// Hands out a clone of a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StubSnapshotSource {
    pub view: ConversationView,
}

impl SnapshotSource for StubSnapshotSource {
    fn load_snapshot(&self) -> Result<ConversationView, AppError> {
        Ok(self.view.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }
}
