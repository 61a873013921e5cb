use std::path::Path;

use crate::{
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = adapter.load()?;

    AppContext::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{config::AppConfig, stubs::StubConfigAdapter};

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./missing-config.toml")));

        let context = build_context(&adapter).expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
    }

    #[test]
    fn builds_projector_from_stub_config() {
        let context = build_context(&StubConfigAdapter).expect("context should build");

        assert_eq!(context.projector.day_offset().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_config_with_invalid_offset() {
        let mut config = AppConfig::default();
        config.timeline.utc_offset_minutes = 5_000;

        assert!(matches!(
            AppContext::new(config),
            Err(AppError::InvalidConfig { .. })
        ));
    }
}
