use crate::{
    domain::timeline::TimelineProjector,
    infra::{config::AppConfig, error::AppError},
};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub projector: TimelineProjector,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.timeline.validate()?;
        let projector = TimelineProjector::new(
            config.timeline.day_offset()?,
            config.timeline.spacing_policy()?,
        );

        Ok(Self { config, projector })
    }
}
