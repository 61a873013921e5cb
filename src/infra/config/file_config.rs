use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, TimelineConfig};

/// On-disk shape of `config.toml`; every key is optional and overrides a default.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub timeline: Option<FileTimelineConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(timeline) = self.timeline {
            timeline.merge_into(&mut config.timeline);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTimelineConfig {
    pub utc_offset_minutes: Option<i32>,
    pub tight_gap_minutes: Option<i64>,
    pub medium_gap_minutes: Option<i64>,
    pub window: Option<usize>,
}

impl FileTimelineConfig {
    fn merge_into(self, config: &mut TimelineConfig) {
        if let Some(offset) = self.utc_offset_minutes {
            config.utc_offset_minutes = offset;
        }

        if let Some(tight) = self.tight_gap_minutes {
            config.tight_gap_minutes = tight;
        }

        if let Some(medium) = self.medium_gap_minutes {
            config.medium_gap_minutes = medium;
        }

        if let Some(window) = self.window {
            config.window = window;
        }
    }
}
