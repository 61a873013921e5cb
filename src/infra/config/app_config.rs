use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::{
    domain::spacing::{SpacingPolicy, DEFAULT_MEDIUM_GAP_MINUTES, DEFAULT_TIGHT_GAP_MINUTES},
    infra::error::AppError,
};

const SECONDS_PER_DAY: i32 = 86_400;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub timeline: TimelineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Offset from UTC used to decide calendar days.
    pub utc_offset_minutes: i32,
    pub tight_gap_minutes: i64,
    pub medium_gap_minutes: i64,
    /// Number of most recent messages projected when no explicit limit is given.
    pub window: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            tight_gap_minutes: DEFAULT_TIGHT_GAP_MINUTES,
            medium_gap_minutes: DEFAULT_MEDIUM_GAP_MINUTES,
            window: 200,
        }
    }
}

impl TimelineConfig {
    pub fn day_offset(&self) -> Result<FixedOffset, AppError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .filter(|seconds| seconds.abs() < SECONDS_PER_DAY)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| AppError::InvalidConfig {
                details: format!(
                    "timeline.utc_offset_minutes must be within ±1439, got {}",
                    self.utc_offset_minutes
                ),
            })
    }

    pub fn spacing_policy(&self) -> Result<SpacingPolicy, AppError> {
        if self.tight_gap_minutes < 0 || self.medium_gap_minutes < 0 {
            return Err(AppError::InvalidConfig {
                details: "timeline gap thresholds must not be negative".into(),
            });
        }

        if self.tight_gap_minutes > self.medium_gap_minutes {
            return Err(AppError::InvalidConfig {
                details: format!(
                    "timeline.tight_gap_minutes ({}) exceeds timeline.medium_gap_minutes ({})",
                    self.tight_gap_minutes, self.medium_gap_minutes
                ),
            });
        }

        Ok(SpacingPolicy {
            tight_max_minutes: self.tight_gap_minutes,
            medium_max_minutes: self.medium_gap_minutes,
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.day_offset()?;
        self.spacing_policy()?;

        if self.window == 0 {
            return Err(AppError::InvalidConfig {
                details: "timeline.window must be at least 1".into(),
            });
        }

        Ok(())
    }
}
