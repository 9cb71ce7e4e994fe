use hours_core::{AggregateOptions, DEFAULT_EXPECTED_DAILY_MINUTES, MINUTES_PER_HOUR};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Quota and goal settings, in whole hours.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HoursSettings {
    pub expected_daily_hours: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_total_hours: Option<u32>,
}

impl Default for HoursSettings {
    fn default() -> Self {
        Self {
            expected_daily_hours: DEFAULT_EXPECTED_DAILY_MINUTES / MINUTES_PER_HOUR,
            target_total_hours: None,
        }
    }
}

impl HoursSettings {
    pub fn to_options(&self) -> Result<AggregateOptions> {
        let expected_daily_minutes = to_minutes(self.expected_daily_hours)
            .filter(|minutes| *minutes <= 24 * MINUTES_PER_HOUR)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "expected_daily_hours must be at most 24, got {}",
                    self.expected_daily_hours
                ))
            })?;
        let target_total_minutes = match self.target_total_hours {
            Some(hours) => Some(to_minutes(hours).ok_or_else(|| {
                AppError::InvalidInput(format!("target_total_hours too large: {}", hours))
            })?),
            None => None,
        };
        Ok(AggregateOptions {
            expected_daily_minutes,
            target_total_minutes,
        })
    }
}

fn to_minutes(hours: u32) -> Option<u32> {
    hours.checked_mul(MINUTES_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_four_hour_quota_without_target() {
        let options = HoursSettings::default().to_options().expect("options");
        assert_eq!(options.expected_daily_minutes, 240);
        assert_eq!(options.target_total_minutes, None);
    }

    #[test]
    fn target_hours_convert_to_minutes() {
        let settings = HoursSettings {
            expected_daily_hours: 8,
            target_total_hours: Some(300),
        };
        let options = settings.to_options().expect("options");
        assert_eq!(options.expected_daily_minutes, 480);
        assert_eq!(options.target_total_minutes, Some(18_000));
    }

    #[test]
    fn rejects_quota_longer_than_a_day() {
        let settings = HoursSettings {
            expected_daily_hours: 25,
            target_total_hours: None,
        };
        assert!(matches!(
            settings.to_options(),
            Err(AppError::InvalidInput(_))
        ));
    }
}
