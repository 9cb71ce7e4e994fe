use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Default daily quota used for the overtime balance (4 hours).
pub const DEFAULT_EXPECTED_DAILY_MINUTES: u32 = 4 * MINUTES_PER_HOUR;

/// Wall-clock time with minute precision, 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// One row of attendance data as read from the record store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: String,
    pub start1: Option<TimeOfDay>,
    pub end1: Option<TimeOfDay>,
    pub start2: Option<TimeOfDay>,
    pub end2: Option<TimeOfDay>,
    pub duration_text: Option<String>,
}

impl DayRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateOptions {
    pub expected_daily_minutes: u32,
    pub target_total_minutes: Option<u32>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            expected_daily_minutes: DEFAULT_EXPECTED_DAILY_MINUTES,
            target_total_minutes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub total_minutes: u64,
    pub completed_day_count: u64,
    pub in_progress_day_count: u64,
    pub average_minutes_per_day: u64,
    pub balance_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_minutes_to_target: Option<i64>,
}

/// A computed duration waiting to be written back onto its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationWrite {
    pub record_id: String,
    pub duration_text: String,
    pub minutes: u32,
    pub start1: Option<TimeOfDay>,
    pub end1: Option<TimeOfDay>,
    pub start2: Option<TimeOfDay>,
    pub end2: Option<TimeOfDay>,
}

/// A record whose duration was written, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedEntry {
    pub page_id: String,
    pub worked_hours: String,
    pub inicio: Option<String>,
    pub fin: Option<String>,
    pub inicio_2: Option<String>,
    pub fin_2: Option<String>,
}

impl From<DurationWrite> for UpdatedEntry {
    fn from(write: DurationWrite) -> Self {
        Self {
            page_id: write.record_id,
            worked_hours: write.duration_text,
            inicio: write.start1.map(|time| time.to_string()),
            fin: write.end1.map(|time| time.to_string()),
            inicio_2: write.start2.map(|time| time.to_string()),
            fin_2: write.end2.map(|time| time.to_string()),
        }
    }
}

/// Sum of the durations already recorded on the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedTotal {
    pub total_minutes: i64,
    pub record_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0).is_none());
        assert!(TimeOfDay::new(23, 60).is_none());
        assert_eq!(
            TimeOfDay::new(23, 59).map(|t| t.minutes_since_midnight()),
            Some(1439)
        );
    }

    #[test]
    fn time_of_day_display_pads_minutes_only() {
        let time = TimeOfDay::new(9, 5).expect("time");
        assert_eq!(time.to_string(), "9:05");
        let time = TimeOfDay::new(14, 10).expect("time");
        assert_eq!(time.to_string(), "14:10");
    }

    #[test]
    fn updated_entry_echoes_inputs() {
        let write = DurationWrite {
            record_id: "page-1".to_string(),
            duration_text: "4h 45min".to_string(),
            minutes: 285,
            start1: TimeOfDay::new(9, 25),
            end1: TimeOfDay::new(14, 10),
            start2: None,
            end2: None,
        };
        let entry = UpdatedEntry::from(write);
        assert_eq!(entry.page_id, "page-1");
        assert_eq!(entry.inicio.as_deref(), Some("9:25"));
        assert_eq!(entry.fin.as_deref(), Some("14:10"));
        assert!(entry.inicio_2.is_none());
    }
}
