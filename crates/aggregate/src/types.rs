use serde::Serialize;

/// Which shift pattern a day matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Two start/end pairs with a break in between.
    SplitShift,
    /// One start/end pair and nothing else.
    SingleShift,
    /// Still in progress, partially logged, or empty.
    Incomplete,
}

/// Worked minutes for one day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub status: DayStatus,
    pub minutes: u32,
}

impl DaySummary {
    pub fn incomplete() -> Self {
        Self {
            status: DayStatus::Incomplete,
            minutes: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status != DayStatus::Incomplete
    }
}
