use hours_core::UpdatedEntry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WorkedHoursResponse {
    pub total_minutes: u64,
    pub worked_hours_str: String,
    pub worked_hours: u64,
    pub worked_minutes: u64,
    pub completed_days: u64,
    pub in_progress_days: u64,
    pub average_per_day_str: String,
    pub average_hours_per_day: u64,
    pub average_minutes_per_day: u64,
    pub extra_total_minutes: i64,
    pub extra_hours_str: String,
    pub extra_hours: i64,
    pub extra_minutes: i64,
    /// `null` unless a target total is configured.
    pub remaining: Option<RemainingHours>,
}

#[derive(Debug, Serialize)]
pub struct RemainingHours {
    pub target_hours: u32,
    pub remaining_total_minutes: i64,
    pub remaining_str: String,
    pub remaining_hours: i64,
    pub remaining_minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct FillResponse {
    pub updated_entries: Vec<UpdatedEntry>,
}

#[derive(Debug, Serialize)]
pub struct RecordedHoursResponse {
    pub total_minutes: i64,
    pub total_str: String,
    pub record_count: u64,
}

#[derive(Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
