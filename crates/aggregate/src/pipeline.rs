use hours_core::{DayRecord, DurationWrite};

use crate::parser::format_minutes;
use crate::totals::classify_day;

fn has_duration(record: &DayRecord) -> bool {
    record
        .duration_text
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty())
}

/// Duration writes for every completed day that has none recorded yet.
pub fn fill_missing_durations<'a, I>(records: I) -> Vec<DurationWrite>
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    records
        .into_iter()
        .filter(|record| !has_duration(record))
        .filter_map(|record| {
            let day = classify_day(record);
            if !day.is_completed() {
                return None;
            }
            Some(DurationWrite {
                record_id: record.id.clone(),
                duration_text: format_minutes(i64::from(day.minutes)),
                minutes: day.minutes,
                start1: record.start1,
                end1: record.end1,
                start2: record.start2,
                end2: record.end2,
            })
        })
        .collect()
}
