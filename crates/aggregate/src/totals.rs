use hours_core::{AggregateOptions, AggregateResult, DayRecord, MINUTES_PER_DAY, TimeOfDay};

use crate::parser::parse_duration_text;
use crate::types::{DayStatus, DaySummary};

/// Minutes from `start` to `end` within one day, wrapping past midnight.
/// A missing bound means the interval has not been timed yet.
pub fn minutes_between(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> u32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let start = start.minutes_since_midnight();
    let end = end.minutes_since_midnight();
    if end >= start {
        end - start
    } else {
        end + MINUTES_PER_DAY - start
    }
}

pub fn classify_day(record: &DayRecord) -> DaySummary {
    match (record.start1, record.end1, record.start2, record.end2) {
        (Some(start1), Some(end1), Some(start2), Some(end2)) => DaySummary {
            status: DayStatus::SplitShift,
            minutes: minutes_between(Some(start1), Some(end1))
                + minutes_between(Some(start2), Some(end2)),
        },
        (Some(start1), Some(end1), None, None) => DaySummary {
            status: DayStatus::SingleShift,
            minutes: minutes_between(Some(start1), Some(end1)),
        },
        _ => DaySummary::incomplete(),
    }
}

pub fn aggregate<'a, I>(records: I, options: &AggregateOptions) -> AggregateResult
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut result = AggregateResult::default();
    for record in records {
        let day = classify_day(record);
        if day.is_completed() {
            result.total_minutes = result.total_minutes.saturating_add(u64::from(day.minutes));
            result.completed_day_count += 1;
        } else {
            result.in_progress_day_count += 1;
        }
    }

    if result.completed_day_count > 0 {
        result.average_minutes_per_day = result.total_minutes / result.completed_day_count;
    }

    let total = result.total_minutes as i64;
    let expected = i64::from(options.expected_daily_minutes)
        .saturating_mul(result.completed_day_count as i64);
    result.balance_minutes = total - expected;
    result.remaining_minutes_to_target = options
        .target_total_minutes
        .map(|target| i64::from(target) - total);
    result
}

pub fn sum_duration_texts<I, S>(texts: I) -> i64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| parse_duration_text(text.as_ref()))
        .fold(0i64, i64::saturating_add)
}
