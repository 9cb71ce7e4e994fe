use hours_aggregate::format_minutes;
use hours_app::Result;
use hours_core::{AggregateResult, MINUTES_PER_HOUR};

use crate::{
    AppContext, FillResponse, OkResponse, RecordedHoursResponse, RemainingHours,
    WorkedHoursResponse,
};

/// Splits signed minutes into hour/minute components sharing the sign.
fn signed_parts(minutes: i64) -> (i64, i64) {
    let per_hour = i64::from(MINUTES_PER_HOUR);
    let hours = minutes.abs() / per_hour;
    let rest = minutes.abs() % per_hour;
    if minutes < 0 {
        (-hours, -rest)
    } else {
        (hours, rest)
    }
}

fn unsigned_parts(minutes: u64) -> (u64, u64) {
    let per_hour = u64::from(MINUTES_PER_HOUR);
    (minutes / per_hour, minutes % per_hour)
}

pub fn worked_hours_response(
    result: &AggregateResult,
    target_total_minutes: Option<u32>,
) -> WorkedHoursResponse {
    let (worked_hours, worked_minutes) = unsigned_parts(result.total_minutes);
    let (average_hours, average_minutes) = unsigned_parts(result.average_minutes_per_day);
    let (extra_hours, extra_minutes) = signed_parts(result.balance_minutes);
    let remaining = target_total_minutes
        .zip(result.remaining_minutes_to_target)
        .map(|(target, remaining)| {
            let (remaining_hours, remaining_minutes) = signed_parts(remaining);
            RemainingHours {
                target_hours: target / MINUTES_PER_HOUR,
                remaining_total_minutes: remaining,
                remaining_str: format_minutes(remaining),
                remaining_hours,
                remaining_minutes,
            }
        });
    WorkedHoursResponse {
        total_minutes: result.total_minutes,
        worked_hours_str: format_minutes(result.total_minutes as i64),
        worked_hours,
        worked_minutes,
        completed_days: result.completed_day_count,
        in_progress_days: result.in_progress_day_count,
        average_per_day_str: format_minutes(result.average_minutes_per_day as i64),
        average_hours_per_day: average_hours,
        average_minutes_per_day: average_minutes,
        extra_total_minutes: result.balance_minutes,
        extra_hours_str: format_minutes(result.balance_minutes),
        extra_hours,
        extra_minutes,
        remaining,
    }
}

pub fn worked_hours(ctx: &AppContext) -> Result<WorkedHoursResponse> {
    let service = &ctx.app_state.services.worked_hours;
    let result = service.summary()?;
    Ok(worked_hours_response(
        &result,
        service.options().target_total_minutes,
    ))
}

pub fn fill_worked_hours(ctx: &AppContext) -> Result<FillResponse> {
    let updated_entries = ctx.app_state.services.worked_hours.fill()?;
    Ok(FillResponse { updated_entries })
}

pub fn recorded_hours(ctx: &AppContext) -> Result<RecordedHoursResponse> {
    let total = ctx.app_state.services.worked_hours.recorded_total()?;
    Ok(RecordedHoursResponse {
        total_minutes: total.total_minutes,
        total_str: format_minutes(total.total_minutes),
        record_count: total.record_count,
    })
}

pub fn ok() -> OkResponse {
    OkResponse { ok: true }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hours_app::{AppConfig, AppState};
    use hours_core::{AggregateOptions, DayRecord};
    use hours_notion::MemoryStore;

    use super::*;

    #[test]
    fn signed_parts_share_sign() {
        assert_eq!(signed_parts(-135), (-2, -15));
        assert_eq!(signed_parts(180), (3, 0));
        assert_eq!(signed_parts(-45), (0, -45));
    }

    #[test]
    fn response_formats_negative_balance() {
        let result = AggregateResult {
            total_minutes: 105,
            completed_day_count: 1,
            in_progress_day_count: 0,
            average_minutes_per_day: 105,
            balance_minutes: -135,
            remaining_minutes_to_target: None,
        };
        let response = worked_hours_response(&result, None);
        assert_eq!(response.worked_hours_str, "1h 45min");
        assert_eq!(response.extra_hours_str, "-2h 15min");
        assert_eq!(response.extra_hours, -2);
        assert_eq!(response.extra_minutes, -15);
        assert!(response.remaining.is_none());
    }

    #[test]
    fn worked_hours_includes_remaining_when_targeted() {
        let mut record = DayRecord::new("a");
        record.start1 = hours_aggregate::parse_time_of_day("9:25");
        record.end1 = hours_aggregate::parse_time_of_day("14:10");
        let store = Arc::new(MemoryStore::new(vec![record]));
        let config = AppConfig {
            options: AggregateOptions {
                expected_daily_minutes: 240,
                target_total_minutes: Some(10 * 60),
            },
        };
        let ctx = AppContext {
            app_state: AppState::new(config, store),
        };

        let response = worked_hours(&ctx).expect("worked hours");
        assert_eq!(response.total_minutes, 285);
        assert_eq!(response.average_per_day_str, "4h 45min");
        assert_eq!(response.extra_hours_str, "0h 45min");
        let remaining = response.remaining.expect("remaining");
        assert_eq!(remaining.target_hours, 10);
        assert_eq!(remaining.remaining_total_minutes, 315);
        assert_eq!(remaining.remaining_str, "5h 15min");
    }
}
