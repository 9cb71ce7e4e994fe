use hours_aggregate::{
    aggregate, fill_missing_durations, format_minutes, minutes_between, parse_duration_text,
    parse_time_of_day,
};
use hours_core::{AggregateOptions, DayRecord, TimeOfDay};
use proptest::prelude::*;

fn day(id: &str, times: [&str; 4]) -> DayRecord {
    DayRecord {
        id: id.to_string(),
        start1: parse_time_of_day(times[0]),
        end1: parse_time_of_day(times[1]),
        start2: parse_time_of_day(times[2]),
        end2: parse_time_of_day(times[3]),
        duration_text: None,
    }
}

fn apply_writes(records: &mut [DayRecord]) -> usize {
    let writes = fill_missing_durations(records.iter());
    for write in &writes {
        let record = records
            .iter_mut()
            .find(|record| record.id == write.record_id)
            .expect("record for write");
        record.duration_text = Some(write.duration_text.clone());
    }
    writes.len()
}

#[test]
fn fill_is_idempotent_after_writes_apply() {
    let mut records = vec![
        day("mon", ["9:00", "13:00", "14:00", "18:00"]),
        day("tue", ["9:00", "12:00", "", ""]),
        day("wed", ["9:00", "", "", ""]),
    ];
    assert_eq!(apply_writes(&mut records), 2);
    assert_eq!(records[0].duration_text.as_deref(), Some("8h 0min"));
    assert_eq!(records[1].duration_text.as_deref(), Some("3h 0min"));
    assert!(records[2].duration_text.is_none());
    assert_eq!(apply_writes(&mut records), 0);
}

#[test]
fn recorded_durations_agree_with_aggregate_total() {
    let mut records = vec![
        day("mon", ["9:00", "13:00", "14:00", "18:00"]),
        day("tue", ["9:00", "12:00", "", ""]),
        day("wed", ["22:30", "1:15", "", ""]),
    ];
    apply_writes(&mut records);
    let recorded = hours_aggregate::sum_duration_texts(
        records.iter().filter_map(|record| record.duration_text.as_deref()),
    );
    let result = aggregate(&records, &AggregateOptions::default());
    assert_eq!(recorded, result.total_minutes as i64);
    assert_eq!(result.total_minutes, 480 + 180 + 165);
}

proptest! {
    #[test]
    fn duration_text_round_trips(minutes in -100_000i64..100_000i64) {
        prop_assert_eq!(parse_duration_text(&format_minutes(minutes)), minutes);
    }

    #[test]
    fn minutes_between_stays_within_a_day(
        h1 in 0u8..24, m1 in 0u8..60, h2 in 0u8..24, m2 in 0u8..60,
    ) {
        let start = TimeOfDay::new(h1, m1);
        let end = TimeOfDay::new(h2, m2);
        let minutes = minutes_between(start, end);
        prop_assert!(minutes < 24 * 60);
        prop_assert_eq!(minutes_between(start, start), 0);
        if minutes > 0 {
            prop_assert_eq!(minutes + minutes_between(end, start), 24 * 60);
        }
    }

    #[test]
    fn parsed_time_matches_components(h in 0u8..24, m in 0u8..60) {
        let text = format!("{h}:{m:02}");
        prop_assert_eq!(parse_time_of_day(&text), TimeOfDay::new(h, m));
    }
}
