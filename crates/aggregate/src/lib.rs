mod parser;
mod pipeline;
mod totals;
mod types;

pub use parser::{format_minutes, parse_duration_text, parse_time_of_day};
pub use pipeline::fill_missing_durations;
pub use totals::{aggregate, classify_day, minutes_between, sum_duration_texts};
pub use types::{DayStatus, DaySummary};
