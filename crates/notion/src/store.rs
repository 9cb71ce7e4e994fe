use hours_core::DayRecord;

use crate::error::Result;

/// Supplies the current snapshot of day records.
pub trait RecordSource {
    fn query_records(&self) -> Result<Vec<DayRecord>>;
}

/// Persists a computed duration onto one record.
pub trait RecordSink {
    fn write_duration(&self, record_id: &str, duration_text: &str) -> Result<()>;
}

pub trait RecordStore: RecordSource + RecordSink + Send + Sync {}

impl<T> RecordStore for T where T: RecordSource + RecordSink + Send + Sync {}
