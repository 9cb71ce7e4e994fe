use hours_aggregate::{aggregate, fill_missing_durations, sum_duration_texts};
use hours_core::{AggregateOptions, AggregateResult, DayRecord, RecordedTotal, UpdatedEntry};
use hours_notion::{RecordSink, RecordSource};
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::services::{SharedConfig, SharedStore};

#[derive(Clone)]
pub struct WorkedHoursService {
    config: SharedConfig,
    store: SharedStore,
}

impl WorkedHoursService {
    pub(super) fn new(config: SharedConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    pub fn options(&self) -> &AggregateOptions {
        &self.config.options
    }

    fn records(&self) -> Result<Vec<DayRecord>> {
        self.store.query_records().map_err(|err| {
            warn!(error = %err, "failed to query records");
            AppError::Fetch(err)
        })
    }

    pub fn summary(&self) -> Result<AggregateResult> {
        let records = self.records()?;
        let result = aggregate(&records, &self.config.options);
        info!(
            records = records.len(),
            completed_days = result.completed_day_count,
            total_minutes = result.total_minutes,
            "computed worked hours"
        );
        Ok(result)
    }

    /// Sums the durations already written onto records, ignoring start/end times.
    pub fn recorded_total(&self) -> Result<RecordedTotal> {
        let records = self.records()?;
        let texts: Vec<&str> = records
            .iter()
            .filter_map(|record| record.duration_text.as_deref())
            .collect();
        Ok(RecordedTotal {
            total_minutes: sum_duration_texts(&texts),
            record_count: texts.len() as u64,
        })
    }

    /// Writes a duration onto every completed record that lacks one.
    pub fn fill(&self) -> Result<Vec<UpdatedEntry>> {
        let records = self.records()?;
        let writes = fill_missing_durations(&records);
        let mut updated = Vec::with_capacity(writes.len());
        for write in writes {
            self.store
                .write_duration(&write.record_id, &write.duration_text)
                .map_err(|err| {
                    warn!(record_id = %write.record_id, error = %err, "failed to write duration");
                    AppError::Update(err)
                })?;
            updated.push(UpdatedEntry::from(write));
        }
        info!(
            records = records.len(),
            updated = updated.len(),
            "filled missing worked hours"
        );
        Ok(updated)
    }
}
