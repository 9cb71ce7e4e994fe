use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use hours_core::DayRecord;

use crate::error::{Result, StoreError};
use crate::store::{RecordSink, RecordSource};

/// In-process record store. Writes are applied to the held records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<DayRecord>>,
    writes: Mutex<Vec<(String, String)>>,
    rejected: Mutex<Vec<String>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new(records: Vec<DayRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<DayRecord> {
        self.lock_records().clone()
    }

    /// Every `(record_id, duration_text)` written so far, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Makes every subsequent call fail as if the backend were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Fails writes to `record_id` with an API error while reads keep working.
    pub fn reject_writes_to(&self, record_id: impl Into<String>) {
        self.rejected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record_id.into());
    }

    fn check_writable(&self, record_id: &str) -> Result<()> {
        let rejected = self
            .rejected
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if rejected.iter().any(|id| id == record_id) {
            return Err(StoreError::Api {
                status: 409,
                code: Some("conflict_error".to_string()),
                message: format!("page {record_id} is locked"),
            });
        }
        Ok(())
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store offline".to_string()));
        }
        Ok(())
    }

    fn lock_records(&self) -> std::sync::MutexGuard<'_, Vec<DayRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordSource for MemoryStore {
    fn query_records(&self) -> Result<Vec<DayRecord>> {
        self.check_available()?;
        Ok(self.records())
    }
}

impl RecordSink for MemoryStore {
    fn write_duration(&self, record_id: &str, duration_text: &str) -> Result<()> {
        self.check_available()?;
        self.check_writable(record_id)?;
        let mut records = self.lock_records();
        let record = records
            .iter_mut()
            .find(|record| record.id == record_id)
            .ok_or_else(|| StoreError::NotFound(record_id.to_string()))?;
        record.duration_text = Some(duration_text.to_string());
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((record_id.to_string(), duration_text.to_string()));
        Ok(())
    }
}
