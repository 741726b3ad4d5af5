use super::{AttendanceStore, StoreError};
use crate::model::attendance::AttendanceRecord;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Vec-backed store for handler tests. `failing()` turns every call into a
/// storage error.
#[derive(Default)]
pub struct MemoryAttendanceStore {
    records: Mutex<Vec<AttendanceRecord>>,
    reads: AtomicUsize,
    fail: bool,
}

impl MemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_records(records: Vec<AttendanceRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttendanceStore for MemoryAttendanceStore {
    async fn insert(&self, record: &AttendanceRecord) -> Result<(), StoreError> {
        if self.fail {
            return Err(sqlx::Error::PoolClosed.into());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_by_date_prefix(&self, prefix: &str) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(sqlx::Error::PoolClosed.into());
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.timestamp.starts_with(prefix))
            .cloned()
            .collect())
    }
}
