//! Record store seam. Handlers only see `dyn AttendanceStore`.

use crate::model::attendance::AttendanceRecord;
use async_trait::async_trait;
use derive_more::{Display, From};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::MySqlAttendanceStore;

#[derive(Debug, Display, From)]
#[display(fmt = "store error: {}", _0)]
pub struct StoreError(sqlx::Error);

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Appends one record. No uniqueness is enforced.
    async fn insert(&self, record: &AttendanceRecord) -> Result<(), StoreError>;

    /// All records whose `timestamp` starts with `prefix`, oldest first.
    async fn find_by_date_prefix(&self, prefix: &str) -> Result<Vec<AttendanceRecord>, StoreError>;
}
