use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single stored attendance entry. `timestamp` is always produced by the
/// server in IST as `YYYY-MM-DD HH:mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub name: String,
    pub timestamp: String,
}

impl AttendanceRecord {
    pub fn new(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AttendanceStatus {
    Present,
}

/// Read-side shape of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    #[schema(example = "Asha")]
    pub name: String,
    #[schema(example = "2025-04-16 09:30:00")]
    pub timestamp: String,
    pub status: AttendanceStatus,
}

impl From<AttendanceRecord> for AttendanceEntry {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            name: record.name,
            timestamp: record.timestamp,
            status: AttendanceStatus::Present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_is_always_present() {
        let entry = AttendanceEntry::from(AttendanceRecord::new("Asha", "2025-04-16 09:30:00"));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "name": "Asha",
                "timestamp": "2025-04-16 09:30:00",
                "status": "Present"
            })
        );
    }
}
