use super::{AttendanceStore, StoreError};
use crate::model::attendance::AttendanceRecord;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

/// Escape character for LIKE patterns. Not a backslash, so the query reads the
/// same with or without `NO_BACKSLASH_ESCAPES` in sql_mode.
const LIKE_ESCAPE: char = '!';

pub struct MySqlAttendanceStore {
    pool: MySqlPool,
}

impl MySqlAttendanceStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for MySqlAttendanceStore {
    async fn insert(&self, record: &AttendanceRecord) -> Result<(), StoreError> {
        sqlx::query(r#"INSERT INTO attendance (name, timestamp) VALUES (?, ?)"#)
            .bind(&record.name)
            .bind(&record.timestamp)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_date_prefix(&self, prefix: &str) -> Result<Vec<AttendanceRecord>, StoreError> {
        let pattern = like_prefix_pattern(prefix);
        debug!(pattern = %pattern, "Fetching attendance by prefix");

        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT name, timestamp
            FROM attendance
            WHERE timestamp LIKE ? ESCAPE '!'
            ORDER BY id ASC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

/// Builds a LIKE pattern matching values that start with `prefix` literally.
fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, LIKE_ESCAPE | '%' | '_') {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
