use sqlx::MySqlPool;

pub async fn init_db(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPool::connect(database_url).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Creates the attendance table on first start. Text columns are utf8mb4
/// whatever the server default, and `timestamp` uses a binary collation so
/// prefix matching is byte-exact.
pub(crate) async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name TEXT CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci NOT NULL,
            timestamp CHAR(19) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
            INDEX idx_attendance_timestamp (timestamp)
        ) DEFAULT CHARSET = utf8mb4
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
