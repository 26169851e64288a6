//! Config Repository
//!
//! Generic key→JSON-value store for site-wide settings. Values are stored
//! as TEXT and parsed on the way out; a blob that no longer parses is
//! surfaced as `Value::Null` so callers apply their defaults.

use super::{RepoError, RepoResult};
use shared::models::ConfigEntry;
use shared::util::now_millis;
use serde_json::Value;
use sqlx::SqlitePool;

fn entry_from_row(key: String, raw: String, updated_at: i64) -> ConfigEntry {
    ConfigEntry {
        key,
        value: serde_json::from_str(&raw).unwrap_or(Value::Null),
        updated_at,
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ConfigEntry>> {
    let rows = sqlx::query_as::<_, (String, String, i64)>(
        "SELECT key, value, updated_at FROM site_config ORDER BY key",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|(key, raw, updated_at)| entry_from_row(key, raw, updated_at))
        .collect())
}

pub async fn get(pool: &SqlitePool, key: &str) -> RepoResult<Option<ConfigEntry>> {
    let row = sqlx::query_as::<_, (String, String, i64)>(
        "SELECT key, value, updated_at FROM site_config WHERE key = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(key, raw, updated_at)| entry_from_row(key, raw, updated_at)))
}

/// Value of a config key; `Value::Null` when absent or malformed.
pub async fn get_value(pool: &SqlitePool, key: &str) -> RepoResult<Value> {
    Ok(get(pool, key).await?.map(|e| e.value).unwrap_or(Value::Null))
}

/// Upsert one blob — read-modify-write of the entire value, last writer wins.
pub async fn upsert(pool: &SqlitePool, key: &str, value: &Value) -> RepoResult<ConfigEntry> {
    let raw = serde_json::to_string(value)
        .map_err(|e| RepoError::Validation(format!("Value is not serializable: {e}")))?;
    let now = now_millis();
    sqlx::query(
        "INSERT INTO site_config (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(&raw)
    .bind(now)
    .execute(pool)
    .await?;
    get(pool, key)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to upsert config key '{key}'")))
}

pub async fn delete(pool: &SqlitePool, key: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM site_config WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
