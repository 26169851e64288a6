//! Admin User Repository

use super::{RepoError, RepoResult};
use shared::models::AdminUser;
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminUser>> {
    let user = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, created_at, updated_at FROM admin_user WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AdminUser>> {
    let user = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, created_at, updated_at FROM admin_user WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Seed the singleton admin account if no account exists yet.
pub async fn ensure_account(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> RepoResult<AdminUser> {
    if let Some(existing) = first_account(pool).await? {
        return Ok(existing);
    }

    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO admin_user (username, password_hash, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin account".into()))
}

pub async fn update_password(pool: &SqlitePool, id: i64, password_hash: &str) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE admin_user SET password_hash = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(password_hash)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Admin user {id} not found")));
    }
    Ok(())
}

async fn first_account(pool: &SqlitePool) -> RepoResult<Option<AdminUser>> {
    let user = sqlx::query_as::<_, AdminUser>(
        "SELECT id, username, password_hash, created_at, updated_at FROM admin_user ORDER BY id LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(user)
}
