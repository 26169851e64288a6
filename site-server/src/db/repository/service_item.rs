//! Service Item Repository

use super::{RepoError, RepoResult};
use shared::models::{ServiceItem, ServiceItemCreate, ServiceItemUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<ServiceItem>> {
    let rows = sqlx::query_as::<_, ServiceItem>(
        "SELECT id, title, description, icon, color, duration_minutes, price_text, sort_order, is_active, created_at, updated_at
         FROM service_item WHERE is_active = 1 ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ServiceItem>> {
    let rows = sqlx::query_as::<_, ServiceItem>(
        "SELECT id, title, description, icon, color, duration_minutes, price_text, sort_order, is_active, created_at, updated_at
         FROM service_item ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ServiceItem>> {
    let row = sqlx::query_as::<_, ServiceItem>(
        "SELECT id, title, description, icon, color, duration_minutes, price_text, sort_order, is_active, created_at, updated_at
         FROM service_item WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ServiceItemCreate) -> RepoResult<ServiceItem> {
    let sort_order = match data.sort_order {
        Some(v) => v,
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM service_item")
                .fetch_one(pool)
                .await?
        }
    };
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO service_item (title, description, icon, color, duration_minutes, price_text, sort_order, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?8) RETURNING id",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.icon)
    .bind(&data.color)
    .bind(data.duration_minutes)
    .bind(&data.price_text)
    .bind(sort_order)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create service".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ServiceItemUpdate) -> RepoResult<ServiceItem> {
    let rows = sqlx::query(
        "UPDATE service_item SET
            title = COALESCE(?1, title),
            description = COALESCE(?2, description),
            icon = COALESCE(?3, icon),
            color = COALESCE(?4, color),
            duration_minutes = COALESCE(?5, duration_minutes),
            price_text = COALESCE(?6, price_text),
            sort_order = COALESCE(?7, sort_order),
            is_active = COALESCE(?8, is_active),
            updated_at = ?9
         WHERE id = ?10",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.icon)
    .bind(&data.color)
    .bind(data.duration_minutes)
    .bind(&data.price_text)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Service {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Service {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM service_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Transactional batch reorder; see `testimonial::reorder`.
pub async fn reorder(pool: &SqlitePool, ids: &[i64]) -> RepoResult<()> {
    let now = now_millis();
    let mut tx = pool.begin().await?;
    for (index, id) in ids.iter().enumerate() {
        let rows = sqlx::query("UPDATE service_item SET sort_order = ?1, updated_at = ?2 WHERE id = ?3")
            .bind(index as i64)
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Service {id} not found")));
        }
    }
    tx.commit().await?;
    Ok(())
}
