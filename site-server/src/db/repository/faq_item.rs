//! FAQ Item Repository

use super::{RepoError, RepoResult};
use shared::models::{FaqItem, FaqItemCreate, FaqItemUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<FaqItem>> {
    let rows = sqlx::query_as::<_, FaqItem>(
        "SELECT id, question, answer, sort_order, is_active, created_at, updated_at
         FROM faq_item WHERE is_active = 1 ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<FaqItem>> {
    let rows = sqlx::query_as::<_, FaqItem>(
        "SELECT id, question, answer, sort_order, is_active, created_at, updated_at
         FROM faq_item ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FaqItem>> {
    let row = sqlx::query_as::<_, FaqItem>(
        "SELECT id, question, answer, sort_order, is_active, created_at, updated_at
         FROM faq_item WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: FaqItemCreate) -> RepoResult<FaqItem> {
    let sort_order = match data.sort_order {
        Some(v) => v,
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faq_item")
                .fetch_one(pool)
                .await?
        }
    };
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO faq_item (question, answer, sort_order, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, 1, ?4, ?4) RETURNING id",
    )
    .bind(&data.question)
    .bind(&data.answer)
    .bind(sort_order)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create FAQ item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: FaqItemUpdate) -> RepoResult<FaqItem> {
    let rows = sqlx::query(
        "UPDATE faq_item SET
            question = COALESCE(?1, question),
            answer = COALESCE(?2, answer),
            sort_order = COALESCE(?3, sort_order),
            is_active = COALESCE(?4, is_active),
            updated_at = ?5
         WHERE id = ?6",
    )
    .bind(&data.question)
    .bind(&data.answer)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("FAQ item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("FAQ item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM faq_item WHERE id = ?")
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
        let rows = sqlx::query("UPDATE faq_item SET sort_order = ?1, updated_at = ?2 WHERE id = ?3")
            .bind(index as i64)
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("FAQ item {id} not found")));
        }
    }
    tx.commit().await?;
    Ok(())
}
