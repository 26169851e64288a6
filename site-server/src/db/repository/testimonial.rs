//! Testimonial Repository

use super::{RepoError, RepoResult};
use shared::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

/// Active testimonials in page order
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Testimonial>> {
    let rows = sqlx::query_as::<_, Testimonial>(
        "SELECT id, author_name, author_title, quote, rating, avatar_url, sort_order, is_active, created_at, updated_at
         FROM testimonial WHERE is_active = 1 ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All testimonials (admin view), same ordering
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Testimonial>> {
    let rows = sqlx::query_as::<_, Testimonial>(
        "SELECT id, author_name, author_title, quote, rating, avatar_url, sort_order, is_active, created_at, updated_at
         FROM testimonial ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Testimonial>> {
    let row = sqlx::query_as::<_, Testimonial>(
        "SELECT id, author_name, author_title, quote, rating, avatar_url, sort_order, is_active, created_at, updated_at
         FROM testimonial WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: TestimonialCreate) -> RepoResult<Testimonial> {
    // New entries land at the end of the collection
    let sort_order = match data.sort_order {
        Some(v) => v,
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonial")
                .fetch_one(pool)
                .await?
        }
    };
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO testimonial (author_name, author_title, quote, rating, avatar_url, sort_order, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7) RETURNING id",
    )
    .bind(&data.author_name)
    .bind(&data.author_title)
    .bind(&data.quote)
    .bind(data.rating)
    .bind(&data.avatar_url)
    .bind(sort_order)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create testimonial".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: TestimonialUpdate) -> RepoResult<Testimonial> {
    let rows = sqlx::query(
        "UPDATE testimonial SET
            author_name = COALESCE(?1, author_name),
            author_title = COALESCE(?2, author_title),
            quote = COALESCE(?3, quote),
            rating = COALESCE(?4, rating),
            avatar_url = COALESCE(?5, avatar_url),
            sort_order = COALESCE(?6, sort_order),
            is_active = COALESCE(?7, is_active),
            updated_at = ?8
         WHERE id = ?9",
    )
    .bind(&data.author_name)
    .bind(&data.author_title)
    .bind(&data.quote)
    .bind(data.rating)
    .bind(&data.avatar_url)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Testimonial {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Testimonial {id} not found")))
}

/// Hard delete. sort_order gaps are left as-is; reads sort over them.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM testimonial WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Rewrite the whole collection's sort_order in one transaction:
/// each id gets its index in `ids`. Rolls back when an id is unknown, so a
/// partially-reordered collection can never be observed.
pub async fn reorder(pool: &SqlitePool, ids: &[i64]) -> RepoResult<()> {
    let now = now_millis();
    let mut tx = pool.begin().await?;
    for (index, id) in ids.iter().enumerate() {
        let rows = sqlx::query("UPDATE testimonial SET sort_order = ?1, updated_at = ?2 WHERE id = ?3")
            .bind(index as i64)
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Testimonial {id} not found")));
        }
    }
    tx.commit().await?;
    Ok(())
}
