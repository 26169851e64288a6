//! Gallery Photo Repository

use super::{RepoError, RepoResult};
use shared::models::{GalleryPhoto, GalleryPhotoCreate, GalleryPhotoUpdate};
use shared::util::now_millis;
use sqlx::SqlitePool;

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<GalleryPhoto>> {
    let rows = sqlx::query_as::<_, GalleryPhoto>(
        "SELECT id, image_url, alt_text, caption, sort_order, is_active, created_at, updated_at
         FROM gallery_photo WHERE is_active = 1 ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<GalleryPhoto>> {
    let rows = sqlx::query_as::<_, GalleryPhoto>(
        "SELECT id, image_url, alt_text, caption, sort_order, is_active, created_at, updated_at
         FROM gallery_photo ORDER BY sort_order, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<GalleryPhoto>> {
    let row = sqlx::query_as::<_, GalleryPhoto>(
        "SELECT id, image_url, alt_text, caption, sort_order, is_active, created_at, updated_at
         FROM gallery_photo WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: GalleryPhotoCreate) -> RepoResult<GalleryPhoto> {
    let sort_order = match data.sort_order {
        Some(v) => v,
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_photo")
                .fetch_one(pool)
                .await?
        }
    };
    let now = now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO gallery_photo (image_url, alt_text, caption, sort_order, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5) RETURNING id",
    )
    .bind(&data.image_url)
    .bind(&data.alt_text)
    .bind(&data.caption)
    .bind(sort_order)
    .bind(now)
    .fetch_one(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create gallery photo".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: GalleryPhotoUpdate) -> RepoResult<GalleryPhoto> {
    let rows = sqlx::query(
        "UPDATE gallery_photo SET
            image_url = COALESCE(?1, image_url),
            alt_text = COALESCE(?2, alt_text),
            caption = COALESCE(?3, caption),
            sort_order = COALESCE(?4, sort_order),
            is_active = COALESCE(?5, is_active),
            updated_at = ?6
         WHERE id = ?7",
    )
    .bind(&data.image_url)
    .bind(&data.alt_text)
    .bind(&data.caption)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Gallery photo {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Gallery photo {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM gallery_photo WHERE id = ?")
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
        let rows = sqlx::query("UPDATE gallery_photo SET sort_order = ?1, updated_at = ?2 WHERE id = ?3")
            .bind(index as i64)
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if rows.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Gallery photo {id} not found")));
        }
    }
    tx.commit().await?;
    Ok(())
}
