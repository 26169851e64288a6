//! Gallery API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::gallery_photo as repo;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{GalleryPhoto, GalleryPhotoCreate, GalleryPhotoUpdate};
use shared::request::ReorderRequest;

/// GET /api/gallery - 获取所有激活的照片
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<GalleryPhoto>>> {
    Ok(Json(repo::find_active(&state.pool).await?))
}

/// GET /api/admin/gallery - 获取所有照片
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<GalleryPhoto>>> {
    Ok(Json(repo::find_all(&state.pool).await?))
}

/// GET /api/admin/gallery/{id} - 获取单张照片
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GalleryPhoto>> {
    let row = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gallery photo {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/admin/gallery - 创建照片
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GalleryPhotoCreate>,
) -> AppResult<Json<GalleryPhoto>> {
    validate_required_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    validate_required_text(&payload.alt_text, "alt_text", MAX_NAME_LEN)?;
    validate_optional_text(&payload.caption, "caption", MAX_SHORT_TEXT_LEN)?;

    Ok(Json(repo::create(&state.pool, payload).await?))
}

/// PUT /api/admin/gallery/{id} - 更新照片
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<GalleryPhotoUpdate>,
) -> AppResult<Json<GalleryPhoto>> {
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    validate_optional_text(&payload.alt_text, "alt_text", MAX_NAME_LEN)?;
    validate_optional_text(&payload.caption, "caption", MAX_SHORT_TEXT_LEN)?;

    Ok(Json(repo::update(&state.pool, id, payload).await?))
}

/// DELETE /api/admin/gallery/{id} - 删除照片
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(repo::delete(&state.pool, id).await?))
}

/// PUT /api/admin/gallery/reorder - 批量排序 (单事务)
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<Vec<GalleryPhoto>>> {
    payload.validate().map_err(AppError::validation)?;
    repo::reorder(&state.pool, &payload.ids).await?;
    Ok(Json(repo::find_all(&state.pool).await?))
}
