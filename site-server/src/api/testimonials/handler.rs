//! Testimonial API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::testimonial as repo;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_rating, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Testimonial, TestimonialCreate, TestimonialUpdate};
use shared::request::ReorderRequest;

/// GET /api/testimonials - 获取所有激活的评价
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(repo::find_active(&state.pool).await?))
}

/// GET /api/admin/testimonials - 获取所有评价
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Testimonial>>> {
    Ok(Json(repo::find_all(&state.pool).await?))
}

/// GET /api/admin/testimonials/{id} - 获取单个评价
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Testimonial>> {
    let row = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Testimonial {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/admin/testimonials - 创建评价
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TestimonialCreate>,
) -> AppResult<Json<Testimonial>> {
    validate_required_text(&payload.author_name, "author_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.quote, "quote", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.author_title, "author_title", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.avatar_url, "avatar_url", MAX_URL_LEN)?;
    validate_rating(&payload.rating)?;

    Ok(Json(repo::create(&state.pool, payload).await?))
}

/// PUT /api/admin/testimonials/{id} - 更新评价
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TestimonialUpdate>,
) -> AppResult<Json<Testimonial>> {
    validate_optional_text(&payload.author_name, "author_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.quote, "quote", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.author_title, "author_title", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.avatar_url, "avatar_url", MAX_URL_LEN)?;
    validate_rating(&payload.rating)?;

    Ok(Json(repo::update(&state.pool, id, payload).await?))
}

/// DELETE /api/admin/testimonials/{id} - 删除评价
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(repo::delete(&state.pool, id).await?))
}

/// PUT /api/admin/testimonials/reorder - 批量排序 (单事务)
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<Vec<Testimonial>>> {
    payload.validate().map_err(AppError::validation)?;
    repo::reorder(&state.pool, &payload.ids).await?;
    Ok(Json(repo::find_all(&state.pool).await?))
}
