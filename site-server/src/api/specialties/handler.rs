//! Specialty API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::specialty as repo;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Specialty, SpecialtyCreate, SpecialtyUpdate};
use shared::request::ReorderRequest;

/// GET /api/specialties - 获取所有激活的专长
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Specialty>>> {
    Ok(Json(repo::find_active(&state.pool).await?))
}

/// GET /api/admin/specialties - 获取所有专长
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Specialty>>> {
    Ok(Json(repo::find_all(&state.pool).await?))
}

/// GET /api/admin/specialties/{id} - 获取单个专长
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Specialty>> {
    let row = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Specialty {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/admin/specialties - 创建专长
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SpecialtyCreate>,
) -> AppResult<Json<Specialty>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_TEXT_LEN)?;

    Ok(Json(repo::create(&state.pool, payload).await?))
}

/// PUT /api/admin/specialties/{id} - 更新专长
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SpecialtyUpdate>,
) -> AppResult<Json<Specialty>> {
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_TEXT_LEN)?;

    Ok(Json(repo::update(&state.pool, id, payload).await?))
}

/// DELETE /api/admin/specialties/{id} - 删除专长
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(repo::delete(&state.pool, id).await?))
}

/// PUT /api/admin/specialties/reorder - 批量排序 (单事务)
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<Vec<Specialty>>> {
    payload.validate().map_err(AppError::validation)?;
    repo::reorder(&state.pool, &payload.ids).await?;
    Ok(Json(repo::find_all(&state.pool).await?))
}
