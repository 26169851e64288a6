//! FAQ API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::faq_item as repo;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{FaqItem, FaqItemCreate, FaqItemUpdate};
use shared::request::ReorderRequest;

/// GET /api/faq - 获取所有激活的 FAQ
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<FaqItem>>> {
    Ok(Json(repo::find_active(&state.pool).await?))
}

/// GET /api/admin/faq - 获取所有 FAQ
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<FaqItem>>> {
    Ok(Json(repo::find_all(&state.pool).await?))
}

/// GET /api/admin/faq/{id} - 获取单个 FAQ
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FaqItem>> {
    let row = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("FAQ item {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/admin/faq - 创建 FAQ
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FaqItemCreate>,
) -> AppResult<Json<FaqItem>> {
    validate_required_text(&payload.question, "question", MAX_NAME_LEN)?;
    validate_required_text(&payload.answer, "answer", MAX_TEXT_LEN)?;

    Ok(Json(repo::create(&state.pool, payload).await?))
}

/// PUT /api/admin/faq/{id} - 更新 FAQ
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<FaqItemUpdate>,
) -> AppResult<Json<FaqItem>> {
    validate_optional_text(&payload.question, "question", MAX_NAME_LEN)?;
    validate_optional_text(&payload.answer, "answer", MAX_TEXT_LEN)?;

    Ok(Json(repo::update(&state.pool, id, payload).await?))
}

/// DELETE /api/admin/faq/{id} - 删除 FAQ
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(repo::delete(&state.pool, id).await?))
}

/// PUT /api/admin/faq/reorder - 批量排序 (单事务)
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<Vec<FaqItem>>> {
    payload.validate().map_err(AppError::validation)?;
    repo::reorder(&state.pool, &payload.ids).await?;
    Ok(Json(repo::find_all(&state.pool).await?))
}
