//! Service API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::service_item as repo;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{ServiceItem, ServiceItemCreate, ServiceItemUpdate};
use shared::request::ReorderRequest;

/// GET /api/services - 获取所有激活的服务项目
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<ServiceItem>>> {
    Ok(Json(repo::find_active(&state.pool).await?))
}

/// GET /api/admin/services - 获取所有服务项目
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<ServiceItem>>> {
    Ok(Json(repo::find_all(&state.pool).await?))
}

/// GET /api/admin/services/{id} - 获取单个服务项目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ServiceItem>> {
    let row = repo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/admin/services - 创建服务项目
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceItemCreate>,
) -> AppResult<Json<ServiceItem>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.price_text, "price_text", MAX_SHORT_TEXT_LEN)?;

    Ok(Json(repo::create(&state.pool, payload).await?))
}

/// PUT /api/admin/services/{id} - 更新服务项目
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceItemUpdate>,
) -> AppResult<Json<ServiceItem>> {
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.price_text, "price_text", MAX_SHORT_TEXT_LEN)?;

    Ok(Json(repo::update(&state.pool, id, payload).await?))
}

/// DELETE /api/admin/services/{id} - 删除服务项目
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(repo::delete(&state.pool, id).await?))
}

/// PUT /api/admin/services/reorder - 批量排序 (单事务)
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderRequest>,
) -> AppResult<Json<Vec<ServiceItem>>> {
    payload.validate().map_err(AppError::validation)?;
    repo::reorder(&state.pool, &payload.ids).await?;
    Ok(Json(repo::find_all(&state.pool).await?))
}
