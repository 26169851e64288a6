//! Config API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::config as repo;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use shared::models::{ConfigEntry, ConfigUpsert};

/// GET /api/config · /api/admin/config - 获取所有配置
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ConfigEntry>>> {
    Ok(Json(repo::find_all(&state.pool).await?))
}

/// POST /api/admin/config - 写入一个配置 (整体覆盖)
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<ConfigUpsert>,
) -> AppResult<Json<ConfigEntry>> {
    validate_required_text(&payload.key, "key", MAX_SHORT_TEXT_LEN)?;
    let entry = repo::upsert(&state.pool, &payload.key, &payload.value).await?;
    Ok(Json(entry))
}

/// DELETE /api/admin/config/{key} - 删除一个配置
pub async fn delete(
    State(state): State<ServerState>,
    Path(key): Path<String>,
) -> AppResult<Json<bool>> {
    Ok(Json(repo::delete(&state.pool, &key).await?))
}
