//! Sections API Handlers

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, State},
};
use sqlx::SqlitePool;

use crate::core::ServerState;
use crate::db::repository::config as config_repo;
use crate::sections::resolver;
use crate::utils::{AppError, AppResult};
use shared::models::{SectionKey, SectionReorder, SectionSetting, VisibilityUpdate, config_keys};

async fn load_overview(pool: &SqlitePool) -> AppResult<Vec<SectionSetting>> {
    let visibility = config_repo::get_value(pool, config_keys::SECTION_VISIBILITY).await?;
    let order = config_repo::get_value(pool, config_keys::SECTION_ORDER).await?;
    Ok(resolver::admin_overview(&visibility, &order))
}

/// GET /api/admin/sections - 所有栏目 (含隐藏的)，按展示顺序排列
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<Vec<SectionSetting>>> {
    Ok(Json(load_overview(&state.pool).await?))
}

/// PUT /api/admin/sections/{key}/visibility - 切换单个栏目可见性
///
/// 整个 visibility blob 读改写，最后写入者胜。返回更新后的完整列表，
/// 方便管理端直接用响应做缓存对账。
pub async fn set_visibility(
    State(state): State<ServerState>,
    Path(key): Path<SectionKey>,
    Json(payload): Json<VisibilityUpdate>,
) -> AppResult<Json<Vec<SectionSetting>>> {
    let current = config_repo::get_value(&state.pool, config_keys::SECTION_VISIBILITY).await?;
    let updated = resolver::toggle_visibility(&current, key, payload.is_visible);
    config_repo::upsert(&state.pool, config_keys::SECTION_VISIBILITY, &updated).await?;

    tracing::info!(section = key.as_str(), visible = payload.is_visible, "Section visibility changed");

    Ok(Json(load_overview(&state.pool).await?))
}

/// PUT /api/admin/sections/reorder - 拖拽排序后提交完整顺序
///
/// 整个 order blob 按新顺序重算后一次写入。
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<SectionReorder>,
) -> AppResult<Json<Vec<SectionSetting>>> {
    if payload.keys.is_empty() {
        return Err(AppError::validation("keys must not be empty"));
    }
    let unique: HashSet<SectionKey> = payload.keys.iter().copied().collect();
    if unique.len() != payload.keys.len() {
        return Err(AppError::validation("keys contains duplicates"));
    }

    let order = resolver::reorder_map(&payload.keys);
    config_repo::upsert(&state.pool, config_keys::SECTION_ORDER, &order).await?;

    tracing::info!(count = payload.keys.len(), "Sections reordered");

    Ok(Json(load_overview(&state.pool).await?))
}
