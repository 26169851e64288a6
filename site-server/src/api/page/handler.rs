//! Public Page Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::core::ServerState;
use crate::db::repository::config as config_repo;
use crate::sections::resolver;
use crate::utils::{AppError, AppResult};
use shared::models::{
    GeneralInfo, MaintenanceCheck, MaintenanceMode, PageView, SeoSettings, config_keys,
    decode_or_default,
};

/// GET /api/page - 公开页面组合视图
///
/// 维护模式开启时直接短路：不解析栏目，前端只渲染维护提示。
/// 每个栏目的数据仍由各自的公开接口独立获取。
pub async fn page(State(state): State<ServerState>) -> AppResult<Json<PageView>> {
    let maintenance: MaintenanceMode =
        decode_or_default(config_repo::get_value(&state.pool, config_keys::MAINTENANCE_MODE).await?);

    if maintenance.is_enabled {
        return Ok(Json(PageView {
            maintenance,
            sections: Vec::new(),
        }));
    }

    let visibility =
        config_repo::get_value(&state.pool, config_keys::SECTION_VISIBILITY).await?;
    let order = config_repo::get_value(&state.pool, config_keys::SECTION_ORDER).await?;

    Ok(Json(PageView {
        maintenance,
        sections: resolver::resolve_render_units(&visibility, &order),
    }))
}

/// GET /api/maintenance-check - 维护状态 + 联系信息
pub async fn maintenance_check(
    State(state): State<ServerState>,
) -> AppResult<Json<MaintenanceCheck>> {
    let maintenance: MaintenanceMode =
        decode_or_default(config_repo::get_value(&state.pool, config_keys::MAINTENANCE_MODE).await?);
    let general: GeneralInfo =
        decode_or_default(config_repo::get_value(&state.pool, config_keys::GENERAL_INFO).await?);

    Ok(Json(MaintenanceCheck {
        maintenance,
        general,
    }))
}

/// GET /robots.txt - 根据 SEO 配置动态生成
pub async fn robots(State(state): State<ServerState>) -> AppResult<String> {
    let seo: SeoSettings =
        decode_or_default(config_repo::get_value(&state.pool, config_keys::SEO).await?);

    let body = if seo.allow_indexing {
        "User-agent: *\nAllow: /\n"
    } else {
        "User-agent: *\nDisallow: /\n"
    };
    Ok(body.to_string())
}

/// GET /api/image/{filename} - 读取已上传的图片
pub async fn image(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    // Uploaded files are flat uuid.jpg names; anything path-like is hostile
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::validation("Invalid image filename"));
    }

    let path = state.config.images_dir().join(&filename);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found(format!("Image {filename} not found")))?;

    let content_type = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .to_string();

    Ok(([(http::header::CONTENT_TYPE, content_type)], data))
}
