//! Sections API 模块
//!
//! 管理端的栏目可见性与排序接口。公开端通过 /api/page 读取解析结果。

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/sections", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::overview))
        // Reorder must be registered before /{key} to avoid path conflicts
        .route("/reorder", put(handler::reorder))
        .route("/{key}/visibility", put(handler::set_visibility))
}
