//! Config API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // 公开只读视图
        .route("/api/config", get(handler::list))
        // 管理端读写
        .nest("/api/admin/config", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::upsert))
        .route("/{key}", delete(handler::delete))
}
