//! Public Page API 模块
//!
//! 公开页面的组合视图、维护模式检查、robots.txt 和图片读取。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/page", get(handler::page))
        .route("/api/maintenance-check", get(handler::maintenance_check))
        .route("/api/image/{filename}", get(handler::image))
        .route("/robots.txt", get(handler::robots))
}
