//! Testimonials API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // 公开端：只返回激活项
        .route("/api/testimonials", get(handler::list_active))
        .nest("/api/admin/testimonials", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_all).post(handler::create))
        // Batch reorder (must be before /{id} to avoid path conflicts)
        .route("/reorder", put(handler::reorder))
        .route(
            "/{id}",
            get(handler::get_by_id).put(handler::update).delete(handler::delete),
        )
}
