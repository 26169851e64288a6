//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`config`] - 站点配置接口
//! - [`sections`] - 栏目可见性与排序接口
//! - [`page`] - 公开页面组合、维护模式、robots.txt、图片
//! - [`upload`] - 图片上传接口
//! - [`testimonials`] - 评价管理接口
//! - [`faq`] - FAQ 管理接口
//! - [`services`] - 服务项目管理接口
//! - [`specialties`] - 专长管理接口
//! - [`gallery`] - 相册管理接口

pub mod auth;
pub mod config;
pub mod health;
pub mod page;
pub mod sections;
pub mod upload;

// Data models API
pub mod faq;
pub mod gallery;
pub mod services;
pub mod specialties;
pub mod testimonials;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(config::router())
        .merge(sections::router())
        .merge(page::router())
        .merge(upload::router())
        .merge(testimonials::router())
        .merge(faq::router())
        .merge(services::router())
        .merge(specialties::router())
        .merge(gallery::router())
}

/// Build a fully configured application with all middleware
///
/// This is used by both the HTTP server and in-process (oneshot) calls
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // ========== Application Middleware ==========
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - executes before routes, injects CurrentUser
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
