//! Shared harness for router-level tests.
//!
//! Drives the real application (router + middleware) in-process through
//! the `OneshotRouter` extension, against an in-memory database.

// Each integration test binary compiles this module separately and uses a
// different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;

use shared::models::LoginResponse;
use site_server::api::{self, OneshotRouter};
use site_server::auth::{JwtConfig, JwtService};
use site_server::core::{Config, ServerState};
use site_server::db::DbService;

pub struct TestApp {
    pub state: ServerState,
    router: Router<ServerState>,
    // Keeps the scratch work dir alive for the test's lifetime
    _work_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let work_dir = TempDir::new().expect("create temp work dir");

        let config = Config {
            work_dir: work_dir.path().to_string_lossy().to_string(),
            http_port: 0,
            environment: "development".to_string(),
            admin_username: "admin".to_string(),
            admin_password: Some("test-password-123".to_string()),
        };
        config.ensure_work_dir_structure().expect("work dir layout");

        let db = DbService::new_in_memory().await.expect("in-memory db");
        let jwt_service = Arc::new(JwtService::new(JwtConfig {
            secret: "integration-test-secret-integration!".to_string(),
            expiration_minutes: 60,
            issuer: "site-server".to_string(),
            audience: "site-admin".to_string(),
        }));

        let state = ServerState::new(config, db.pool, jwt_service);
        state.seed_admin_account().await.expect("seed admin");
        state.seed_default_config().await.expect("seed config");

        let router = api::build_app(&state);

        Self {
            state,
            router,
            _work_dir: work_dir,
        }
    }

    pub async fn request(&mut self, request: Request<Body>) -> Response<Body> {
        self.router
            .oneshot(&self.state, request)
            .await
            .expect("oneshot request")
    }

    /// Login through the real endpoint and return the bearer token.
    pub async fn login(&mut self) -> String {
        let response = self
            .request(json_request(
                "POST",
                "/api/auth/login",
                None,
                serde_json::json!({"username": "admin", "password": "test-password-123"}),
            ))
            .await;
        assert_eq!(response.status(), 200, "login failed");
        let login: LoginResponse = body_json(response).await;
        login.token
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("build request")
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "body is not the expected JSON: {e}\n{}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}
