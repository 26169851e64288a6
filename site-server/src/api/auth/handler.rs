//! Auth API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::security_log;
use crate::utils::validation::{MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};
use crate::utils::{AppError, AppResult};
use shared::models::{ChangePasswordRequest, LoginRequest, LoginResponse};

/// POST /api/auth/login - 登录，返回 Bearer 令牌
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = admin_user::find_by_username(&state.pool, &payload.username).await?;

    // Unified error for unknown user and wrong password
    let user = match user {
        Some(u) if password::verify_password(&payload.password, &u.password_hash) => u,
        _ => {
            security_log!("WARN", "login_failed", username = payload.username.as_str());
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .jwt_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(username = %user.username, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        expires_in: state.jwt_service.expiration_seconds(),
    }))
}

/// GET /api/auth/me - 当前登录用户
pub async fn me(Extension(current_user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(current_user)
}

/// POST /api/auth/change-password - 修改密码
pub async fn change_password(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<Json<bool>> {
    if payload.new_password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if payload.new_password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "New password is too long (max {MAX_PASSWORD_LEN})"
        )));
    }

    let user = admin_user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Admin user {} not found", current_user.id)))?;

    if !password::verify_password(&payload.old_password, &user.password_hash) {
        security_log!("WARN", "password_change_rejected", username = user.username.as_str());
        return Err(AppError::invalid("Current password is incorrect"));
    }

    let hash = password::hash_password(&payload.new_password)?;
    admin_user::update_password(&state.pool, user.id, &hash).await?;

    tracing::info!(username = %user.username, "Admin password changed");

    Ok(Json(true))
}
