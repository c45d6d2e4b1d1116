//! Authentication Handlers
//!
//! Handles login, registration and current-user lookup

use std::time::Duration;

use axum::{Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::models::Credential;

use crate::auth::CurrentUser;
use crate::auth::password;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - 登录换取 JWT
///
/// 未知用户与口令错误返回同一错误信息，避免用户名枚举。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.trim().to_string();

    let credential = state.credentials.lookup(&username)?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let credential = match credential {
        Some(c) => c,
        None => {
            security_log!("WARN", "login_failed", username = username.as_str(), reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    if !password::verify_password(&req.password, &credential.salt, &credential.hash) {
        security_log!("WARN", "login_failed", username = username.as_str(), reason = "invalid_credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .get_jwt_service()
        .generate_token(&username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    security_log!("INFO", "login_success", username = username.as_str());
    tracing::info!(username = %username, "User logged in successfully");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo { username },
    }))
}

/// POST /api/auth/register - 注册新用户
///
/// 用户名唯一；口令须满足复杂度策略 (见 [`password::check_complexity`])。
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<UserInfo>> {
    let username = req.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::validation("Username cannot be empty"));
    }

    if let Err(reason) = password::check_complexity(&req.password) {
        security_log!("WARN", "register_refused", username = username.as_str(), reason = reason);
        return Err(AppError::validation(reason));
    }

    if state.credentials.lookup(&username)?.is_some() {
        return Err(AppError::conflict(format!("Username {}", username)));
    }

    let salt = password::generate_salt();
    let hash = password::hash_password(&req.password, &salt);
    state.credentials.insert(&Credential {
        username: username.clone(),
        salt,
        hash,
    })?;

    security_log!("INFO", "register_success", username = username.as_str());

    Ok(Json(UserInfo { username }))
}

/// GET /api/auth/me - 当前用户信息
pub async fn me(user: CurrentUser) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo {
        username: user.username,
    }))
}
