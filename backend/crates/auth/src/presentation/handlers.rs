//! HTTP Handlers

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase, UserInfoUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    UserInfoResponse,
};
use crate::presentation::extract::JsonBody;
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let input = RegisterInput {
        email: req.email,
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: output.user_id,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful".to_string(),
            token: output.session_token,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// DELETE /api/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());
    use_case
        .execute(&current_user.session_token, &current_user.user_id)
        .await?;

    let cookie = state.config.cookie_config().build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("Logged out successfully.")),
    ))
}

// ============================================================================
// User info
// ============================================================================

/// GET /api/user
pub async fn user_info<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
) -> AuthResult<Json<UserInfoResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = UserInfoUseCase::new(state.repo.clone());
    let user = use_case.execute(&current_user.user_id).await?;

    Ok(Json(UserInfoResponse {
        name: user.email.into_inner(),
        username: user.user_name.into_inner(),
    }))
}
