//! Auth Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::AuthGate;

/// Create the Auth router for any repository implementation
///
/// Routes (relative to where it is nested, normally `/api`):
/// - `POST /register`, `POST /login` - public
/// - `DELETE /logout`, `GET /user` - behind [`AuthGate`]
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGate::new(repo.clone(), config.clone());
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", gate.protect(delete(handlers::logout::<R>)))
        .route("/user", gate.protect(get(handlers::user_info::<R>)))
        .with_state(state)
}
