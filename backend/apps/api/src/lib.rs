//! API Server
//!
//! Assembles the auth and survey routers under `/api`, serves the landing
//! page, and exposes the HTTP layers shared by the binary and its tests.

pub mod config;

use std::path::Path;
use std::sync::Arc;

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::{AuthConfig, AuthGate, auth_router};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use survey::domain::repository::SurveyRepository;
use survey::survey_router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router
///
/// - `/api/...` - auth and survey endpoints
/// - `/`, `/login`, `/register` - `index.html` from `static_dir`
/// - anything else - a file from `static_dir`, or 404
pub fn build_router<A, S>(
    auth_repo: Arc<A>,
    survey_repo: Arc<S>,
    auth_config: Arc<AuthConfig>,
    static_dir: &Path,
) -> Router
where
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
    S: SurveyRepository + Send + Sync + 'static,
{
    let gate = AuthGate::new(auth_repo.clone(), auth_config.clone());

    let api = Router::new()
        .merge(auth_router(auth_repo, auth_config))
        .merge(survey_router(survey_repo, gate));

    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .nest("/api", api)
        .route_service("/", index.clone())
        .route_service("/login", index.clone())
        .route_service("/register", index)
        .fallback_service(ServeDir::new(static_dir))
}

/// CORS for the configured frontend origins, with credentials
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests;
