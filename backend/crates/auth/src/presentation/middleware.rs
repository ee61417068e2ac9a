//! Auth Middleware
//!
//! [`AuthGate`] guards individual routes. A route opts in at registration
//! time with [`AuthGate::protect`]; everything else stays public.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::MethodRouter;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Identity resolved by the gate, stored in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    /// Token the request authenticated with
    pub session_token: String,
}

/// Session check shared by every protected route
pub struct AuthGate<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthGate<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthGate<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Wrap a route so it only runs with a valid session.
    pub fn protect<S>(&self, route: MethodRouter<S>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        route.route_layer(middleware::from_fn_with_state(
            self.clone(),
            require_session::<R>,
        ))
    }

    /// Resolve the session cookie in `headers` to the current user.
    pub async fn authenticate(&self, headers: &HeaderMap) -> AuthResult<CurrentUser> {
        let token = platform::cookie::extract_cookie(headers, &self.config.session_cookie_name)
            .ok_or(AuthError::SessionRequired)?;

        let session = CheckSessionUseCase::new(self.repo.clone())
            .execute(&token)
            .await?;

        Ok(CurrentUser {
            user_id: session.user_id,
            session_token: session.token,
        })
    }
}

/// Middleware that requires a valid session
///
/// Missing cookie, unknown token or expired session → 401.
/// Store failure → 500.
pub async fn require_session<R>(
    State(gate): State<AuthGate<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: SessionRepository + Send + Sync + 'static,
{
    let current_user = gate.authenticate(req.headers()).await?;
    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}
