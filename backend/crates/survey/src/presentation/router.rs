//! Survey Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use auth::AuthGate;
use auth::domain::repository::SessionRepository;

use crate::domain::repository::SurveyRepository;
use crate::presentation::handlers::{self, SurveyAppState};

/// Create the Survey router
///
/// Routes (relative to `/api`):
/// - `GET /surveys`, `GET /surveys/{id}` - public
/// - `POST /surveys`, `POST /surveys/{id}/vote` - behind the auth gate
pub fn survey_router<R, A>(repo: Arc<R>, gate: AuthGate<A>) -> Router
where
    R: SurveyRepository + Send + Sync + 'static,
    A: SessionRepository + Send + Sync + 'static,
{
    let state = SurveyAppState { repo };

    Router::new()
        .route(
            "/surveys",
            get(handlers::list_surveys::<R>)
                .merge(gate.protect(post(handlers::create_survey::<R>))),
        )
        .route("/surveys/{id}", get(handlers::get_survey::<R>))
        .route(
            "/surveys/{id}/vote",
            gate.protect(post(handlers::vote::<R>)),
        )
        .with_state(state)
}
