//! Check Session Use Case
//!
//! Resolves a session token to a live session.

use std::sync::Arc;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Unknown token → `SessionRequired`. An expired session is deleted
    /// and also yields `SessionRequired`.
    pub async fn execute(&self, session_token: &str) -> AuthResult<Session> {
        let session = self
            .session_repo
            .find_by_token(session_token)
            .await?
            .ok_or(AuthError::SessionRequired)?;

        if session.is_expired() {
            self.session_repo.delete(&session.session_id).await?;
            tracing::debug!(session_id = %session.session_id, "Expired session removed");
            return Err(AuthError::SessionRequired);
        }

        Ok(session)
    }
}
