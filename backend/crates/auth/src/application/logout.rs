//! Logout Use Case
//!
//! Invalidates the session the request was authenticated with.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::domain::value_object::UserId;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Delete the session identified by `session_token`.
    ///
    /// Only a session owned by `user_id` is removed. A missing row is not an
    /// error; the number of deleted rows is returned.
    pub async fn execute(&self, session_token: &str, user_id: &UserId) -> AuthResult<u64> {
        let deleted = self
            .session_repo
            .delete_by_token(session_token, user_id)
            .await?;

        tracing::info!(user_id = %user_id, deleted, "User logged out");
        Ok(deleted)
    }
}
