//! In-Memory Repository Implementation
//!
//! Backs use case and router tests without a database. Each operation runs
//! inside one lock, so check-then-write sequences are atomic just like the
//! unique constraints in Postgres.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{SessionId, UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    sessions: HashMap<SessionId, Session>,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.lock().await.users.len()
    }

    pub async fn session_count(&self) -> usize {
        self.tables.lock().await.sessions.len()
    }

    /// Sessions held by one user
    pub async fn sessions_for(&self, user_id: &UserId) -> Vec<Session> {
        self.tables
            .lock()
            .await
            .sessions
            .values()
            .filter(|s| &s.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.lock().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        if tables.users.values().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }

        tables.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .tables
            .lock()
            .await
            .users
            .values()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        let mut tables = self.tables.lock().await;

        if tables.sessions.values().any(|s| s.token == session.token) {
            return Err(AuthError::Internal("Duplicate session token".to_string()));
        }

        tables.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AuthResult<Option<Session>> {
        Ok(self
            .tables
            .lock()
            .await
            .sessions
            .values()
            .find(|s| s.token == token)
            .cloned())
    }

    async fn delete_by_token(&self, token: &str, user_id: &UserId) -> AuthResult<u64> {
        let mut tables = self.tables.lock().await;
        let before = tables.sessions.len();
        tables
            .sessions
            .retain(|_, s| !(s.token == token && &s.user_id == user_id));
        Ok((before - tables.sessions.len()) as u64)
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()> {
        self.tables.lock().await.sessions.remove(session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut tables = self.tables.lock().await;
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - tables.sessions.len()) as u64)
    }
}
