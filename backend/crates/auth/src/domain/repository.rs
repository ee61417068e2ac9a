//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::{SessionId, UserId, user_name::UserName};
use crate::error::AuthResult;

/// User store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user.
    ///
    /// Uniqueness of email and user name is decided here, atomically:
    /// a clash yields `AuthError::EmailTaken` / `AuthError::UserNameTaken`.
    async fn create(&self, user: &User) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}

/// Session store
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by token, expired or not
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<Session>>;

    /// Delete the session with this token if it belongs to `user_id`.
    /// Returns the number of rows removed.
    async fn delete_by_token(&self, token: &str, user_id: &UserId) -> AuthResult<u64>;

    async fn delete(&self, session_id: &SessionId) -> AuthResult<()>;

    /// Remove every expired session
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
