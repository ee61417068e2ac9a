//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    UserId,
    user_name::UserName,
    user_password::{RawPassword, dummy_verify},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for the cookie and the response body
    pub session_token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A password that could never have been registered cannot match
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match UserName::new(&input.user_name) {
            Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };

        // Unknown user and wrong password take the same Argon2 cost
        let Some(user) = user else {
            dummy_verify(&raw_password);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session_token = platform::crypto::random_token();
        let session = Session::new(
            user.user_id,
            session_token.clone(),
            self.config.session_ttl_chrono(),
        )?;

        self.session_repo.create(&session).await?;

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_id: user.user_id,
            expires_at: session.expires_at,
        })
    }
}
