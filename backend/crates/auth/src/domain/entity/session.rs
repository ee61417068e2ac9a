//! Session Entity
//!
//! A logged-in session, looked up by the opaque token stored in the
//! `token` cookie.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{SessionId, UserId};
use crate::error::{AuthError, AuthResult};

/// Server-side session record
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Opaque random token (URL-safe base64)
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL comes from `AuthConfig`, not hard-coded here. Fails when the
    /// expiry is not representable.
    pub fn new(user_id: UserId, token: String, ttl: Duration) -> AuthResult<Self> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AuthError::Internal(format!("Session TTL out of range: {ttl}"))
        })?;

        Ok(Self {
            session_id: SessionId::new(),
            user_id,
            token,
            created_at: now,
            expires_at,
        })
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
