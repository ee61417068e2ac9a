//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    UserId, email::Email, user_name::UserName, user_password::UserPassword,
};

/// Registered user
///
/// There is no update path: the row is written once on registration.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, lowercased
    pub email: Email,
    /// Unique, used for login
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
