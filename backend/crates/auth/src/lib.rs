//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, [`AuthGate`]
//!
//! ## Features
//! - Registration with email + user name + password
//! - Login with user name + password, server-side sessions
//! - Session token delivered in the `token` cookie
//! - Per-route session enforcement via [`AuthGate::protect`]
//!
//! ## Security Model
//! - Passwords hashed with Argon2id before they reach the store
//! - Tokens are 32 random bytes, URL-safe base64
//! - Expired sessions are rejected and removed on sight

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
#[cfg(any(test, feature = "test-util"))]
pub use infra::memory::InMemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGate, CurrentUser};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
