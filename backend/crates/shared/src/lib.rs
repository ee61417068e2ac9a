//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! auth and survey domains:
//! - Common error types and result aliases
//! - Typed ID wrappers for users, sessions and surveys

pub mod error {
    pub mod app_error;
    #[cfg(any(feature = "sqlx", feature = "axum"))]
    pub mod conversions;
    pub mod kind;
}
pub mod id;
