//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the domain crates:
//! - Random token generation
//! - Password hashing (Argon2id)
//! - Cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;
