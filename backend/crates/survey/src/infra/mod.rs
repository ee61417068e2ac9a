//! Infrastructure Layer
//!
//! Database implementations.

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "test-util"))]
pub use memory::InMemorySurveyRepository;
pub use postgres::PgSurveyRepository;
