//! Survey Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Survey entity and repository trait
//! - `application/` - List, get, create and vote use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Surveys are documents that embed their questions and responses. A user
//! can respond to a survey once; the store enforces this with a single
//! conditional append. Write routes sit behind [`auth::AuthGate`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{SurveyError, SurveyResult};
#[cfg(any(test, feature = "test-util"))]
pub use infra::memory::InMemorySurveyRepository;
pub use infra::postgres::PgSurveyRepository;
pub use presentation::router::survey_router;
