//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::survey::{Answer, Question, QuestionType, Survey, SurveyResponse};
pub use repository::{AppendOutcome, SurveyRepository};
