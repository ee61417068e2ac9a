//! Application Layer
//!
//! Survey use cases.

pub mod create_survey;
pub mod get_survey;
pub mod list_surveys;
pub mod vote;

// Re-exports
pub use create_survey::{CreateSurveyInput, CreateSurveyUseCase};
pub use get_survey::GetSurveyUseCase;
pub use list_surveys::ListSurveysUseCase;
pub use vote::{AnswerInput, VoteInput, VoteUseCase};
