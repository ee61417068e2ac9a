//! Repository Traits

use kernel::id::SurveyId;

use crate::domain::entity::survey::{Survey, SurveyResponse};
use crate::error::SurveyResult;

/// Result of a conditional response append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// The user already has a response on this survey; nothing was written
    AlreadyResponded,
    SurveyNotFound,
}

/// Survey store
#[trait_variant::make(SurveyRepository: Send)]
pub trait LocalSurveyRepository {
    async fn create(&self, survey: &Survey) -> SurveyResult<()>;

    /// Every survey, oldest first
    async fn list(&self) -> SurveyResult<Vec<Survey>>;

    async fn find_by_id(&self, survey_id: &SurveyId) -> SurveyResult<Option<Survey>>;

    /// Append `response` unless the survey already holds one from the same
    /// user. The check and the write are a single atomic step.
    async fn append_response(
        &self,
        survey_id: &SurveyId,
        response: &SurveyResponse,
    ) -> SurveyResult<AppendOutcome>;
}
