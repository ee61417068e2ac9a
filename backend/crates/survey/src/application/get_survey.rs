//! Get Survey Use Case

use std::sync::Arc;

use kernel::id::SurveyId;

use crate::domain::entity::survey::Survey;
use crate::domain::repository::SurveyRepository;
use crate::error::{SurveyError, SurveyResult};

pub struct GetSurveyUseCase<R>
where
    R: SurveyRepository,
{
    repo: Arc<R>,
}

impl<R> GetSurveyUseCase<R>
where
    R: SurveyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Look up a survey by its textual id. A malformed id is just not found.
    pub async fn execute(&self, raw_id: &str) -> SurveyResult<Survey> {
        let survey_id: SurveyId = raw_id.parse().map_err(|_| SurveyError::NotFound)?;

        self.repo
            .find_by_id(&survey_id)
            .await?
            .ok_or(SurveyError::NotFound)
    }
}
