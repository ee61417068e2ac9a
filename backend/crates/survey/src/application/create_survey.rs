//! Create Survey Use Case

use std::sync::Arc;

use kernel::id::{SurveyId, UserId};

use crate::domain::entity::survey::{Question, Survey};
use crate::domain::repository::SurveyRepository;
use crate::error::SurveyResult;

/// Create survey input
pub struct CreateSurveyInput {
    pub title: String,
    pub questions: Vec<Question>,
    pub creator: UserId,
}

pub struct CreateSurveyUseCase<R>
where
    R: SurveyRepository,
{
    repo: Arc<R>,
}

impl<R> CreateSurveyUseCase<R>
where
    R: SurveyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateSurveyInput) -> SurveyResult<SurveyId> {
        let survey = Survey::new(input.title, input.creator, input.questions)?;

        self.repo.create(&survey).await?;

        tracing::info!(
            survey_id = %survey.survey_id,
            creator = %survey.creator,
            questions = survey.questions.len(),
            "Survey created"
        );

        Ok(survey.survey_id)
    }
}
