//! In-Memory Repository Implementation
//!
//! Surveys kept in insertion order behind one lock. `append_response` checks
//! and writes inside the same critical section.

use std::sync::Arc;

use kernel::id::SurveyId;
use tokio::sync::Mutex;

use crate::domain::entity::survey::{Survey, SurveyResponse};
use crate::domain::repository::{AppendOutcome, SurveyRepository};
use crate::error::SurveyResult;

/// In-memory survey repository
#[derive(Clone, Default)]
pub struct InMemorySurveyRepository {
    surveys: Arc<Mutex<Vec<Survey>>>,
}

impl InMemorySurveyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn survey_count(&self) -> usize {
        self.surveys.lock().await.len()
    }

    /// Responses stored on one survey, empty if it does not exist
    pub async fn responses_for(&self, survey_id: &SurveyId) -> Vec<SurveyResponse> {
        self.surveys
            .lock()
            .await
            .iter()
            .find(|s| &s.survey_id == survey_id)
            .map(|s| s.responses.clone())
            .unwrap_or_default()
    }
}

impl SurveyRepository for InMemorySurveyRepository {
    async fn create(&self, survey: &Survey) -> SurveyResult<()> {
        self.surveys.lock().await.push(survey.clone());
        Ok(())
    }

    async fn list(&self) -> SurveyResult<Vec<Survey>> {
        Ok(self.surveys.lock().await.clone())
    }

    async fn find_by_id(&self, survey_id: &SurveyId) -> SurveyResult<Option<Survey>> {
        Ok(self
            .surveys
            .lock()
            .await
            .iter()
            .find(|s| &s.survey_id == survey_id)
            .cloned())
    }

    async fn append_response(
        &self,
        survey_id: &SurveyId,
        response: &SurveyResponse,
    ) -> SurveyResult<AppendOutcome> {
        let mut surveys = self.surveys.lock().await;

        let Some(survey) = surveys.iter_mut().find(|s| &s.survey_id == survey_id) else {
            return Ok(AppendOutcome::SurveyNotFound);
        };

        if survey.has_response_from(&response.user_id) {
            return Ok(AppendOutcome::AlreadyResponded);
        }

        survey.responses.push(response.clone());
        survey.updated_at = response.submitted_at;
        Ok(AppendOutcome::Appended)
    }
}
