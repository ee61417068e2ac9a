//! List Surveys Use Case

use std::sync::Arc;

use crate::domain::entity::survey::Survey;
use crate::domain::repository::SurveyRepository;
use crate::error::SurveyResult;

pub struct ListSurveysUseCase<R>
where
    R: SurveyRepository,
{
    repo: Arc<R>,
}

impl<R> ListSurveysUseCase<R>
where
    R: SurveyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> SurveyResult<Vec<Survey>> {
        self.repo.list().await
    }
}
