//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::CurrentUser;

use crate::application::{
    AnswerInput, CreateSurveyInput, CreateSurveyUseCase, GetSurveyUseCase, ListSurveysUseCase,
    VoteInput, VoteUseCase,
};
use crate::domain::repository::SurveyRepository;
use crate::error::SurveyResult;
use crate::presentation::dto::{
    CreateSurveyRequest, CreateSurveyResponse, SurveyDto, VoteRequest, VoteResponse,
};
use crate::presentation::extract::JsonBody;

/// Shared state for survey handlers
pub struct SurveyAppState<R>
where
    R: SurveyRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for SurveyAppState<R>
where
    R: SurveyRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /api/surveys
pub async fn list_surveys<R>(
    State(state): State<SurveyAppState<R>>,
) -> SurveyResult<Json<Vec<SurveyDto>>>
where
    R: SurveyRepository + Send + Sync + 'static,
{
    let surveys = ListSurveysUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(surveys.into_iter().map(SurveyDto::from).collect()))
}

/// GET /api/surveys/{id}
pub async fn get_survey<R>(
    State(state): State<SurveyAppState<R>>,
    Path(id): Path<String>,
) -> SurveyResult<Json<SurveyDto>>
where
    R: SurveyRepository + Send + Sync + 'static,
{
    let survey = GetSurveyUseCase::new(state.repo.clone()).execute(&id).await?;

    Ok(Json(survey.into()))
}

/// POST /api/surveys
pub async fn create_survey<R>(
    State(state): State<SurveyAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<CreateSurveyRequest>,
) -> SurveyResult<impl IntoResponse>
where
    R: SurveyRepository + Send + Sync + 'static,
{
    let questions = req
        .questions
        .into_iter()
        .map(|q| q.into_question())
        .collect::<SurveyResult<Vec<_>>>()?;

    let input = CreateSurveyInput {
        title: req.title,
        questions,
        creator: current_user.user_id,
    };

    let survey_id = CreateSurveyUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSurveyResponse {
            message: "Survey created successfully".to_string(),
            survey_id,
        }),
    ))
}

/// POST /api/surveys/{id}/vote
pub async fn vote<R>(
    State(state): State<SurveyAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<VoteRequest>,
) -> SurveyResult<Json<VoteResponse>>
where
    R: SurveyRepository + Send + Sync + 'static,
{
    let input = VoteInput {
        survey_id: id,
        user_id: current_user.user_id,
        answers: req
            .answers
            .into_iter()
            .map(|a| AnswerInput {
                question_index: a.question_index,
                answer: a.answer,
            })
            .collect(),
    };

    let response = VoteUseCase::new(state.repo.clone()).execute(input).await?;

    Ok(Json(VoteResponse {
        message: "Survey response recorded successfully".to_string(),
        response,
    }))
}
