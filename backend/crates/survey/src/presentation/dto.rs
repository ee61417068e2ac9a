//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{SurveyId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::survey::{Question, QuestionType, Survey, SurveyResponse};
use crate::error::{SurveyError, SurveyResult};

// ============================================================================
// Survey documents
// ============================================================================

/// Survey as returned by `GET /api/surveys` and `GET /api/surveys/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDto {
    pub id: SurveyId,
    pub title: String,
    pub creator: UserId,
    pub questions: Vec<Question>,
    pub responses: Vec<SurveyResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Survey> for SurveyDto {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.survey_id,
            title: survey.title,
            creator: survey.creator,
            questions: survey.questions,
            responses: survey.responses,
            created_at: survey.created_at,
            updated_at: survey.updated_at,
        }
    }
}

// ============================================================================
// Create
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSurveyRequest {
    pub title: String,
    pub questions: Vec<QuestionRequest>,
}

/// Question as submitted; `type` is checked when converting
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub options: Vec<String>,
}

impl QuestionRequest {
    pub fn into_question(self) -> SurveyResult<Question> {
        let question_type = match self.question_type.as_str() {
            "text" => QuestionType::Text,
            "multipleChoice" => QuestionType::MultipleChoice,
            other => {
                return Err(SurveyError::InvalidSurvey(format!(
                    "Unknown question type '{other}'"
                )));
            }
        };

        Ok(Question {
            text: self.text,
            question_type,
            options: self.options,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurveyResponse {
    pub message: String,
    pub survey_id: SurveyId,
}

// ============================================================================
// Vote
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoteRequest {
    pub answers: Vec<AnswerRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRequest {
    pub question_index: i64,
    #[serde(alias = "answerText")]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub message: String,
    pub response: SurveyResponse,
}
