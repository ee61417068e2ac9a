//! Survey Entity
//!
//! A survey document embeds its question definitions and every submitted
//! response. Questions and responses are stored as JSON, so their serde
//! shape is also the storage shape.

use chrono::{DateTime, Utc};
use kernel::id::{SurveyId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{SurveyError, SurveyResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    Text,
    MultipleChoice,
}

/// One question of a survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Required (non-empty) iff `question_type` is `MultipleChoice`
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    fn validate(&self, index: usize) -> SurveyResult<()> {
        if self.text.trim().is_empty() {
            return Err(SurveyError::InvalidSurvey(format!(
                "Question {index} must have text"
            )));
        }

        match self.question_type {
            QuestionType::MultipleChoice => {
                if self.options.is_empty() {
                    return Err(SurveyError::InvalidSurvey(format!(
                        "Question {index} needs at least one option"
                    )));
                }
                if self.options.iter().any(|o| o.trim().is_empty()) {
                    return Err(SurveyError::InvalidSurvey(format!(
                        "Question {index} has an empty option"
                    )));
                }
            }
            QuestionType::Text => {
                if !self.options.is_empty() {
                    return Err(SurveyError::InvalidSurvey(format!(
                        "Question {index} is a text question and cannot have options"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Answer to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_index: usize,
    #[serde(alias = "answerText")]
    pub answer: String,
}

/// One user's complete set of answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub user_id: UserId,
    pub answers: Vec<Answer>,
    pub submitted_at: DateTime<Utc>,
}

impl SurveyResponse {
    pub fn new(user_id: UserId, answers: Vec<Answer>) -> Self {
        Self {
            user_id,
            answers,
            submitted_at: Utc::now(),
        }
    }
}

/// Survey document
#[derive(Debug, Clone)]
pub struct Survey {
    pub survey_id: SurveyId,
    pub title: String,
    pub creator: UserId,
    pub questions: Vec<Question>,
    /// At most one entry per user
    pub responses: Vec<SurveyResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Survey {
    /// Validate and create a survey with no responses
    pub fn new(title: String, creator: UserId, questions: Vec<Question>) -> SurveyResult<Self> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(SurveyError::InvalidSurvey("Title cannot be empty".to_string()));
        }
        if questions.is_empty() {
            return Err(SurveyError::InvalidSurvey(
                "A survey needs at least one question".to_string(),
            ));
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }

        let now = Utc::now();
        Ok(Self {
            survey_id: SurveyId::new(),
            title,
            creator,
            questions,
            responses: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn has_response_from(&self, user_id: &UserId) -> bool {
        self.responses.iter().any(|r| &r.user_id == user_id)
    }
}
