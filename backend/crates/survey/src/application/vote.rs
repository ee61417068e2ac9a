//! Vote Use Case
//!
//! Records one user's answers on a survey. The one-response-per-user rule is
//! enforced by [`SurveyRepository::append_response`], not by a prior read.

use std::collections::HashSet;
use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::survey::{Answer, SurveyResponse};
use crate::domain::repository::{AppendOutcome, SurveyRepository};
use crate::error::{SurveyError, SurveyResult};

/// One submitted answer, before it is checked against the survey
pub struct AnswerInput {
    /// Signed so that a negative index is a validation error, not a parse error
    pub question_index: i64,
    pub answer: String,
}

/// Vote input
pub struct VoteInput {
    pub survey_id: String,
    pub user_id: UserId,
    pub answers: Vec<AnswerInput>,
}

pub struct VoteUseCase<R>
where
    R: SurveyRepository,
{
    repo: Arc<R>,
}

impl<R> VoteUseCase<R>
where
    R: SurveyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: VoteInput) -> SurveyResult<SurveyResponse> {
        let survey_id = input
            .survey_id
            .parse()
            .map_err(|_| SurveyError::NotFound)?;

        let survey = self
            .repo
            .find_by_id(&survey_id)
            .await?
            .ok_or(SurveyError::NotFound)?;

        let answers = validate_answers(input.answers, survey.questions.len())?;
        let response = SurveyResponse::new(input.user_id, answers);

        match self.repo.append_response(&survey_id, &response).await? {
            AppendOutcome::Appended => {
                tracing::info!(
                    survey_id = %survey_id,
                    user_id = %input.user_id,
                    answers = response.answers.len(),
                    "Survey response recorded"
                );
                Ok(response)
            }
            AppendOutcome::AlreadyResponded => Err(SurveyError::AlreadyResponded),
            // Deleted between the lookup and the append
            AppendOutcome::SurveyNotFound => Err(SurveyError::NotFound),
        }
    }
}

fn validate_answers(answers: Vec<AnswerInput>, question_count: usize) -> SurveyResult<Vec<Answer>> {
    if answers.is_empty() {
        return Err(SurveyError::InvalidAnswer(
            "At least one answer is required".to_string(),
        ));
    }

    let mut answered = HashSet::with_capacity(answers.len());

    answers
        .into_iter()
        .map(|a| {
            let question_index = usize::try_from(a.question_index)
                .ok()
                .filter(|i| *i < question_count)
                .ok_or_else(|| {
                    SurveyError::InvalidAnswer(format!(
                        "Question index {} does not exist",
                        a.question_index
                    ))
                })?;

            if !answered.insert(question_index) {
                return Err(SurveyError::InvalidAnswer(format!(
                    "Question {question_index} is answered more than once"
                )));
            }

            if a.answer.trim().is_empty() {
                return Err(SurveyError::InvalidAnswer(format!(
                    "Answer to question {question_index} cannot be empty"
                )));
            }

            Ok(Answer {
                question_index,
                answer: a.answer,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_index: i64, text: &str) -> AnswerInput {
        AnswerInput {
            question_index,
            answer: text.to_string(),
        }
    }

    #[test]
    fn test_validate_answers_ok() {
        let answers = validate_answers(vec![answer(0, "yes"), answer(1, "B")], 2).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[1].question_index, 1);
        assert_eq!(answers[1].answer, "B");
    }

    #[test]
    fn test_validate_answers_rejects() {
        let cases = [
            vec![],
            vec![answer(2, "out of range")],
            vec![answer(-1, "negative")],
            vec![answer(0, "  ")],
            vec![answer(0, "a"), answer(1, "b"), answer(0, "again")],
        ];

        for answers in cases {
            assert!(matches!(
                validate_answers(answers, 2),
                Err(SurveyError::InvalidAnswer(_))
            ));
        }
    }

    #[test]
    fn test_duplicate_answer_message() {
        let err = validate_answers(vec![answer(1, "a"), answer(1, "b")], 2).unwrap_err();
        assert_eq!(err.to_string(), "Question 1 is answered more than once");
    }
}
