//! PostgreSQL Repository Implementation
//!
//! Questions and responses live in JSONB columns of the `surveys` row.

use chrono::{DateTime, Utc};
use kernel::id::{SurveyId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::survey::{Question, Survey, SurveyResponse};
use crate::domain::repository::{AppendOutcome, SurveyRepository};
use crate::error::SurveyResult;

/// PostgreSQL-backed survey repository
#[derive(Clone)]
pub struct PgSurveyRepository {
    pool: PgPool,
}

impl PgSurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SurveyRepository for PgSurveyRepository {
    async fn create(&self, survey: &Survey) -> SurveyResult<()> {
        sqlx::query(
            r#"
            INSERT INTO surveys (
                survey_id,
                title,
                creator,
                questions,
                responses,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(survey.survey_id.as_uuid())
        .bind(&survey.title)
        .bind(survey.creator.as_uuid())
        .bind(Json(&survey.questions))
        .bind(Json(&survey.responses))
        .bind(survey.created_at)
        .bind(survey.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> SurveyResult<Vec<Survey>> {
        let rows = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT
                survey_id,
                title,
                creator,
                questions,
                responses,
                created_at,
                updated_at
            FROM surveys
            ORDER BY created_at, survey_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SurveyRow::into_survey).collect())
    }

    async fn find_by_id(&self, survey_id: &SurveyId) -> SurveyResult<Option<Survey>> {
        let row = sqlx::query_as::<_, SurveyRow>(
            r#"
            SELECT
                survey_id,
                title,
                creator,
                questions,
                responses,
                created_at,
                updated_at
            FROM surveys
            WHERE survey_id = $1
            "#,
        )
        .bind(survey_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SurveyRow::into_survey))
    }

    async fn append_response(
        &self,
        survey_id: &SurveyId,
        response: &SurveyResponse,
    ) -> SurveyResult<AppendOutcome> {
        // The containment test and the append share one statement; a
        // concurrent writer on the same row makes Postgres re-check the
        // WHERE clause against the committed row.
        let appended = sqlx::query(
            r#"
            UPDATE surveys
            SET responses = responses || jsonb_build_array($2::jsonb),
                updated_at = $4
            WHERE survey_id = $1
              AND NOT (responses @> $3::jsonb)
            "#,
        )
        .bind(survey_id.as_uuid())
        .bind(Json(response))
        .bind(Json(responded_filter(&response.user_id)))
        .bind(response.submitted_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if appended > 0 {
            return Ok(AppendOutcome::Appended);
        }

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM surveys WHERE survey_id = $1)")
                .bind(survey_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(if exists {
            AppendOutcome::AlreadyResponded
        } else {
            AppendOutcome::SurveyNotFound
        })
    }
}

/// JSONB containment pattern matching any stored response from `user_id`
fn responded_filter(user_id: &UserId) -> serde_json::Value {
    serde_json::json!([{ "userId": user_id }])
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct SurveyRow {
    survey_id: Uuid,
    title: String,
    creator: Uuid,
    questions: Json<Vec<Question>>,
    responses: Json<Vec<SurveyResponse>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SurveyRow {
    fn into_survey(self) -> Survey {
        Survey {
            survey_id: SurveyId::from_uuid(self.survey_id),
            title: self.title,
            creator: UserId::from_uuid(self.creator),
            questions: self.questions.0,
            responses: self.responses.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::survey::Answer;

    #[test]
    fn test_responded_filter_shape() {
        let user_id = UserId::new();
        assert_eq!(
            responded_filter(&user_id),
            serde_json::json!([{ "userId": user_id.to_string() }])
        );
    }

    #[test]
    fn test_responded_filter_matches_stored_response() {
        let user_id = UserId::new();
        let response = SurveyResponse::new(
            user_id,
            vec![Answer {
                question_index: 0,
                answer: "yes".to_string(),
            }],
        );
        let stored = serde_json::to_value(&response).unwrap();

        // `@>` on arrays: every filter element must be contained in some
        // stored element, key by key
        let filter = responded_filter(&user_id);
        let pattern = filter[0].as_object().unwrap();
        for (key, value) in pattern {
            assert_eq!(&stored[key], value, "stored response lacks {key}");
        }

        let other = responded_filter(&UserId::new());
        assert_ne!(stored["userId"], other[0]["userId"]);
    }
}

