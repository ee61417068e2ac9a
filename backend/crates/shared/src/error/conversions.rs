//! Conversions into [`AppError`] and its HTTP rendering, behind the `sqlx`
//! and `axum` features.

use super::app_error::AppError;

#[cfg(feature = "sqlx")]
impl AppError {
    /// Classify a database failure. The message is generic; callers log the
    /// underlying error themselves.
    pub fn from_sqlx(err: &sqlx::Error) -> Self {
        use super::kind::ErrorKind;

        let (kind, message) = match err {
            sqlx::Error::RowNotFound => (ErrorKind::NotFound, "Record not found"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                (ErrorKind::ServiceUnavailable, "Database unavailable")
            }
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505" | "23503") => (ErrorKind::Conflict, "Conflicting record"),
                Some("23502" | "23514") => (ErrorKind::BadRequest, "Constraint violation"),
                Some(code) if code.starts_with("53") || code.starts_with("57") => {
                    (ErrorKind::ServiceUnavailable, "Database unavailable")
                }
                _ => (ErrorKind::InternalServerError, "Database error"),
            },
            _ => (ErrorKind::InternalServerError, "Database error"),
        };

        AppError::new(kind, message)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, axum::Json(self.problem())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_mapping() {
        let app_err = AppError::from_sqlx(&sqlx::Error::RowNotFound);
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        for err in [sqlx::Error::PoolTimedOut, sqlx::Error::PoolClosed] {
            let app_err = AppError::from_sqlx(&err);
            assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
            assert_eq!(app_err.status_code(), 503);
            assert_eq!(app_err.message(), "Database unavailable");
        }

        let app_err = AppError::from_sqlx(&sqlx::Error::Protocol("bad frame".into()));
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(app_err.message(), "Database error");
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response() {
        use axum::response::IntoResponse;

        let response =
            AppError::new(ErrorKind::Unauthorized, "Authentication required.").into_response();
        assert_eq!(response.status().as_u16(), 401);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Authentication required.");
        assert_eq!(body["detail"], body["message"]);
        assert_eq!(body["title"], "Unauthorized");
    }
}
