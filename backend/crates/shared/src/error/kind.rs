//! Error Kind
//!
//! The HTTP-facing category of an [`AppError`](super::app_error::AppError).

use std::fmt;

use serde::Serialize;

/// Error category; each maps to one HTTP status.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Conflict.status_code(), 409);
/// assert_eq!(ErrorKind::Conflict.title(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Input failed validation
    BadRequest,
    /// No valid session
    Unauthorized,
    NotFound,
    /// Unique key clash (email, user name)
    Conflict,
    InternalServerError,
    /// Database unreachable or out of resources
    ServiceUnavailable,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Reason phrase, used as the problem `title`
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::InternalServerError => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_title() {
        let cases = [
            (ErrorKind::BadRequest, 400, "Bad Request"),
            (ErrorKind::Unauthorized, 401, "Unauthorized"),
            (ErrorKind::NotFound, 404, "Not Found"),
            (ErrorKind::Conflict, 409, "Conflict"),
            (ErrorKind::InternalServerError, 500, "Internal Server Error"),
            (ErrorKind::ServiceUnavailable, 503, "Service Unavailable"),
        ];

        for (kind, status, title) in cases {
            assert_eq!(kind.status_code(), status);
            assert_eq!(kind.to_string(), title);
        }
    }

    #[test]
    fn test_serialized_name() {
        assert_eq!(
            serde_json::to_value(ErrorKind::NotFound).unwrap(),
            serde_json::json!("NOT_FOUND")
        );
    }
}
