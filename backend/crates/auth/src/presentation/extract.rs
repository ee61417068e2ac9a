//! Request extractors

use axum::extract::FromRequest;

use crate::error::AuthError;

/// `axum::Json` whose rejections (bad syntax, wrong types, missing
/// content type) become a 400 problem response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct JsonBody<T>(pub T);
