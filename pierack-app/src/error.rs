//! Mapping store errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pierack_content::ContentError;

/// Wrapper so handlers can use `?` on content operations
#[derive(Debug)]
pub struct AppError(ContentError);

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            ContentError::PieNotFound { .. } => {
                (StatusCode::NOT_FOUND, "pie not found").into_response()
            }
            err @ (ContentError::MissingField { .. } | ContentError::InvalidValue { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            err => {
                tracing::error!("request failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
