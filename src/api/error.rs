use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::dto::{ErrorResponse, MESSAGE_NOT_FOUND, MESSAGE_TITLE_REQUIRED};
use crate::catalog::LookupError;

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("title required")]
    TitleRequired,

    #[error("not found")]
    NotFound { title: String },
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TitleRequired => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::TitleRequired => MESSAGE_TITLE_REQUIRED,
            Self::NotFound { .. } => MESSAGE_NOT_FOUND,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::EmptyQuery => Self::TitleRequired,
            LookupError::NotFound { title } => Self::NotFound { title },
        }
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = ErrorResponse::new(self.to_string(), self.message());

        (status_code, Json(body)).into_response()
    }
}
