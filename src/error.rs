use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Why a signup was refused. The `Display` text is the `detail` returned to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up")]
    Conflict,
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::NotFound => StatusCode::NOT_FOUND,
            SignupError::Conflict => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
