use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A request that never reached a handler body: a required parameter was
/// absent or the query string could not be read. Always a 422.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Option<String>,
}

impl ValidationIssue {
    pub fn missing_query(field: &str) -> Self {
        Self {
            kind: "missing",
            loc: vec!["query".to_string(), field.to_string()],
            msg: "Field required".to_string(),
            input: None,
        }
    }

    pub fn from_query_rejection(rejection: &QueryRejection) -> Self {
        Self {
            kind: "query_parse",
            loc: vec!["query".to_string()],
            msg: rejection.body_text(),
            input: None,
        }
    }
}

impl IntoResponse for ValidationIssue {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "detail": [self] })),
        )
            .into_response()
    }
}
