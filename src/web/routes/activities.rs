use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::database::ActivityStore;
use crate::models::ActivityList;
use crate::services::activities_service;
use crate::web::rejection::ValidationIssue;

pub async fn list_activities_handler(
    State(store): State<Arc<dyn ActivityStore>>,
) -> Json<ActivityList> {
    Json(activities_service::list_activities(store.as_ref()).await)
}

// A repeated parameter resolves to its last occurrence.
fn last_query_value(pairs: Vec<(String, String)>, field: &str) -> Option<String> {
    pairs
        .into_iter()
        .filter(|(key, _)| key == field)
        .map(|(_, value)| value)
        .last()
}

pub async fn signup_handler(
    State(store): State<Arc<dyn ActivityStore>>,
    Path(activity_name): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            debug!(activity = %activity_name, error = %rejection, "unreadable signup query");
            return ValidationIssue::from_query_rejection(&rejection).into_response();
        }
    };
    let Some(email) = last_query_value(pairs, "email") else {
        debug!(activity = %activity_name, "signup without email");
        return ValidationIssue::missing_query("email").into_response();
    };

    match activities_service::signup(store.as_ref(), &activity_name, &email).await {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}
