use serde::Serialize;
use tracing::{info, warn};

use crate::database::{ActivityStore, AddParticipant};
use crate::error::SignupError;
use crate::models::ActivityList;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SignupConfirmation {
    pub message: String,
}

impl SignupConfirmation {
    fn new(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }
}

pub async fn list_activities(store: &dyn ActivityStore) -> ActivityList {
    store.list_activities().await
}

/// Adds `email` to the roster of `activity_name`.
///
/// Capacity (`max_participants`) is not checked. The email is taken as-is.
pub async fn signup(
    store: &dyn ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match store.add_participant(activity_name, email).await {
        AddParticipant::Added => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(SignupConfirmation::new(email, activity_name))
        }
        AddParticipant::UnknownActivity => {
            warn!(activity = %activity_name, email = %email, "signup for unknown activity");
            Err(SignupError::NotFound)
        }
        AddParticipant::AlreadyPresent => {
            warn!(activity = %activity_name, email = %email, "duplicate signup");
            Err(SignupError::Conflict)
        }
    }
}
