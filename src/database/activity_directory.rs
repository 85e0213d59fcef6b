use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::{Activity, ActivityList};

/// Result of trying to put an email on an activity roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddParticipant {
    Added,
    UnknownActivity,
    AlreadyPresent,
}

/// Backing storage for the activity directory.
///
/// `add_participant` must check and append in one step: two concurrent calls
/// with the same email on the same activity may not both return `Added`.
#[async_trait]
pub trait ActivityStore: Send + Sync + std::fmt::Debug + 'static {
    async fn list_activities(&self) -> ActivityList;

    async fn add_participant(&self, activity_name: &str, email: &str) -> AddParticipant;
}

/// Process-lifetime directory held in memory. Dropped state is gone for good.
#[derive(Debug, Default)]
pub struct InMemoryActivityDirectory {
    activities: RwLock<Vec<Activity>>,
}

impl InMemoryActivityDirectory {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityDirectory {
    async fn list_activities(&self) -> ActivityList {
        ActivityList(self.activities.read().await.clone())
    }

    async fn add_participant(&self, activity_name: &str, email: &str) -> AddParticipant {
        let mut activities = self.activities.write().await;

        let Some(activity) = activities.iter_mut().find(|a| a.name == activity_name) else {
            return AddParticipant::UnknownActivity;
        };
        if activity.has_participant(email) {
            return AddParticipant::AlreadyPresent;
        }

        activity.participants.push(email.to_string());
        AddParticipant::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn appends_in_signup_order() {
        let store = InMemoryActivityDirectory::seeded();

        assert_eq!(
            store.add_participant("Tennis Club", "x@mergington.edu").await,
            AddParticipant::Added
        );
        assert_eq!(
            store.add_participant("Tennis Club", "y@mergington.edu").await,
            AddParticipant::Added
        );

        let list = store.list_activities().await;
        assert_eq!(
            list.get("Tennis Club").unwrap().participants,
            vec!["ava@mergington.edu", "x@mergington.edu", "y@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn rejects_unknown_and_duplicate_without_mutating() {
        let store = InMemoryActivityDirectory::seeded();
        let before = store.list_activities().await;

        assert_eq!(
            store.add_participant("Underwater Chess", "x@mergington.edu").await,
            AddParticipant::UnknownActivity
        );
        assert_eq!(
            store.add_participant("Chess Club", "daniel@mergington.edu").await,
            AddParticipant::AlreadyPresent
        );

        let after = store.list_activities().await;
        assert_eq!(before.0, after.0);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_later_signups() {
        let store = InMemoryActivityDirectory::seeded();
        let snapshot = store.list_activities().await;

        store.add_participant("Math Club", "late@mergington.edu").await;

        assert!(!snapshot.get("Math Club").unwrap().has_participant("late@mergington.edu"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicate_signups_admit_exactly_one() {
        let store = Arc::new(InMemoryActivityDirectory::seeded());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add_participant("Art Class", "race@mergington.edu").await
                })
            })
            .collect();

        let mut added = 0;
        for h in handles {
            if h.await.unwrap() == AddParticipant::Added {
                added += 1;
            }
        }
        assert_eq!(added, 1);

        let list = store.list_activities().await;
        let art = list.get("Art Class").unwrap();
        let count = art
            .participants
            .iter()
            .filter(|p| p.as_str() == "race@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }
}
