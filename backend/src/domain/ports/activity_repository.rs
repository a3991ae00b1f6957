//! Port for activity row lifecycle.

use async_trait::async_trait;

use crate::domain::activity::{Activity, ActivityDraft};

/// Failures surfaced by activity persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityPersistenceError {
    /// The backing store could not be reached.
    #[error("activity store connection error: {message}")]
    Connection { message: String },
    /// The query failed for any other reason.
    #[error("activity store query error: {message}")]
    Query { message: String },
}

impl ActivityPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<ActivityPersistenceError> for crate::domain::Error {
    fn from(value: ActivityPersistenceError) -> Self {
        match value {
            ActivityPersistenceError::Connection { .. } => {
                Self::service_unavailable("activity store unavailable")
            }
            ActivityPersistenceError::Query { message } => {
                Self::internal(format!("activity query failed: {message}"))
            }
        }
    }
}

/// Repository port owning the activity row lifecycle.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn insert(&self, draft: &ActivityDraft) -> Result<Activity, ActivityPersistenceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, ActivityPersistenceError>;

    /// All activities, most recent date first.
    async fn list(&self) -> Result<Vec<Activity>, ActivityPersistenceError>;

    /// Up to `limit` activities ordered by date ascending, for the home page.
    async fn upcoming(&self, limit: i64) -> Result<Vec<Activity>, ActivityPersistenceError>;

    /// Returns the updated row, or `None` when the id does not exist.
    async fn update(
        &self,
        id: i32,
        draft: &ActivityDraft,
    ) -> Result<Option<Activity>, ActivityPersistenceError>;

    /// Delete an activity; deleting a missing id is a no-op.
    async fn delete(&self, id: i32) -> Result<(), ActivityPersistenceError>;

    async fn count(&self) -> Result<i64, ActivityPersistenceError>;
}
