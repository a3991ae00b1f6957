//! Port for news row lifecycle.

use async_trait::async_trait;

use crate::domain::news::{News, NewsDraft};

/// Failures surfaced by news persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsPersistenceError {
    /// The backing store could not be reached.
    #[error("news store connection error: {message}")]
    Connection { message: String },
    /// The query failed for any other reason.
    #[error("news store query error: {message}")]
    Query { message: String },
}

impl NewsPersistenceError {
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

impl From<NewsPersistenceError> for crate::domain::Error {
    fn from(value: NewsPersistenceError) -> Self {
        match value {
            NewsPersistenceError::Connection { .. } => {
                Self::service_unavailable("news store unavailable")
            }
            NewsPersistenceError::Query { message } => {
                Self::internal(format!("news query failed: {message}"))
            }
        }
    }
}

/// Repository port owning the news row lifecycle.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn insert(&self, draft: &NewsDraft) -> Result<News, NewsPersistenceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, NewsPersistenceError>;

    /// All news, newest first.
    async fn list(&self) -> Result<Vec<News>, NewsPersistenceError>;

    /// Up to `limit` newest articles, for the home page.
    async fn latest(&self, limit: i64) -> Result<Vec<News>, NewsPersistenceError>;

    /// Returns the updated row, or `None` when the id does not exist.
    async fn update(&self, id: i32, draft: &NewsDraft)
    -> Result<Option<News>, NewsPersistenceError>;

    /// Delete an article; deleting a missing id is a no-op.
    async fn delete(&self, id: i32) -> Result<(), NewsPersistenceError>;

    async fn count(&self) -> Result<i64, NewsPersistenceError>;
}
