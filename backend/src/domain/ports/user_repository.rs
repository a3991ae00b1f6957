//! Port for back-office user accounts.

use async_trait::async_trait;

use crate::domain::user::{NewUser, User};

/// Failures surfaced by user persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The backing store could not be reached.
    #[error("user store connection error: {message}")]
    Connection { message: String },
    /// The query failed for any other reason.
    #[error("user store query error: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
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

impl From<UserPersistenceError> for crate::domain::Error {
    fn from(value: UserPersistenceError) -> Self {
        match value {
            UserPersistenceError::Connection { .. } => {
                Self::service_unavailable("user store unavailable")
            }
            UserPersistenceError::Query { message } => {
                Self::internal(format!("user query failed: {message}"))
            }
        }
    }
}

/// Repository port for admin user accounts.
///
/// Accounts are created at bootstrap (or rarely, by hand); the application
/// itself only reads them to authenticate sessions.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<User>, UserPersistenceError>;

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
