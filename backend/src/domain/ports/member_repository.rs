//! Port for member row lifecycle.

use async_trait::async_trait;

use crate::domain::member::{Member, MemberChanges, NewMember};

/// Failures surfaced by member persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemberPersistenceError {
    /// The database unique constraint on `email` rejected the write.
    #[error("email already registered")]
    DuplicateEmail,
    /// The backing store could not be reached.
    #[error("member store connection error: {message}")]
    Connection { message: String },
    /// The query failed for any other reason.
    #[error("member store query error: {message}")]
    Query { message: String },
}

impl MemberPersistenceError {
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

impl From<MemberPersistenceError> for crate::domain::Error {
    fn from(value: MemberPersistenceError) -> Self {
        match value {
            MemberPersistenceError::DuplicateEmail => {
                Self::invalid_request("email is already registered")
            }
            MemberPersistenceError::Connection { .. } => {
                Self::service_unavailable("member store unavailable")
            }
            MemberPersistenceError::Query { message } => {
                Self::internal(format!("member query failed: {message}"))
            }
        }
    }
}

/// Repository port owning the member row lifecycle.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member; the email unique constraint is the sole guard
    /// against racing duplicate registrations.
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberPersistenceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, MemberPersistenceError>;

    /// All members, newest registration first.
    async fn list(&self) -> Result<Vec<Member>, MemberPersistenceError>;

    /// Directory search: case-insensitive name substring, newest first.
    /// A blank query returns everything.
    async fn search(&self, query: &str) -> Result<Vec<Member>, MemberPersistenceError>;

    /// Apply admin edits; `photo` replaces the stored path when `Some`.
    /// Returns the updated row, or `None` when the id does not exist.
    async fn update(
        &self,
        id: i32,
        changes: &MemberChanges,
        photo: Option<&str>,
    ) -> Result<Option<Member>, MemberPersistenceError>;

    /// Delete a member; deleting a missing id is a no-op.
    async fn delete(&self, id: i32) -> Result<(), MemberPersistenceError>;

    async fn count(&self) -> Result<i64, MemberPersistenceError>;
}
