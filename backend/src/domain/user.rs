//! Admin user accounts and the session principal derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default role assigned to bootstrap users.
pub const ADMIN_ROLE: &str = "admin";

/// A back-office user account.
///
/// The password hash never leaves the persistence and login paths; only the
/// [`Principal`] projection is ever placed in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Project the identity carried in an authenticated session.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

/// Draft for inserting a new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// The authenticated identity stored in the session cookie.
///
/// A copy of the backing [`User`] row at login time; it is not refreshed when
/// the row changes until the next login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i32,
    pub username: String,
    pub role: String,
}
