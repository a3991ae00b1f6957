//! News articles published by the cooperative.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published news article, publicly readable and admin-managed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Validated values for creating or updating a news article.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsDraft {
    pub title: String,
    pub body: String,
}

/// Raw admin form submission for a news article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsInput {
    pub title: String,
    pub body: String,
}

impl NewsInput {
    /// Normalize the submission. News has no date field to reject.
    pub fn into_draft(self) -> NewsDraft {
        NewsDraft {
            title: self.title.trim().to_owned(),
            body: self.body.trim().to_owned(),
        }
    }
}
