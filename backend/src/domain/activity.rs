//! Cooperative activities: entity, drafts, and admin form validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldErrors, normalize_optional, parse_date};

/// A scheduled cooperative activity, publicly readable and admin-managed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated values for creating or updating an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: Option<String>,
}

/// Raw admin form submission for an activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityInput {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
}

impl ActivityInput {
    /// Validate the submission, rejecting malformed dates inline.
    pub fn validate(&self) -> Result<ActivityDraft, FieldErrors> {
        let date = match parse_date(self.date.trim()) {
            Ok(date) => date,
            Err(message) => {
                let mut errors = FieldErrors::new();
                errors.insert("date", message);
                return Err(errors);
            }
        };
        Ok(ActivityDraft {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            date,
            location: normalize_optional(&self.location),
        })
    }
}
