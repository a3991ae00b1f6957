//! Cooperative members: the entity, insertion draft, and admin edit input.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    FieldErrors, normalize_optional, parse_optional_date, require_non_blank,
};

/// Membership type applied when the registrant leaves the field blank.
pub const DEFAULT_MEMBERSHIP_TYPE: &str = "Reguler";

/// A registered cooperative member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: i32,
    pub name: String,
    /// Stored lowercase; unique across all members.
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub membership_type: String,
    /// Relative path under the static-asset root.
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Draft for inserting a member row at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub membership_type: String,
    pub photo: Option<String>,
}

/// Raw admin edit submission for an existing member.
///
/// Fields mirror the edit form; `photo` replacement travels separately
/// through the upload handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberEditInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub membership_type: String,
}

/// Validated changes to apply to a member row.
///
/// `dob: None` means "leave the stored date of birth unchanged" — a blank
/// field on the edit form does not clear it.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberChanges {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub membership_type: String,
}

impl MemberEditInput {
    /// Validate and normalize the edit submission.
    ///
    /// Name, email, and phone are required, exactly as at registration. A
    /// blank or malformed field yields an inline error and nothing is
    /// persisted; the caller echoes the submitted values back to the form.
    pub fn validate(&self) -> Result<MemberChanges, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = require_non_blank(&mut errors, "name", "name", &self.name);
        let email = require_non_blank(&mut errors, "email", "email", &self.email);
        let phone = require_non_blank(&mut errors, "phone", "phone", &self.phone);
        let dob = parse_optional_date(&mut errors, "dob", &self.dob);
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(name), Some(email), Some(phone)) = (name, email, phone) else {
            return Err(errors);
        };

        let membership_type = {
            let trimmed = self.membership_type.trim();
            if trimmed.is_empty() {
                DEFAULT_MEMBERSHIP_TYPE.to_owned()
            } else {
                trimmed.to_owned()
            }
        };

        Ok(MemberChanges {
            name: name.to_owned(),
            email: email.to_lowercase(),
            phone: phone.to_owned(),
            address: normalize_optional(&self.address),
            dob,
            occupation: normalize_optional(&self.occupation),
            membership_type,
        })
    }
}
