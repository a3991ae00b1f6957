//! Self-service member registration workflow.
//!
//! Validates the submitted form, stages the optional photo, and persists the
//! member row. Field errors accumulate across the whole form and the caller
//! gets the original values back for re-display.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use crate::domain::Error;
use crate::domain::member::{DEFAULT_MEMBERSHIP_TYPE, NewMember};
use crate::domain::ports::{MemberPersistenceError, MemberRepository};
use crate::domain::uploads::{UploadStore, UploadedFile, has_allowed_extension};
use crate::domain::validation::{
    FieldErrors, normalize_optional, parse_optional_date, require_non_blank,
};

/// Raw registration form submission.
///
/// String fields are echoed back verbatim on rejection; the photo payload is
/// never echoed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub dob: String,
    pub occupation: String,
    pub membership_type: String,
    #[serde(skip)]
    pub photo: Option<UploadedFile>,
}

/// Result of a registration attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RegistrationOutcome {
    /// The member row was created; redirect to its detail page.
    Registered { member_id: i32 },
    /// Validation failed; the error map and the submitted values are
    /// returned together for re-display.
    Rejected {
        errors: FieldErrors,
        form: RegistrationInput,
    },
}

/// Registration workflow over the member and upload ports.
#[derive(Clone)]
pub struct RegistrationService {
    members: Arc<dyn MemberRepository>,
    uploads: Arc<dyn UploadStore>,
}

impl RegistrationService {
    /// Create a workflow backed by the given ports.
    pub fn new(members: Arc<dyn MemberRepository>, uploads: Arc<dyn UploadStore>) -> Self {
        Self { members, uploads }
    }

    /// Run the registration workflow.
    ///
    /// Returns `Err` only for upload storage failures, which abort the
    /// attempt before any database write. Validation and uniqueness failures
    /// are ordinary [`RegistrationOutcome::Rejected`] values.
    ///
    /// A photo passing the extension check is written to disk even when
    /// another field later fails validation, so rejected submissions can
    /// leave an orphaned file behind. Known limitation, kept deliberately.
    pub async fn register(&self, input: RegistrationInput) -> Result<RegistrationOutcome, Error> {
        let mut errors = FieldErrors::new();

        let name = require_non_blank(&mut errors, "name", "name", &input.name);
        let email = require_non_blank(&mut errors, "email", "email", &input.email);
        let phone = require_non_blank(&mut errors, "phone", "phone", &input.phone);

        let mut photo_path = None;
        if let Some(photo) = &input.photo {
            if !photo.file_name.is_empty() {
                if has_allowed_extension(&photo.file_name) {
                    let path = self
                        .uploads
                        .store(&photo.file_name, &photo.payload)
                        .await
                        .map_err(|err| {
                            error!(error = %err, "photo upload failed");
                            Error::internal(format!("failed to store photo: {err}"))
                        })?;
                    photo_path = Some(path);
                } else {
                    errors.insert("photo", "unsupported photo format (png/jpg/jpeg/gif/webp)");
                }
            }
        }

        let dob = parse_optional_date(&mut errors, "dob", &input.dob);

        if !errors.is_empty() {
            return Ok(RegistrationOutcome::Rejected {
                errors,
                form: input,
            });
        }
        let (Some(name), Some(email), Some(phone)) = (name, email, phone) else {
            return Err(Error::internal("required fields missing after validation"));
        };

        let membership_type = {
            let trimmed = input.membership_type.trim();
            if trimmed.is_empty() {
                DEFAULT_MEMBERSHIP_TYPE.to_owned()
            } else {
                trimmed.to_owned()
            }
        };
        let member = NewMember {
            name: name.to_owned(),
            email: email.to_lowercase(),
            phone: phone.to_owned(),
            address: normalize_optional(&input.address),
            dob,
            occupation: normalize_optional(&input.occupation),
            membership_type,
            photo: photo_path,
        };

        match self.members.insert(&member).await {
            Ok(created) => Ok(RegistrationOutcome::Registered {
                member_id: created.id,
            }),
            Err(MemberPersistenceError::DuplicateEmail) => {
                debug!(email = %member.email, "duplicate registration rejected");
                errors.insert("email", "email is already registered");
                Ok(RegistrationOutcome::Rejected {
                    errors,
                    form: input,
                })
            }
            Err(err) => {
                error!(error = %err, "member insert failed");
                errors.insert("general", "something went wrong, try again");
                Ok(RegistrationOutcome::Rejected {
                    errors,
                    form: input,
                })
            }
        }
    }
}
