//! Transport-agnostic domain model and workflows.
//!
//! Nothing in this module imports actix or diesel; inbound and outbound
//! adapters depend on it, never the other way round.

pub mod activity;
pub mod auth;
pub mod error;
pub mod member;
pub mod news;
pub mod ports;
pub mod registration;
pub mod uploads;
pub mod user;
pub mod validation;

pub use activity::{Activity, ActivityDraft, ActivityInput};
pub use error::{Error, ErrorCode};
pub use member::{DEFAULT_MEMBERSHIP_TYPE, Member, MemberChanges, MemberEditInput, NewMember};
pub use news::{News, NewsDraft, NewsInput};
pub use registration::{RegistrationInput, RegistrationOutcome, RegistrationService};
pub use uploads::{
    ALLOWED_IMAGE_EXTENSIONS, UploadError, UploadStore, UploadedFile, has_allowed_extension,
    sanitize_file_name,
};
pub use user::{ADMIN_ROLE, NewUser, Principal, User};
pub use validation::{DATE_FORMAT, FieldErrors};
