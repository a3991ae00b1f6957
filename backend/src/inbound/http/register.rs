//! Public registration endpoint.
//!
//! Accepts the multipart registration form, hands it to the domain workflow,
//! and maps the outcome to a redirect or a re-displayable rejection payload.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::domain::Error;
use crate::domain::registration::{RegistrationInput, RegistrationOutcome};
use crate::domain::uploads::UploadedFile;
use crate::inbound::http::{ApiResult, HttpState, see_other};

/// Multipart payload of the registration form.
///
/// Every field is optional at the transport layer; the domain workflow owns
/// the required-field rules so partial submissions still get a full error
/// map.
#[derive(Debug, MultipartForm)]
pub struct RegisterForm {
    pub name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    pub address: Option<Text<String>>,
    pub dob: Option<Text<String>>,
    pub occupation: Option<Text<String>>,
    pub membership_type: Option<Text<String>>,
    pub photo: Option<TempFile>,
}

fn text_or_default(field: Option<Text<String>>) -> String {
    field.map(|text| text.into_inner()).unwrap_or_default()
}

impl RegisterForm {
    /// Lower the multipart payload into the domain input, reading the staged
    /// photo bytes back from the temp file.
    fn into_input(self) -> Result<RegistrationInput, Error> {
        let photo = match self.photo {
            Some(upload) => {
                let file_name = upload.file_name.unwrap_or_default();
                if file_name.is_empty() {
                    None
                } else {
                    let payload = std::fs::read(upload.file.path()).map_err(|err| {
                        Error::internal(format!("failed to read uploaded photo: {err}"))
                    })?;
                    Some(UploadedFile { file_name, payload })
                }
            }
            None => None,
        };
        Ok(RegistrationInput {
            name: text_or_default(self.name),
            email: text_or_default(self.email),
            phone: text_or_default(self.phone),
            address: text_or_default(self.address),
            dob: text_or_default(self.dob),
            occupation: text_or_default(self.occupation),
            membership_type: text_or_default(self.membership_type),
            photo,
        })
    }
}

/// Empty registration scaffold for clients that render their own form.
pub async fn register_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "errors": {}, "form": {} }))
}

/// Run the registration workflow.
///
/// Success redirects to the new member's detail page; a rejected submission
/// is a 400 carrying the error map and the echoed values.
pub async fn register(
    state: web::Data<HttpState>,
    form: MultipartForm<RegisterForm>,
) -> ApiResult<HttpResponse> {
    let input = form.into_inner().into_input()?;
    let outcome = state.registration.register(input).await?;
    Ok(match outcome {
        RegistrationOutcome::Registered { member_id } => {
            see_other(&format!("/members/{member_id}"))
        }
        rejected @ RegistrationOutcome::Rejected { .. } => {
            HttpResponse::BadRequest().json(rejected)
        }
    })
}
