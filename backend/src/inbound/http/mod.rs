//! Inbound HTTP adapter: handlers, session plumbing, and error envelopes.

pub mod admin;
pub mod auth;
pub mod error;
pub mod public;
pub mod register;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
pub use session::SessionContext;
pub use state::HttpState;

use actix_web::HttpResponse;
use actix_web::http::header;

/// Redirect-equivalent response used after successful form mutations.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}
