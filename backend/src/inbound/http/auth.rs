//! Login and logout handlers.
//!
//! Authentication is deliberately plain: username lookup, bcrypt
//! verification, and a signed session cookie carrying the [`Principal`].

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::Error;
use crate::domain::auth::verify_password;
use crate::inbound::http::{ApiResult, HttpState, SessionContext, see_other};

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Empty login scaffold for clients that render their own form.
pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "error": null }))
}

/// Verify credentials and establish an admin session.
///
/// An unknown username and a wrong password are indistinguishable to the
/// caller.
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let user = state.users.find_by_username(form.username.trim()).await?;
    let authenticated = user
        .filter(|user| verify_password(&form.password, &user.password_hash))
        .ok_or_else(|| Error::unauthorized("invalid username or password"))?;

    let principal = authenticated.principal();
    session.persist_principal(&principal)?;
    info!(username = %principal.username, "admin login");
    Ok(see_other("/admin"))
}

/// Clear the session and return to the public home page.
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    see_other("/")
}
