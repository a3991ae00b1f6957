//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! Wraps the actix session so handlers deal only with the domain
//! [`Principal`] and the role guard.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Principal};

pub(crate) const PRINCIPAL_KEY: &str = "user";

/// Newtype wrapper exposing principal-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated principal in the session cookie.
    pub fn persist_principal(&self, principal: &Principal) -> Result<(), Error> {
        self.0
            .insert(PRINCIPAL_KEY, principal)
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Fetch the current principal, if any.
    ///
    /// A tampered or undecodable payload logs a warning and reads as
    /// anonymous rather than failing the request.
    pub fn principal(&self) -> Option<Principal> {
        match self.0.get::<Principal>(PRINCIPAL_KEY) {
            Ok(principal) => principal,
            Err(err) => {
                tracing::warn!(error = %err, "invalid principal in session cookie");
                None
            }
        }
    }

    /// Require a principal holding `role`.
    ///
    /// An absent principal or a role mismatch both yield `Forbidden`; there
    /// is deliberately no redirect to the login page and no
    /// `WWW-Authenticate` challenge.
    pub fn require_role(&self, role: &str) -> Result<Principal, Error> {
        match self.principal() {
            Some(principal) if principal.role == role => Ok(principal),
            _ => Err(Error::forbidden("Forbidden")),
        }
    }

    /// Drop every session entry, returning the caller to anonymous.
    pub fn clear(&self) {
        self.0.clear();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
