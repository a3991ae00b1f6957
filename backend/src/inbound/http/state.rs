//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::RegistrationService;
use crate::domain::ports::{ActivityRepository, MemberRepository, NewsRepository, UserRepository};
use crate::domain::uploads::UploadStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub members: Arc<dyn MemberRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub news: Arc<dyn NewsRepository>,
    pub users: Arc<dyn UserRepository>,
    pub uploads: Arc<dyn UploadStore>,
    pub registration: RegistrationService,
}

impl HttpState {
    /// Bundle the port implementations, deriving the registration workflow
    /// from the member and upload ports.
    pub fn new(
        members: Arc<dyn MemberRepository>,
        activities: Arc<dyn ActivityRepository>,
        news: Arc<dyn NewsRepository>,
        users: Arc<dyn UserRepository>,
        uploads: Arc<dyn UploadStore>,
    ) -> Self {
        let registration = RegistrationService::new(members.clone(), uploads.clone());
        Self {
            members,
            activities,
            news,
            users,
            uploads,
            registration,
        }
    }
}
