//! Server construction and middleware wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_multipart::form::MultipartFormConfig;
use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::state::HttpState;
use crate::inbound::http::{admin, auth, public, register};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DbPool, DieselActivityRepository, DieselMemberRepository, DieselNewsRepository,
    DieselUserRepository,
};
use crate::outbound::uploads::FilesystemUploadStore;

/// Build the HTTP state bundle from database-backed adapters.
pub fn build_http_state(pool: &DbPool, upload_dir: &str) -> HttpState {
    HttpState::new(
        Arc::new(DieselMemberRepository::new(pool.clone())),
        Arc::new(DieselActivityRepository::new(pool.clone())),
        Arc::new(DieselNewsRepository::new(pool.clone())),
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(FilesystemUploadStore::new(upload_dir)),
    )
}

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    max_upload_bytes: usize,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        max_upload_bytes,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    App::new()
        .app_data(http_state)
        .app_data(
            MultipartFormConfig::default()
                .total_limit(max_upload_bytes)
                .memory_limit(max_upload_bytes),
        )
        .wrap(session)
        .wrap(Trace)
        .route("/", web::get().to(public::home))
        .route("/activities", web::get().to(public::activities_list))
        .route("/activities/{id}", web::get().to(public::activity_detail))
        .route("/news", web::get().to(public::news_list))
        .route("/news/{id}", web::get().to(public::news_detail))
        .route("/members", web::get().to(public::members_directory))
        .route("/members/{id}", web::get().to(public::member_detail))
        .route("/register", web::get().to(register::register_form))
        .route("/register", web::post().to(register::register))
        .route("/login", web::get().to(auth::login_form))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout))
        .route("/admin", web::get().to(admin::dashboard))
        .route("/admin/activities", web::get().to(admin::activities_list))
        .route(
            "/admin/activities/new",
            web::post().to(admin::activity_create),
        )
        .route(
            "/admin/activities/{id}/edit",
            web::get().to(admin::activity_edit_form),
        )
        .route(
            "/admin/activities/{id}/edit",
            web::post().to(admin::activity_update),
        )
        .route(
            "/admin/activities/{id}/delete",
            web::post().to(admin::activity_delete),
        )
        .route("/admin/news", web::get().to(admin::news_list))
        .route("/admin/news/new", web::post().to(admin::news_create))
        .route("/admin/news/{id}/edit", web::get().to(admin::news_edit_form))
        .route("/admin/news/{id}/edit", web::post().to(admin::news_update))
        .route("/admin/news/{id}/delete", web::post().to(admin::news_delete))
        .route("/admin/members", web::get().to(admin::members_list))
        .route(
            "/admin/members/{id}/edit",
            web::get().to(admin::member_edit_form),
        )
        .route(
            "/admin/members/{id}/edit",
            web::post().to(admin::member_update),
        )
        .route(
            "/admin/members/{id}/delete",
            web::post().to(admin::member_delete),
        )
        .route(
            "/admin/members/{id}/card",
            web::get().to(admin::member_card),
        )
}

/// Construct the HTTP server from validated configuration and a ready pool.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: AppConfig, pool: DbPool) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&pool, &config.upload_dir));
    let AppConfig {
        session_key,
        bind_addr,
        cookie_secure,
        max_upload_bytes,
        ..
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: session_key.clone(),
            cookie_secure,
            max_upload_bytes,
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
