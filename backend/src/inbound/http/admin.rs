//! Admin back-office handlers.
//!
//! Every handler asks the session for the `admin` role before touching any
//! state; a guard failure short-circuits with 403 and no side effects.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::info;

use crate::domain::Error;
use crate::domain::activity::ActivityInput;
use crate::domain::member::MemberEditInput;
use crate::domain::news::NewsInput;
use crate::domain::ports::MemberPersistenceError;
use crate::domain::user::ADMIN_ROLE;
use crate::inbound::http::{ApiResult, HttpState, SessionContext, see_other};

/// Dashboard counts for the back-office landing page.
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let members = state.members.count().await?;
    let activities = state.activities.count().await?;
    let news = state.news.count().await?;
    Ok(HttpResponse::Ok().json(json!({
        "members": members,
        "activities": activities,
        "news": news,
    })))
}

// --- activities ---

pub async fn activities_list(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let activities = state.activities.list().await?;
    Ok(HttpResponse::Ok().json(activities))
}

pub async fn activity_create(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ActivityInput>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let input = form.into_inner();
    let draft = match input.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(
                HttpResponse::BadRequest().json(json!({ "errors": errors, "form": input }))
            );
        }
    };
    let created = state.activities.insert(&draft).await?;
    info!(activity_id = created.id, "activity created");
    Ok(see_other("/admin/activities"))
}

pub async fn activity_edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let activity = state
        .activities
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("activity not found"))?;
    Ok(HttpResponse::Ok().json(activity))
}

pub async fn activity_update(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
    form: web::Form<ActivityInput>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let input = form.into_inner();
    let draft = match input.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok(
                HttpResponse::BadRequest().json(json!({ "errors": errors, "form": input }))
            );
        }
    };
    state
        .activities
        .update(id.into_inner(), &draft)
        .await?
        .ok_or_else(|| Error::not_found("activity not found"))?;
    Ok(see_other("/admin/activities"))
}

/// Deleting a missing activity is a no-op; the redirect is unconditional.
pub async fn activity_delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    state.activities.delete(id.into_inner()).await?;
    Ok(see_other("/admin/activities"))
}

// --- news ---

pub async fn news_list(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let news = state.news.list().await?;
    Ok(HttpResponse::Ok().json(news))
}

pub async fn news_create(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<NewsInput>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let created = state.news.insert(&form.into_inner().into_draft()).await?;
    info!(news_id = created.id, "news article created");
    Ok(see_other("/admin/news"))
}

pub async fn news_edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let article = state
        .news
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("news article not found"))?;
    Ok(HttpResponse::Ok().json(article))
}

pub async fn news_update(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
    form: web::Form<NewsInput>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    state
        .news
        .update(id.into_inner(), &form.into_inner().into_draft())
        .await?
        .ok_or_else(|| Error::not_found("news article not found"))?;
    Ok(see_other("/admin/news"))
}

/// Deleting a missing article is a no-op; the redirect is unconditional.
pub async fn news_delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    state.news.delete(id.into_inner()).await?;
    Ok(see_other("/admin/news"))
}

// --- members ---

pub async fn members_list(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let members = state.members.list().await?;
    Ok(HttpResponse::Ok().json(members))
}

pub async fn member_edit_form(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let member = state
        .members
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("member not found"))?;
    Ok(HttpResponse::Ok().json(member))
}

/// Multipart payload of the member edit form.
#[derive(Debug, MultipartForm)]
pub struct MemberEditForm {
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

impl MemberEditForm {
    fn into_parts(self) -> Result<(MemberEditInput, Option<(String, Vec<u8>)>), Error> {
        let photo = match self.photo {
            Some(upload) => {
                let file_name = upload.file_name.unwrap_or_default();
                if file_name.is_empty() {
                    None
                } else {
                    let payload = std::fs::read(upload.file.path()).map_err(|err| {
                        Error::internal(format!("failed to read uploaded photo: {err}"))
                    })?;
                    Some((file_name, payload))
                }
            }
            None => None,
        };
        let input = MemberEditInput {
            name: text_or_default(self.name),
            email: text_or_default(self.email),
            phone: text_or_default(self.phone),
            address: text_or_default(self.address),
            dob: text_or_default(self.dob),
            occupation: text_or_default(self.occupation),
            membership_type: text_or_default(self.membership_type),
        };
        Ok((input, photo))
    }
}

/// Apply admin edits to a member.
///
/// The member must exist before a replacement photo is written, so an
/// unknown id never leaves a file behind. A replacement photo is stored
/// whenever a filename is present; unlike registration, the extension is
/// not checked here, and the previous photo file is left on disk. Both
/// behaviours are long-standing and callers rely on the stored path simply
/// being replaced.
pub async fn member_update(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
    form: MultipartForm<MemberEditForm>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let member_id = id.into_inner();
    let (input, photo) = form.into_inner().into_parts()?;
    let changes = match input.validate() {
        Ok(changes) => changes,
        Err(errors) => {
            return Ok(
                HttpResponse::BadRequest().json(json!({ "errors": errors, "form": input }))
            );
        }
    };

    if state.members.find_by_id(member_id).await?.is_none() {
        return Err(Error::not_found("member not found").into());
    }

    let photo_path = match photo {
        Some((file_name, payload)) => Some(
            state
                .uploads
                .store(&file_name, &payload)
                .await
                .map_err(|err| Error::internal(format!("failed to store photo: {err}")))?,
        ),
        None => None,
    };

    match state
        .members
        .update(member_id, &changes, photo_path.as_deref())
        .await
    {
        Ok(Some(_)) => Ok(see_other("/admin/members")),
        Ok(None) => Err(Error::not_found("member not found").into()),
        Err(MemberPersistenceError::DuplicateEmail) => Ok(HttpResponse::BadRequest().json(json!({
            "errors": { "email": "email is already registered" },
            "form": input,
        }))),
        Err(err) => Err(err.into()),
    }
}

/// Deleting a missing member is a no-op; the redirect is unconditional.
pub async fn member_delete(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    state.members.delete(id.into_inner()).await?;
    Ok(see_other("/admin/members"))
}

/// Printable membership card payload.
pub async fn member_card(
    state: web::Data<HttpState>,
    session: SessionContext,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    session.require_role(ADMIN_ROLE)?;
    let member = state
        .members
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("member not found"))?;
    Ok(HttpResponse::Ok().json(json!({ "member": member })))
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, HttpResponse, test, web};
    use chrono::NaiveDate;
    use serde_json::Value;

    use super::*;
    use crate::domain::Principal;
    use crate::domain::activity::ActivityDraft;
    use crate::domain::member::NewMember;
    use crate::domain::news::NewsDraft;
    use crate::domain::ports::{ActivityRepository, MemberRepository, NewsRepository};
    use crate::inbound::http::test_utils::{TestState, test_session_middleware};

    const BOUNDARY: &str = "test-boundary-a1f9";

    fn admin_app(
        state: &TestState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
                actix_web::dev::ServiceRequest,
                Config = (),
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
                InitError = (),
            > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(state.http_state()))
            .wrap(test_session_middleware())
            .route(
                "/test-login",
                web::get().to(|session: SessionContext| async move {
                    let principal = Principal {
                        id: 1,
                        username: "admin".into(),
                        role: ADMIN_ROLE.into(),
                    };
                    session.persist_principal(&principal)?;
                    Ok::<_, crate::inbound::http::ApiError>(HttpResponse::Ok())
                }),
            )
            .route("/admin", web::get().to(dashboard))
            .route("/admin/activities", web::get().to(activities_list))
            .route("/admin/activities/new", web::post().to(activity_create))
            .route(
                "/admin/activities/{id}/edit",
                web::get().to(activity_edit_form),
            )
            .route(
                "/admin/activities/{id}/edit",
                web::post().to(activity_update),
            )
            .route(
                "/admin/activities/{id}/delete",
                web::post().to(activity_delete),
            )
            .route("/admin/news", web::get().to(news_list))
            .route("/admin/news/new", web::post().to(news_create))
            .route("/admin/news/{id}/edit", web::get().to(news_edit_form))
            .route("/admin/news/{id}/edit", web::post().to(news_update))
            .route("/admin/news/{id}/delete", web::post().to(news_delete))
            .route("/admin/members", web::get().to(members_list))
            .route("/admin/members/{id}/edit", web::get().to(member_edit_form))
            .route("/admin/members/{id}/edit", web::post().to(member_update))
            .route("/admin/members/{id}/delete", web::post().to(member_delete))
            .route("/admin/members/{id}/card", web::get().to(member_card))
    }

    async fn admin_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let res = test::call_service(
            app,
            test::TestRequest::get().uri("/test-login").to_request(),
        )
        .await;
        assert!(res.status().is_success());
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned()
    }

    fn member(name: &str, email: &str) -> NewMember {
        NewMember {
            name: name.into(),
            email: email.into(),
            phone: "0812".into(),
            address: None,
            dob: Some(NaiveDate::from_ymd_opt(1990, 5, 20).expect("valid date")),
            occupation: None,
            membership_type: "Reguler".into(),
            photo: Some("static/img/uploads/old.png".into()),
        }
    }

    fn edit_fields<'a>(email: &'a str, dob: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("name", "Budi Santoso"),
            ("email", email),
            ("phone", "0812000111"),
            ("dob", dob),
        ]
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, payload)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; \
                     filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(payload);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(
        uri: &str,
        cookie: actix_web::cookie::Cookie<'static>,
        body: Vec<u8>,
    ) -> actix_http::Request {
        test::TestRequest::post()
            .uri(uri)
            .cookie(cookie)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request()
    }

    #[actix_web::test]
    async fn anonymous_admin_requests_are_forbidden_without_side_effects() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/admin").to_request()).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/news/new")
                .set_form(NewsInput {
                    title: "Pengumuman".into(),
                    body: "Isi.".into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert!(state.news.rows().is_empty());
    }

    #[actix_web::test]
    async fn dashboard_reports_counts() {
        let state = TestState::new();
        state
            .news
            .insert(&NewsDraft {
                title: "Berita".into(),
                body: "Isi".into(),
            })
            .await
            .expect("insert news");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/admin")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["members"], 0);
        assert_eq!(payload["news"], 1);
    }

    #[actix_web::test]
    async fn activity_create_redirects_and_persists() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/activities/new")
                .cookie(cookie)
                .set_form(ActivityInput {
                    title: "Rapat".into(),
                    description: "Agenda.".into(),
                    date: "2025-09-01".into(),
                    location: "Balai".into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get("Location").expect("location header"),
            "/admin/activities"
        );
        assert_eq!(state.activities.rows().len(), 1);
    }

    #[actix_web::test]
    async fn activity_create_rejects_malformed_dates_inline() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/activities/new")
                .cookie(cookie)
                .set_form(ActivityInput {
                    title: "Rapat".into(),
                    description: "Agenda.".into(),
                    date: "01-09-2025".into(),
                    location: String::new(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["errors"]["date"], "date must use the YYYY-MM-DD format");
        assert_eq!(payload["form"]["date"], "01-09-2025");
        assert!(state.activities.rows().is_empty());
    }

    #[actix_web::test]
    async fn editing_a_missing_activity_is_not_found() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/activities/42/edit")
                .cookie(cookie)
                .set_form(ActivityInput {
                    title: "Rapat".into(),
                    description: "Agenda.".into(),
                    date: "2025-09-01".into(),
                    location: String::new(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleting_a_missing_row_still_redirects() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        for uri in [
            "/admin/activities/42/delete",
            "/admin/news/42/delete",
            "/admin/members/42/delete",
        ] {
            let res = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri(uri)
                    .cookie(cookie.clone())
                    .to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::SEE_OTHER, "{uri}");
        }
    }

    #[actix_web::test]
    async fn news_update_replaces_the_row() {
        let state = TestState::new();
        state
            .news
            .insert(&NewsDraft {
                title: "Lama".into(),
                body: "Isi lama".into(),
            })
            .await
            .expect("insert news");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/news/1/edit")
                .cookie(cookie)
                .set_form(NewsInput {
                    title: " Baru ".into(),
                    body: "Isi baru".into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.news.rows()[0].title, "Baru");
    }

    #[actix_web::test]
    async fn member_edit_malformed_dob_is_an_inline_error() {
        let state = TestState::new();
        state
            .members
            .insert(&member("Budi", "budi@mail.com"))
            .await
            .expect("insert member");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(&edit_fields("budi@mail.com", "20-05-1990"), None);
        let res =
            test::call_service(&app, multipart_request("/admin/members/1/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["errors"]["dob"], "date must use the YYYY-MM-DD format");
        assert_eq!(payload["form"]["dob"], "20-05-1990");
        assert_eq!(state.members.rows()[0].name, "Budi");
    }

    #[actix_web::test]
    async fn member_edit_blank_dob_keeps_the_stored_date() {
        let state = TestState::new();
        state
            .members
            .insert(&member("Budi", "budi@mail.com"))
            .await
            .expect("insert member");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(&edit_fields("budi@mail.com", ""), None);
        let res =
            test::call_service(&app, multipart_request("/admin/members/1/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        let row = &state.members.rows()[0];
        assert_eq!(row.name, "Budi Santoso");
        assert_eq!(
            row.dob,
            Some(NaiveDate::from_ymd_opt(1990, 5, 20).expect("valid date"))
        );
    }

    #[actix_web::test]
    async fn member_edit_blank_required_fields_are_inline_errors() {
        let state = TestState::new();
        state
            .members
            .insert(&member("Budi", "budi@mail.com"))
            .await
            .expect("insert member");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(&[("name", "  "), ("email", ""), ("phone", "")], None);
        let res =
            test::call_service(&app, multipart_request("/admin/members/1/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["errors"]["name"], "name is required");
        assert_eq!(payload["errors"]["email"], "email is required");
        assert_eq!(payload["errors"]["phone"], "phone is required");
        let row = &state.members.rows()[0];
        assert_eq!(row.name, "Budi");
        assert_eq!(row.email, "budi@mail.com");
    }

    #[actix_web::test]
    async fn member_photo_replace_skips_the_extension_check() {
        let state = TestState::new();
        state
            .members
            .insert(&member("Budi", "budi@mail.com"))
            .await
            .expect("insert member");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(
            &edit_fields("budi@mail.com", ""),
            Some(("scan.pdf", b"%PDF-1.4")),
        );
        let res =
            test::call_service(&app, multipart_request("/admin/members/1/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.uploads.stored_names(), vec!["scan.pdf".to_owned()]);
        assert_eq!(
            state.members.rows()[0].photo.as_deref(),
            Some("static/img/uploads/scan.pdf")
        );
    }

    #[actix_web::test]
    async fn member_edit_duplicate_email_is_an_email_field_error() {
        let state = TestState::new();
        state
            .members
            .insert(&member("Budi", "budi@mail.com"))
            .await
            .expect("insert member");
        state
            .members
            .insert(&member("Siti", "siti@mail.com"))
            .await
            .expect("insert member");
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(&edit_fields("siti@mail.com", ""), None);
        let res =
            test::call_service(&app, multipart_request("/admin/members/1/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = test::read_body_json(res).await;
        assert_eq!(payload["errors"]["email"], "email is already registered");
        assert_eq!(state.members.rows()[0].email, "budi@mail.com");
    }

    #[actix_web::test]
    async fn member_card_is_not_found_for_missing_ids() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/admin/members/9/card")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn member_update_missing_id_is_not_found() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(&edit_fields("budi@mail.com", ""), None);
        let res =
            test::call_service(&app, multipart_request("/admin/members/7/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn member_update_on_a_missing_id_stores_no_photo() {
        let state = TestState::new();
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let body = multipart_body(
            &edit_fields("budi@mail.com", ""),
            Some(("baru.png", b"\x89PNG fake payload")),
        );
        let res =
            test::call_service(&app, multipart_request("/admin/members/7/edit", cookie, body))
                .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(state.uploads.stored_names().is_empty());
    }

    #[actix_web::test]
    async fn admin_activities_list_is_date_descending() {
        let state = TestState::new();
        for (title, when) in [
            ("Awal", NaiveDate::from_ymd_opt(2025, 8, 1).expect("valid date")),
            ("Akhir", NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date")),
        ] {
            state
                .activities
                .insert(&ActivityDraft {
                    title: title.into(),
                    description: "agenda".into(),
                    date: when,
                    location: None,
                })
                .await
                .expect("insert activity");
        }
        let app = test::init_service(admin_app(&state)).await;
        let cookie = admin_cookie(&app).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/admin/activities")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let payload: Value = test::read_body_json(res).await;
        let titles: Vec<&str> = payload
            .as_array()
            .expect("activities array")
            .iter()
            .map(|row| row["title"].as_str().expect("title"))
            .collect();
        assert_eq!(titles, ["Akhir", "Awal"]);
    }
}
