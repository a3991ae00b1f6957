//! Public read-only endpoints: home, activities, news, and member directory.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::Error;
use crate::inbound::http::{ApiResult, HttpState};

/// Number of news articles and activities shown on the home payload.
const HOME_SECTION_LIMIT: i64 = 3;

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Home payload: the newest articles and the next scheduled activities.
pub async fn home(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let news = state.news.latest(HOME_SECTION_LIMIT).await?;
    let activities = state.activities.upcoming(HOME_SECTION_LIMIT).await?;
    Ok(HttpResponse::Ok().json(json!({ "news": news, "activities": activities })))
}

pub async fn activities_list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let activities = state.activities.list().await?;
    Ok(HttpResponse::Ok().json(activities))
}

pub async fn activity_detail(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let activity = state
        .activities
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("activity not found"))?;
    Ok(HttpResponse::Ok().json(activity))
}

pub async fn news_list(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let news = state.news.list().await?;
    Ok(HttpResponse::Ok().json(news))
}

pub async fn news_detail(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let article = state
        .news
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("news article not found"))?;
    Ok(HttpResponse::Ok().json(article))
}

/// Member directory with an optional case-insensitive name filter.
pub async fn members_directory(
    state: web::Data<HttpState>,
    query: web::Query<DirectoryQuery>,
) -> ApiResult<HttpResponse> {
    let needle = query.q.as_deref().unwrap_or_default();
    let members = state.members.search(needle).await?;
    Ok(HttpResponse::Ok().json(json!({ "q": needle, "members": members })))
}

pub async fn member_detail(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let member = state
        .members
        .find_by_id(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("member not found"))?;
    Ok(HttpResponse::Ok().json(member))
}
