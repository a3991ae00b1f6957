//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::activity::{Activity, ActivityDraft};
use crate::domain::member::{Member, MemberChanges, NewMember};
use crate::domain::news::{News, NewsDraft};
use crate::domain::user::{NewUser, User};

use super::schema::{activities, members, news, users};

/// Row struct for reading from the members table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MemberRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub membership_type: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            dob: row.dob,
            occupation: row.occupation,
            membership_type: row.membership_type,
            photo: row.photo,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating new member rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = members)]
pub(crate) struct NewMemberRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: Option<&'a str>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<&'a str>,
    pub membership_type: &'a str,
    pub photo: Option<&'a str>,
}

impl<'a> From<&'a NewMember> for NewMemberRow<'a> {
    fn from(member: &'a NewMember) -> Self {
        Self {
            name: &member.name,
            email: &member.email,
            phone: &member.phone,
            address: member.address.as_deref(),
            dob: member.dob,
            occupation: member.occupation.as_deref(),
            membership_type: &member.membership_type,
            photo: member.photo.as_deref(),
        }
    }
}

/// Changeset for admin member edits.
///
/// `dob: None` and `photo: None` mean "leave the stored value unchanged";
/// `AsChangeset` skips `None` fields, which is exactly the edit-form
/// semantics.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = members)]
pub(crate) struct MemberChangesRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: Option<Option<&'a str>>,
    pub dob: Option<NaiveDate>,
    pub occupation: Option<Option<&'a str>>,
    pub membership_type: &'a str,
    pub photo: Option<&'a str>,
}

impl<'a> MemberChangesRow<'a> {
    pub fn new(changes: &'a MemberChanges, photo: Option<&'a str>) -> Self {
        Self {
            name: &changes.name,
            email: &changes.email,
            phone: &changes.phone,
            address: Some(changes.address.as_deref()),
            dob: changes.dob,
            occupation: Some(changes.occupation.as_deref()),
            membership_type: &changes.membership_type,
            photo,
        }
    }
}

/// Row struct for reading from the activities table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ActivityRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            date: row.date,
            location: row.location,
            created_at: row.created_at,
        }
    }
}

/// Insertable and changeset struct for activity rows.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = activities)]
pub(crate) struct ActivityDraftRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date: NaiveDate,
    pub location: Option<&'a str>,
}

impl<'a> From<&'a ActivityDraft> for ActivityDraftRow<'a> {
    fn from(draft: &'a ActivityDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            date: draft.date,
            location: draft.location.as_deref(),
        }
    }
}

/// Row struct for reading from the news table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = news)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NewsRow {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<NewsRow> for News {
    fn from(row: NewsRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            created_at: row.created_at,
        }
    }
}

/// Insertable and changeset struct for news rows.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = news)]
pub(crate) struct NewsDraftRow<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> From<&'a NewsDraft> for NewsDraftRow<'a> {
    fn from(draft: &'a NewsDraft) -> Self {
        Self {
            title: &draft.title,
            body: &draft.body,
        }
    }
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for creating new user rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            username: &user.username,
            password_hash: &user.password_hash,
            role: &user.role,
        }
    }
}
