//! Shared fixtures for HTTP handler tests.
//!
//! In-memory repositories mirror the ordering and uniqueness guarantees of
//! the Postgres adapters so handler tests exercise real workflows without a
//! database.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI32, Ordering},
};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::activity::{Activity, ActivityDraft};
use crate::domain::member::{Member, MemberChanges, NewMember};
use crate::domain::news::{News, NewsDraft};
use crate::domain::ports::{
    ActivityPersistenceError, ActivityRepository, MemberPersistenceError, MemberRepository,
    NewsPersistenceError, NewsRepository, UserPersistenceError, UserRepository,
};
use crate::domain::uploads::{UploadError, UploadStore, sanitize_file_name};
use crate::domain::user::{NewUser, User};
use crate::inbound::http::HttpState;

/// Cookie session middleware with a throwaway key, matching production
/// settings apart from `cookie_secure` so plain-HTTP test clients work.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

#[derive(Default)]
pub struct InMemoryMembers {
    rows: Mutex<Vec<Member>>,
    next_id: AtomicI32,
}

impl InMemoryMembers {
    pub fn rows(&self) -> Vec<Member> {
        self.rows.lock().expect("members lock").clone()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMembers {
    async fn insert(&self, member: &NewMember) -> Result<Member, MemberPersistenceError> {
        let mut rows = self.rows.lock().expect("members lock");
        if rows
            .iter()
            .any(|row| row.email.eq_ignore_ascii_case(&member.email))
        {
            return Err(MemberPersistenceError::DuplicateEmail);
        }
        let created = Member {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            address: member.address.clone(),
            dob: member.dob,
            occupation: member.occupation.clone(),
            membership_type: member.membership_type.clone(),
            photo: member.photo.clone(),
            created_at: Utc::now(),
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, MemberPersistenceError> {
        let rows = self.rows.lock().expect("members lock");
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Member>, MemberPersistenceError> {
        let mut rows = self.rows.lock().expect("members lock").clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn search(&self, query: &str) -> Result<Vec<Member>, MemberPersistenceError> {
        let needle = query.trim().to_lowercase();
        let mut rows: Vec<Member> = self
            .rows
            .lock()
            .expect("members lock")
            .iter()
            .filter(|row| needle.is_empty() || row.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn update(
        &self,
        id: i32,
        changes: &MemberChanges,
        photo: Option<&str>,
    ) -> Result<Option<Member>, MemberPersistenceError> {
        let mut rows = self.rows.lock().expect("members lock");
        if rows
            .iter()
            .any(|row| row.id != id && row.email.eq_ignore_ascii_case(&changes.email))
        {
            return Err(MemberPersistenceError::DuplicateEmail);
        }
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        row.name = changes.name.clone();
        row.email = changes.email.clone();
        row.phone = changes.phone.clone();
        row.address = changes.address.clone();
        if let Some(dob) = changes.dob {
            row.dob = Some(dob);
        }
        row.occupation = changes.occupation.clone();
        row.membership_type = changes.membership_type.clone();
        if let Some(photo) = photo {
            row.photo = Some(photo.to_owned());
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<(), MemberPersistenceError> {
        let mut rows = self.rows.lock().expect("members lock");
        rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, MemberPersistenceError> {
        Ok(self.rows.lock().expect("members lock").len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryActivities {
    rows: Mutex<Vec<Activity>>,
    next_id: AtomicI32,
}

impl InMemoryActivities {
    pub fn rows(&self) -> Vec<Activity> {
        self.rows.lock().expect("activities lock").clone()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivities {
    async fn insert(&self, draft: &ActivityDraft) -> Result<Activity, ActivityPersistenceError> {
        let created = Activity {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date,
            location: draft.location.clone(),
            created_at: Utc::now(),
        };
        self.rows
            .lock()
            .expect("activities lock")
            .push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, ActivityPersistenceError> {
        let rows = self.rows.lock().expect("activities lock");
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Activity>, ActivityPersistenceError> {
        let mut rows = self.rows.lock().expect("activities lock").clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn upcoming(&self, limit: i64) -> Result<Vec<Activity>, ActivityPersistenceError> {
        let mut rows = self.rows.lock().expect("activities lock").clone();
        rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(rows)
    }

    async fn update(
        &self,
        id: i32,
        draft: &ActivityDraft,
    ) -> Result<Option<Activity>, ActivityPersistenceError> {
        let mut rows = self.rows.lock().expect("activities lock");
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        row.title = draft.title.clone();
        row.description = draft.description.clone();
        row.date = draft.date;
        row.location = draft.location.clone();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<(), ActivityPersistenceError> {
        let mut rows = self.rows.lock().expect("activities lock");
        rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, ActivityPersistenceError> {
        Ok(self.rows.lock().expect("activities lock").len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryNews {
    rows: Mutex<Vec<News>>,
    next_id: AtomicI32,
}

impl InMemoryNews {
    pub fn rows(&self) -> Vec<News> {
        self.rows.lock().expect("news lock").clone()
    }
}

#[async_trait]
impl NewsRepository for InMemoryNews {
    async fn insert(&self, draft: &NewsDraft) -> Result<News, NewsPersistenceError> {
        let created = News {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: draft.title.clone(),
            body: draft.body.clone(),
            created_at: Utc::now(),
        };
        self.rows.lock().expect("news lock").push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, NewsPersistenceError> {
        let rows = self.rows.lock().expect("news lock");
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<News>, NewsPersistenceError> {
        let mut rows = self.rows.lock().expect("news lock").clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn latest(&self, limit: i64) -> Result<Vec<News>, NewsPersistenceError> {
        let mut rows = self.list().await?;
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(rows)
    }

    async fn update(
        &self,
        id: i32,
        draft: &NewsDraft,
    ) -> Result<Option<News>, NewsPersistenceError> {
        let mut rows = self.rows.lock().expect("news lock");
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };
        row.title = draft.title.clone();
        row.body = draft.body.clone();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<(), NewsPersistenceError> {
        let mut rows = self.rows.lock().expect("news lock");
        rows.retain(|row| row.id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, NewsPersistenceError> {
        Ok(self.rows.lock().expect("news lock").len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUsers {
    pub fn rows(&self) -> Vec<User> {
        self.rows.lock().expect("users lock").clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let rows = self.rows.lock().expect("users lock");
        Ok(rows.iter().find(|row| row.username == username).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let created = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role.clone(),
            created_at: Utc::now(),
        };
        self.rows.lock().expect("users lock").push(created.clone());
        Ok(created)
    }
}

/// Upload double recording stored names without touching the filesystem.
#[derive(Default)]
pub struct MemoryUploads {
    stored: Mutex<Vec<String>>,
}

impl MemoryUploads {
    pub fn stored_names(&self) -> Vec<String> {
        self.stored.lock().expect("uploads lock").clone()
    }
}

#[async_trait]
impl UploadStore for MemoryUploads {
    async fn store(&self, file_name: &str, _payload: &[u8]) -> Result<String, UploadError> {
        let name = sanitize_file_name(file_name);
        self.stored
            .lock()
            .expect("uploads lock")
            .push(name.clone());
        Ok(format!("static/img/uploads/{name}"))
    }
}

/// Handles for asserting against the state behind a [`TestState`] app.
pub struct TestState {
    pub members: Arc<InMemoryMembers>,
    pub activities: Arc<InMemoryActivities>,
    pub news: Arc<InMemoryNews>,
    pub users: Arc<InMemoryUsers>,
    pub uploads: Arc<MemoryUploads>,
}

impl TestState {
    pub fn new() -> Self {
        Self {
            members: Arc::new(InMemoryMembers::default()),
            activities: Arc::new(InMemoryActivities::default()),
            news: Arc::new(InMemoryNews::default()),
            users: Arc::new(InMemoryUsers::default()),
            uploads: Arc::new(MemoryUploads::default()),
        }
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(
            self.members.clone(),
            self.activities.clone(),
            self.news.clone(),
            self.users.clone(),
            self.uploads.clone(),
        )
    }
}

impl Default for TestState {
    fn default() -> Self {
        Self::new()
    }
}
