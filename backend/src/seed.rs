//! Idempotent startup initialization.
//!
//! Runs embedded migrations, makes sure the upload directory exists, creates
//! the bootstrap admin account, and inserts demo content into empty tables.
//! Every step is safe to repeat; restarting the server never duplicates
//! rows.

use cap_std::{ambient_authority, fs::Dir};
use chrono::NaiveDate;
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::info;

use crate::domain::Error as DomainError;
use crate::domain::activity::ActivityDraft;
use crate::domain::auth::hash_password;
use crate::domain::news::NewsDraft;
use crate::domain::ports::{
    ActivityPersistenceError, ActivityRepository, NewsPersistenceError, NewsRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::user::{ADMIN_ROLE, NewUser};
use crate::inbound::http::HttpState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors returned while executing startup initialization.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Running the embedded migrations failed.
    #[error("failed to run migrations: {message}")]
    Migration { message: String },
    /// The upload directory could not be created.
    #[error("failed to create upload directory {path}: {source}")]
    UploadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Hashing the bootstrap admin password failed.
    #[error("failed to hash bootstrap password: {0}")]
    PasswordHash(DomainError),
    /// Bootstrap user persistence failed.
    #[error(transparent)]
    User(#[from] UserPersistenceError),
    /// Demo activity persistence failed.
    #[error(transparent)]
    Activity(#[from] ActivityPersistenceError),
    /// Demo news persistence failed.
    #[error(transparent)]
    News(#[from] NewsPersistenceError),
}

/// Run all startup initialization steps in order.
pub async fn seed_on_startup(
    database_url: &str,
    upload_dir: &str,
    admin_user: &str,
    admin_pass: &str,
    state: &HttpState,
) -> Result<(), SeedError> {
    run_migrations(database_url).await?;
    ensure_upload_dir(upload_dir)?;
    ensure_bootstrap_admin(state.users.as_ref(), admin_user, admin_pass).await?;
    seed_demo_content(state.activities.as_ref(), state.news.as_ref()).await?;
    Ok(())
}

/// Apply pending embedded migrations.
///
/// Migrations use a synchronous connection on a blocking thread; they run
/// once at startup, before the server accepts traffic.
pub async fn run_migrations(database_url: &str) -> Result<(), SeedError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)
            .map_err(|err| format!("connection failed: {err}"))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.len())
            .map_err(|err| err.to_string())
    })
    .await
    .map_err(|err| SeedError::Migration {
        message: format!("migration task panicked: {err}"),
    })?
    .map_err(|message| SeedError::Migration { message })?;

    info!(applied, "database migrations up to date");
    Ok(())
}

/// Create the upload directory if it does not exist yet.
pub fn ensure_upload_dir(path: &str) -> Result<(), SeedError> {
    Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|source| {
        SeedError::UploadDir {
            path: path.to_owned(),
            source,
        }
    })
}

/// Insert the bootstrap admin account unless the username already exists.
pub async fn ensure_bootstrap_admin(
    users: &dyn UserRepository,
    username: &str,
    password: &str,
) -> Result<(), SeedError> {
    if users.find_by_username(username).await?.is_some() {
        return Ok(());
    }
    let password_hash = hash_password(password).map_err(SeedError::PasswordHash)?;
    let created = users
        .insert(&NewUser {
            username: username.to_owned(),
            password_hash,
            role: ADMIN_ROLE.to_owned(),
        })
        .await?;
    info!(username = %created.username, "bootstrap admin account created");
    Ok(())
}

fn demo_activities() -> Vec<ActivityDraft> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");
    vec![
        ActivityDraft {
            title: "Rapat Anggota Tahunan".to_owned(),
            description: "Laporan keuangan dan rencana kerja tahun berjalan.".to_owned(),
            date: date(2025, 3, 15),
            location: Some("Aula Koperasi".to_owned()),
        },
        ActivityDraft {
            title: "Pelatihan UMKM".to_owned(),
            description: "Workshop pemasaran digital untuk anggota pelaku usaha.".to_owned(),
            date: date(2025, 4, 10),
            location: Some("Ruang Serbaguna".to_owned()),
        },
        ActivityDraft {
            title: "Bazar Produk Anggota".to_owned(),
            description: "Pameran dan penjualan produk unggulan anggota.".to_owned(),
            date: date(2025, 5, 20),
            location: None,
        },
    ]
}

fn demo_news() -> Vec<NewsDraft> {
    vec![
        NewsDraft {
            title: "Pembagian SHU Tahun Buku Lalu".to_owned(),
            body: "Sisa hasil usaha telah dibagikan kepada seluruh anggota aktif.".to_owned(),
        },
        NewsDraft {
            title: "Kerja Sama dengan Bank Lokal".to_owned(),
            body: "Akses permodalan baru bagi anggota pelaku UMKM.".to_owned(),
        },
    ]
}

/// Insert demo rows, but only into tables that are still empty.
pub async fn seed_demo_content(
    activities: &dyn ActivityRepository,
    news: &dyn NewsRepository,
) -> Result<(), SeedError> {
    if activities.count().await? == 0 {
        for draft in demo_activities() {
            activities.insert(&draft).await?;
        }
        info!("demo activities inserted");
    }
    if news.count().await? == 0 {
        for draft in demo_news() {
            news.insert(&draft).await?;
        }
        info!("demo news inserted");
    }
    Ok(())
}
