//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters translating between Diesel row structs and domain types.
//! Row structs (`models.rs`) and table definitions (`schema.rs`) are internal
//! implementation details, never exposed to the domain. Connections come
//! from a `bb8` pool with native async support via `diesel-async`, and every
//! database failure is mapped to the owning port's persistence error type.

mod diesel_activity_repository;
mod diesel_error_mapping;
mod diesel_member_repository;
mod diesel_news_repository;
mod diesel_user_repository;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_activity_repository::DieselActivityRepository;
pub use diesel_member_repository::DieselMemberRepository;
pub use diesel_news_repository::DieselNewsRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
