//! Driven ports implemented by the persistence adapters.
//!
//! Handlers and workflows depend on these traits only, so tests substitute
//! in-memory doubles instead of wiring a database.

mod activity_repository;
mod member_repository;
mod news_repository;
mod user_repository;

pub use activity_repository::{ActivityPersistenceError, ActivityRepository};
pub use member_repository::{MemberPersistenceError, MemberRepository};
pub use news_repository::{NewsPersistenceError, NewsRepository};
pub use user_repository::{UserPersistenceError, UserRepository};
