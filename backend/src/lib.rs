//! Cooperative member-management backend.
//!
//! Public registration and directory endpoints, plus a session-gated admin
//! back-office for members, activities, and news. Layout is hexagonal: the
//! `domain` module owns entities, workflows, and ports; `inbound` and
//! `outbound` adapt them to actix-web and PostgreSQL.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
pub mod server;

pub use middleware::Trace;
