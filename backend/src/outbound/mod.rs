//! Driven adapters: persistence and file storage.

pub mod persistence;
pub mod uploads;
