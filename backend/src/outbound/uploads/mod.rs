//! File storage adapters.

mod filesystem;

pub use filesystem::{FilesystemUploadStore, PUBLIC_UPLOAD_PREFIX};
