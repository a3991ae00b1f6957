//! Filesystem adapter for the upload-store port.
//!
//! Files land in a single flat directory opened through a `cap_std`
//! directory handle, so writes cannot escape the configured root even with a
//! hostile filename. Collision avoidance relies on the unix-seconds prefix
//! only.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};

use crate::domain::uploads::{UploadError, UploadStore, sanitize_file_name};

/// Public URL prefix under which stored files are served.
pub const PUBLIC_UPLOAD_PREFIX: &str = "static/img/uploads";

/// Upload store writing into a local directory.
#[derive(Clone)]
pub struct FilesystemUploadStore {
    root: PathBuf,
}

impl FilesystemUploadStore {
    /// Create a store rooted at `root`. The directory is created on first
    /// write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn open_root(&self, file_name: &str) -> Result<Dir, UploadError> {
        Dir::create_ambient_dir_all(&self.root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(&self.root, ambient_authority()))
            .map_err(|source| UploadError::Io {
                name: file_name.to_owned(),
                source,
            })
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

#[async_trait]
impl UploadStore for FilesystemUploadStore {
    async fn store(&self, file_name: &str, payload: &[u8]) -> Result<String, UploadError> {
        let stored_name = format!("{}_{}", unix_seconds(), sanitize_file_name(file_name));
        let dir = self.open_root(&stored_name)?;
        dir.write(Path::new(&stored_name), payload)
            .map_err(|source| UploadError::Io {
                name: stored_name.clone(),
                source,
            })?;
        Ok(format!("{PUBLIC_UPLOAD_PREFIX}/{stored_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[tokio::test]
    async fn stores_the_payload_and_returns_the_public_path() {
        let dir = TempDir::new().expect("temp dir");
        let store = FilesystemUploadStore::new(dir.path());

        let path = store
            .store("photo.png", b"payload")
            .await
            .expect("store succeeds");

        let stored_name = path
            .strip_prefix("static/img/uploads/")
            .expect("public prefix");
        assert!(stored_name.ends_with("_photo.png"));
        let on_disk = std::fs::read(dir.path().join(stored_name)).expect("file written");
        assert_eq!(on_disk, b"payload");
    }

    #[tokio::test]
    async fn creates_the_upload_directory_on_first_write() {
        let dir = TempDir::new().expect("temp dir");
        let nested = dir.path().join("static").join("img").join("uploads");
        let store = FilesystemUploadStore::new(&nested);

        store
            .store("photo.jpg", b"bytes")
            .await
            .expect("store succeeds");

        assert!(nested.is_dir());
    }

    #[rstest]
    #[case("../../etc/passwd", "_passwd")]
    #[case("foto anggota.jpg", "_foto_anggota.jpg")]
    #[tokio::test]
    async fn hostile_names_are_sanitized_before_writing(
        #[case] raw: &str,
        #[case] suffix: &str,
    ) {
        let dir = TempDir::new().expect("temp dir");
        let store = FilesystemUploadStore::new(dir.path());

        let path = store.store(raw, b"bytes").await.expect("store succeeds");

        assert!(path.ends_with(suffix), "{path}");
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("readable dir")
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
