//! Upload handling: extension allow-list, filename sanitisation, and the
//! storage port implemented by the filesystem adapter.

use async_trait::async_trait;

/// Image extensions accepted for member photos.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// An uploaded file captured by the inbound adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub payload: Vec<u8>,
}

/// Errors raised by upload storage.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Writing the file (or creating its directory) failed.
    #[error("failed to store upload {name}: {source}")]
    Io {
        /// Sanitised file name being written.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Storage port for uploaded images.
///
/// Implementations write the payload under the configured upload directory
/// and return the path, relative to the static-asset root, to record on the
/// entity. Callers decide whether to invoke `store` at all; a missing file or
/// empty filename never reaches the port.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persist `payload` under a collision-resistant name derived from
    /// `file_name`.
    async fn store(&self, file_name: &str, payload: &[u8]) -> Result<String, UploadError>;
}

/// Whether `file_name` carries an allow-listed image extension.
///
/// The check is a case-insensitive comparison of the suffix after the last
/// `.`; a name without a dot has no extension and is rejected.
pub fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reduce a client-supplied filename to a filesystem-safe form.
///
/// Path components before the final separator are discarded and remaining
/// characters outside `[A-Za-z0-9._-]` become underscores. An empty result
/// falls back to `upload`.
pub fn sanitize_file_name(file_name: &str) -> String {
    let last_component = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let sanitized: String = last_component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = sanitized.trim_matches(['.', '_']).to_owned();
    if trimmed.is_empty() {
        "upload".to_owned()
    } else {
        trimmed
    }
}
