//! Image upload constraints.

use std::io;
use std::path::{Path, PathBuf};

/// Maximum size of an uploaded request body.
pub const MAX_CONTENT_LENGTH: usize = 5 * 1024 * 1024;

/// Supported image file extensions.
pub const UPLOAD_EXTENSIONS: [&str; 3] = [".jpg", ".png", ".gif"];

/// Instance-local directory uploads are written to.
const UPLOAD_DIR: &str = "instance/uploads";

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub max_content_length: usize,
    pub allowed_extensions: Vec<String>,
    pub upload_dir: PathBuf,
}

impl UploadConfig {
    pub fn new() -> Self {
        Self {
            max_content_length: MAX_CONTENT_LENGTH,
            allowed_extensions: UPLOAD_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            upload_dir: PathBuf::from(UPLOAD_DIR),
        }
    }

    /// Creates the upload directory if it does not exist yet.
    pub fn ensure_upload_dir(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)
    }

    /// Whether `filename` carries one of the allowed image extensions.
    pub fn is_allowed(&self, filename: &str) -> bool {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()));

        match ext {
            Some(ext) => self.allowed_extensions.iter().any(|allowed| *allowed == ext),
            None => false,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new()
    }
}
