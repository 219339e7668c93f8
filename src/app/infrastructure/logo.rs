use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::app::domain::view_state::{LogoFormat, LogoRef};
use crate::app::infrastructure::error::LogoError;

/// Default upper bound for logo files (5 MiB).
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Turns a file or an in-memory upload into a [`LogoRef`].
///
/// A failed load never touches the view state: the caller attaches the
/// returned handle only on success.
pub trait LogoLoader {
    fn load_path(&self, path: &Path) -> Result<LogoRef, LogoError>;
    fn load_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<LogoRef, LogoError>;
}

fn sniff_format(bytes: &[u8]) -> Option<LogoFormat> {
    if bytes.starts_with(&PNG_MAGIC) {
        Some(LogoFormat::Png)
    } else if bytes.starts_with(&JPEG_MAGIC) {
        Some(LogoFormat::Jpeg)
    } else {
        None
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Validates PNG/JPEG logos read from disk or received as bytes.
#[derive(Debug, Clone)]
pub struct FileLogoLoader {
    max_bytes: usize,
}

impl Default for FileLogoLoader {
    fn default() -> Self {
        Self::new(MAX_LOGO_BYTES)
    }
}

impl FileLogoLoader {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

impl LogoLoader for FileLogoLoader {
    fn load_path(&self, path: &Path) -> Result<LogoRef, LogoError> {
        let bytes = fs::read(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "logo unreadable");
            LogoError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("logo");
        self.load_bytes(file_name, bytes)
    }

    fn load_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<LogoRef, LogoError> {
        let ext = extension_of(file_name).unwrap_or_default();
        if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(LogoError::Unsupported(file_name.to_string()));
        }
        if bytes.is_empty() {
            return Err(LogoError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(LogoError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }
        let format = sniff_format(&bytes).ok_or_else(|| LogoError::Unsupported(file_name.to_string()))?;

        let digest = hex::encode(Sha256::digest(&bytes));
        let id = digest[..12].to_string();
        info!(logo = %id, file = file_name, size = bytes.len(), "logo loaded");

        Ok(LogoRef::new(id, file_name.to_string(), format, bytes))
    }
}
