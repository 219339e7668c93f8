use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::domain::document_record::{DocumentRecord, DocumentSummary};
use crate::app::domain::numbering::DocumentNumber;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::renderer::Artifact;

/// Receives finished artifacts (save to disk, send to printer, ...).
pub trait DocumentSink {
    fn store(&self, artifact: &Artifact) -> Result<PathBuf>;
}

/// Write `bytes` to a file that must not exist yet.
fn write_new(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => {
                warn!(path = %path.display(), "refusing to overwrite existing file");
                AppError::Export(format!("{} already exists", path.display()))
            }
            _ => AppError::Io(e),
        })?;
    file.write_all(bytes)?;
    Ok(())
}

/// Writes artifacts as files inside one directory.
///
/// Existing files are never replaced: a document number maps to exactly one
/// set of files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSink for DirectorySink {
    fn store(&self, artifact: &Artifact) -> Result<PathBuf> {
        // Keep only the final component so names cannot escape the directory
        let name = Path::new(&artifact.file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|s| !s.is_empty() && *s != "." && *s != "..")
            .ok_or_else(|| AppError::Export(format!("invalid file name '{}'", artifact.file_name)))?;

        let path = self.dir.join(name);
        write_new(&path, &artifact.bytes)?;
        info!(path = %path.display(), bytes = artifact.bytes.len(), "artifact stored");
        Ok(path)
    }
}

/// JSON records of issued documents, one `NNNN.json` file per number.
#[derive(Debug, Clone)]
pub struct DocumentArchive {
    dir: PathBuf,
}

impl DocumentArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, number: DocumentNumber) -> PathBuf {
        self.dir.join(format!("{}.json", number))
    }

    pub fn save(&self, record: &DocumentRecord) -> Result<PathBuf> {
        let path = self.path_for(record.number);
        let json = serde_json::to_vec_pretty(record)?;
        write_new(&path, &json)?;
        info!(number = %record.number, path = %path.display(), "document archived");
        Ok(path)
    }

    /// The archived record for `number`, or `None` if it was never issued here.
    pub fn load(&self, number: DocumentNumber) -> Result<Option<DocumentRecord>> {
        let contents = match fs::read_to_string(self.path_for(number)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Summaries of every readable record, oldest number first.
    ///
    /// Unrelated or corrupt files in the directory are skipped.
    pub fn list(&self) -> Result<Vec<DocumentSummary>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(number) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(DocumentNumber::parse)
            else {
                continue;
            };
            match self.load(number) {
                Ok(Some(record)) => summaries.push(record.summary()),
                Ok(None) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }
        summaries.sort_by_key(|s| s.number);
        Ok(summaries)
    }
}
