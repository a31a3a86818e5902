//! Error types for source resolution and analysis

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to analyze a single source.
///
/// Every variant is scoped to one file; the batch runner reports it and moves
/// on to the next source.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Error reading {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error: 'questions' field not found in {}", path.display())]
    Structure { path: PathBuf },
}

impl CheckError {
    /// Classify an I/O failure on `path` as `NotFound` or `Read`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            CheckError::NotFound { path, source }
        } else {
            CheckError::Read { path, source }
        }
    }

    /// The source this error belongs to
    pub fn path(&self) -> &Path {
        match self {
            CheckError::NotFound { path, .. }
            | CheckError::Read { path, .. }
            | CheckError::Parse { path, .. }
            | CheckError::Structure { path } => path,
        }
    }
}

/// Failure to resolve the list of sources in directory-scan mode.
///
/// These end the run: there is nothing to check.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error: {}/ directory not found", dir.display())]
    DirectoryMissing { dir: PathBuf },

    #[error("No {pattern} files found in {}/", dir.display())]
    NoMatches { dir: PathBuf, pattern: String },

    #[error("Invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Error scanning {}: {source}", dir.display())]
    Walk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
