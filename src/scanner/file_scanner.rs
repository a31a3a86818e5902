//! Question file discovery

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::ScanError;

/// Directory scanned when no file is given
pub const DEFAULT_SOURCE_DIR: &str = "public";

/// File name pattern of question files in the default directory
pub const DEFAULT_SOURCE_PATTERN: &str = "kanji_grade*.json";

/// Resolve the files to check
///
/// # Arguments
/// * `explicit` - A file named on the command line; used as-is when present
/// * `dir` - Directory to scan otherwise
/// * `pattern` - Glob matched against file names in `dir`
///
/// # Returns
/// Sources in the order they should be checked
pub fn resolve_sources(
    explicit: Option<&Path>,
    dir: &Path,
    pattern: &str,
) -> Result<Vec<PathBuf>, ScanError> {
    if let Some(path) = explicit {
        return Ok(vec![path.to_path_buf()]);
    }

    if !dir.exists() {
        return Err(ScanError::DirectoryMissing {
            dir: dir.to_path_buf(),
        });
    }

    let files = collect_question_files(dir, pattern)?;
    if files.is_empty() {
        return Err(ScanError::NoMatches {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    Ok(files)
}

/// Collect files directly inside `dir` whose name matches `pattern`,
/// sorted lexicographically
pub fn collect_question_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let matcher = Pattern::new(pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.map_err(|source| ScanError::Walk {
            dir: dir.to_path_buf(),
            source,
        })?;

        if !entry.path().is_file() {
            continue;
        }
        if matcher.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(
        dir = %dir.display(),
        pattern,
        found = files.len(),
        "scanned for question files"
    );

    Ok(files)
}
