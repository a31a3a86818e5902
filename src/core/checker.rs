//! Duplicate-answer analysis of a single question file

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::CheckError;
use super::question::QuestionSet;
use crate::scanner::duplicate_detector::{find_duplicates, group_by_answer, DuplicateGroup};

/// Result of analyzing one question file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Source the summary was produced from
    #[serde(serialize_with = "serialize_display_path")]
    pub file: PathBuf,
    /// Length of the raw question list, skipped entries included
    pub total_questions: usize,
    /// Distinct answers among the usable questions
    pub unique_answers: usize,
    /// Answers shared by more than one question, ascending by answer
    pub duplicates: Vec<DuplicateGroup>,
}

// Lossy so that non-UTF-8 file names still serialize.
fn serialize_display_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&path.display())
}

impl Summary {
    /// Build a summary from a loaded question set
    pub fn from_question_set(file: &Path, set: &QuestionSet) -> Self {
        let groups = group_by_answer(&set.records);
        let unique_answers = groups.len();

        Self {
            file: file.to_path_buf(),
            total_questions: set.total,
            unique_answers,
            duplicates: find_duplicates(groups),
        }
    }

    /// Number of questions that belong to some duplicate group
    pub fn duplicate_question_count(&self) -> usize {
        self.duplicates.iter().map(|g| g.occurrences.len()).sum()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Analyze a question file for duplicate answers
///
/// # Arguments
/// * `path` - Path to a JSON file with a top-level `questions` array
///
/// # Returns
/// A [`Summary`] of the file, or the reason it could not be analyzed
pub fn analyze(path: &Path) -> Result<Summary, CheckError> {
    let content = fs::read_to_string(path).map_err(|e| CheckError::from_io(path, e))?;

    let document: Value = serde_json::from_str(&content).map_err(|source| CheckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let set = QuestionSet::from_document(&document).ok_or_else(|| CheckError::Structure {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(
        file = %path.display(),
        total = set.total,
        skipped = set.skipped(),
        "loaded question set"
    );

    Ok(Summary::from_question_set(path, &set))
}
