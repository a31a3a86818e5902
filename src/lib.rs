//! Kanji Duplicate Checker Library
//!
//! Finds answers shared by more than one question in kanji quiz data files.

pub mod core;
pub mod reporting;
pub mod scanner;

pub use crate::core::checker;
pub use crate::reporting::report_writer;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::batch::{check_sources, BatchOutcome};
    pub use crate::core::checker::{analyze, Summary};
    pub use crate::core::error::{CheckError, ScanError};
    pub use crate::core::question::{QuestionId, QuestionRecord, QuestionSet};
    pub use crate::reporting::report_writer::{
        format_summary, format_summary_json, write_summary, ReportFormat,
    };
    pub use crate::scanner::duplicate_detector::{
        find_duplicates, group_by_answer, DuplicateGroup, Occurrence,
    };
    pub use crate::scanner::file_scanner::{
        collect_question_files, resolve_sources, DEFAULT_SOURCE_DIR, DEFAULT_SOURCE_PATTERN,
    };
}
