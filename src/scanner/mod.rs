//! Question file discovery and answer grouping

pub mod duplicate_detector;
pub mod file_scanner;

pub use duplicate_detector::{
    find_duplicates, group_by_answer, AnswerGroups, DuplicateGroup, Occurrence,
};
pub use file_scanner::{
    collect_question_files, resolve_sources, DEFAULT_SOURCE_DIR, DEFAULT_SOURCE_PATTERN,
};
