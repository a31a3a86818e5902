//! Question data model, error taxonomy and per-source analysis

pub mod batch;
pub mod checker;
pub mod error;
pub mod question;

pub use batch::{check_sources, BatchOutcome};
pub use checker::{analyze, Summary};
pub use error::{CheckError, ScanError};
pub use question::{QuestionId, QuestionRecord, QuestionSet};
