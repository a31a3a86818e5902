//! Question records as they appear in quiz data files

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Name of the top-level field holding the question list
pub const QUESTIONS_FIELD: &str = "questions";

/// Identifier of a question. Files use numbers or strings; any other
/// present value is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl QuestionId {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => QuestionId::Number(n.clone()),
            Value::String(s) => QuestionId::Text(s.clone()),
            other => QuestionId::Other(other.clone()),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => f.write_str(s),
            QuestionId::Other(v) => write!(f, "{}", v),
        }
    }
}

/// A question with all three required fields present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
}

/// A question entry exactly as read, before validation.
///
/// A field is `Some` whenever its key is present, `null` included.
/// Unknown fields are ignored.
struct RawQuestion<'a> {
    id: Option<&'a Value>,
    question: Option<&'a Value>,
    answer: Option<&'a Value>,
}

impl<'a> RawQuestion<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        let fields = value.as_object()?;
        Some(Self {
            id: fields.get("id"),
            question: fields.get("question"),
            answer: fields.get("answer"),
        })
    }

    /// Answers are compared as text, so a non-string answer skips the record.
    fn validate(self) -> Option<QuestionRecord> {
        let answer = self.answer?.as_str()?.to_string();
        let question = match self.question? {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Some(QuestionRecord {
            id: QuestionId::from_value(self.id?),
            question,
            answer,
        })
    }
}

impl QuestionRecord {
    /// Validate one entry of the question list.
    ///
    /// Returns `None` when the entry is not an object, when `id`, `question`
    /// or `answer` is missing, or when `answer` is not a string.
    pub fn from_value(value: &Value) -> Option<Self> {
        RawQuestion::from_value(value)?.validate()
    }
}

/// The usable questions of one file, plus the raw entry count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub records: Vec<QuestionRecord>,
    pub total: usize,
}

impl QuestionSet {
    /// Build a question set from a parsed document.
    ///
    /// Returns `None` if the document has no `questions` array.
    pub fn from_document(document: &Value) -> Option<Self> {
        let entries = document.get(QUESTIONS_FIELD)?.as_array()?;

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            match QuestionRecord::from_value(entry) {
                Some(record) => records.push(record),
                None => tracing::debug!(index, "skipping question without id/question/answer"),
            }
        }

        Some(Self {
            records,
            total: entries.len(),
        })
    }

    /// Number of entries that were skipped during validation
    pub fn skipped(&self) -> usize {
        self.total - self.records.len()
    }
}
