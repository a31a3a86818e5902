//! Grouping of questions by answer

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::question::{QuestionId, QuestionRecord};

/// One appearance of an answer in a question file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub id: QuestionId,
    pub question: String,
}

/// Questions sharing an identical answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub answer: String,
    pub occurrences: Vec<Occurrence>,
}

/// Answer -> occurrences, iterated in ascending answer order
pub type AnswerGroups = BTreeMap<String, Vec<Occurrence>>;

/// Group questions by exact answer text
///
/// # Arguments
/// * `records` - Validated questions in file order
///
/// # Returns
/// Every distinct answer with its occurrences, each list in file order
pub fn group_by_answer(records: &[QuestionRecord]) -> AnswerGroups {
    let mut groups = AnswerGroups::new();

    for record in records {
        groups
            .entry(record.answer.clone())
            .or_default()
            .push(Occurrence {
                id: record.id.clone(),
                question: record.question.clone(),
            });
    }

    groups
}

/// Keep only the answers that occur more than once
pub fn find_duplicates(groups: AnswerGroups) -> Vec<DuplicateGroup> {
    groups
        .into_iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .map(|(answer, occurrences)| DuplicateGroup {
            answer,
            occurrences,
        })
        .collect()
}
