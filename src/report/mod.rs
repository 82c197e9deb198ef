pub mod json;
pub mod text;

use crate::model::questionnaire::{QUESTION_COUNT, label_for, statements};
use crate::model::responses::ResponseSet;
use crate::pipeline::stage3_classify::Assessment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRow {
    /// 1-based question number.
    pub number: usize,
    pub statement: &'static str,
    pub value: Option<u8>,
    /// Label of the normalised value; unanswered echoes as the 0 label.
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub tool_name: String,
    pub tool_version: String,
    pub assessment: Assessment,
    pub answers: Vec<AnswerRow>,
}

impl ReportContext {
    pub fn new(responses: &ResponseSet, assessment: Assessment) -> Self {
        Self {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            assessment,
            answers: build_answer_rows(responses),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.assessment.answered == QUESTION_COUNT
    }
}

pub fn build_answer_rows(responses: &ResponseSet) -> Vec<AnswerRow> {
    statements()
        .iter()
        .enumerate()
        .map(|(idx, &statement)| {
            let value = responses.get(idx);
            AnswerRow {
                number: idx + 1,
                statement,
                value,
                label: label_for(value.unwrap_or(0)).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
