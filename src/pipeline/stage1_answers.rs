use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::questionnaire::{MAX_VALUE, QUESTION_COUNT, value_for_label};
use crate::model::responses::{ResponseSet, Snapshot};

#[derive(Debug, Error)]
pub enum AnswerSheetError {
    #[error("failed to read answer sheet {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON answer sheet: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected 20 answers, found {found}")]
    WrongCount { found: usize },
    #[error("entry {entry}: invalid answer '{value}' (use 0-4, a label, or '-' for unanswered)")]
    InvalidEntry { entry: usize, value: String },
}

pub fn load_answer_sheet(path: &Path) -> Result<ResponseSet, AnswerSheetError> {
    let content = fs::read_to_string(path).map_err(|source| AnswerSheetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let responses = parse_answer_sheet(&content)?;
    tracing::info!(
        path = %path.display(),
        answered = responses.answered_count(),
        "loaded answer sheet"
    );
    Ok(responses)
}

/// Accepts a JSON array of `null`/0-4, or a plain-text list of entries.
pub fn parse_answer_sheet(content: &str) -> Result<ResponseSet, AnswerSheetError> {
    if content.trim_start().starts_with('[') {
        parse_json(content)
    } else {
        parse_text(content)
    }
}

fn parse_json(content: &str) -> Result<ResponseSet, AnswerSheetError> {
    let raw: Vec<Option<i64>> = serde_json::from_str(content)?;
    if raw.len() != QUESTION_COUNT {
        return Err(AnswerSheetError::WrongCount { found: raw.len() });
    }
    let mut slots: Snapshot = [None; QUESTION_COUNT];
    for (idx, value) in raw.into_iter().enumerate() {
        slots[idx] = match value {
            None => None,
            Some(v) if (0..=i64::from(MAX_VALUE)).contains(&v) => Some(v as u8),
            Some(v) => {
                return Err(AnswerSheetError::InvalidEntry {
                    entry: idx + 1,
                    value: v.to_string(),
                });
            }
        };
    }
    Ok(ResponseSet::from_snapshot(slots))
}

fn parse_text(content: &str) -> Result<ResponseSet, AnswerSheetError> {
    let entries = split_entries(content);
    if entries.len() != QUESTION_COUNT {
        return Err(AnswerSheetError::WrongCount {
            found: entries.len(),
        });
    }
    let mut slots: Snapshot = [None; QUESTION_COUNT];
    for (idx, entry) in entries.iter().enumerate() {
        slots[idx] = parse_entry(entry).ok_or_else(|| AnswerSheetError::InvalidEntry {
            entry: idx + 1,
            value: entry.clone(),
        })?;
    }
    Ok(ResponseSet::from_snapshot(slots))
}

/// Splits on newlines, commas, semicolons and whitespace. `Nogle gange`
/// stays one entry wherever it appears.
fn split_entries(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for part in line.split([',', ';']) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let mut tokens = part.split_whitespace().peekable();
            while let Some(token) = tokens.next() {
                let joins_next = token.eq_ignore_ascii_case("nogle")
                    && tokens
                        .peek()
                        .is_some_and(|next| next.eq_ignore_ascii_case("gange"));
                match tokens.next_if(|_| joins_next) {
                    Some(next) => out.push(format!("{token} {next}")),
                    None => out.push(token.to_string()),
                }
            }
        }
    }
    out
}

/// `Some(None)` is an explicit unanswered marker, `None` is unparseable.
pub fn parse_entry(entry: &str) -> Option<Option<u8>> {
    let entry = entry.trim();
    if entry == "-" || entry == "?" {
        return Some(None);
    }
    if let [digit @ b'0'..=b'9'] = entry.as_bytes() {
        let v = digit - b'0';
        return (v <= MAX_VALUE).then_some(Some(v));
    }
    value_for_label(entry).map(Some)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_answers.rs"]
mod tests;
