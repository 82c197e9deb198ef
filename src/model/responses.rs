use thiserror::Error;

use crate::model::questionnaire::{MAX_VALUE, QUESTION_COUNT};

/// Positional answers, `None` until the question has been answered.
pub type Snapshot = [Option<u8>; QUESTION_COUNT];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponseError {
    #[error("question index {index} out of range (expected 0..20)")]
    IndexOutOfRange { index: usize },
    #[error("answer value {value} out of range (expected 0..=4)")]
    ValueOutOfRange { value: u8 },
}

/// The one mutable piece of state in a run: what has been answered so far.
///
/// `set_answer` and `reset` are the only mutators. Scoring never borrows the
/// set itself, it works on a [`Snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    slots: Snapshot,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(slots: Snapshot) -> Self {
        Self { slots }
    }

    pub fn set_answer(&mut self, index: usize, value: u8) -> Result<(), ResponseError> {
        if value > MAX_VALUE {
            return Err(ResponseError::ValueOutOfRange { value });
        }
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ResponseError::IndexOutOfRange { index })?;
        *slot = Some(value);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.slots = [None; QUESTION_COUNT];
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.slots
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/responses.rs"]
mod tests;
