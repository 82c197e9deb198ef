use crate::model::responses::Snapshot;

/// Sum of all answers, unanswered counted as 0.
///
/// Values are summed as given; keeping them in 0..=4 is the caller's job.
pub fn compute_score(responses: &Snapshot) -> u32 {
    responses
        .iter()
        .map(|slot| u32::from(slot.unwrap_or(0)))
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
