use proptest::prelude::*;

use super::*;
use crate::model::questionnaire::QUESTION_COUNT;
use crate::model::responses::ResponseSet;

#[test]
fn test_all_unanswered_scores_zero() {
    assert_eq!(compute_score(&[None; QUESTION_COUNT]), 0);
}

#[test]
fn test_all_zero_scores_zero() {
    assert_eq!(compute_score(&[Some(0); QUESTION_COUNT]), 0);
}

#[test]
fn test_all_four_scores_eighty() {
    assert_eq!(compute_score(&[Some(4); QUESTION_COUNT]), 80);
}

#[test]
fn test_mixed_example() {
    let mut responses = [Some(1); QUESTION_COUNT];
    for slot in responses.iter_mut().take(10) {
        *slot = Some(2);
    }
    assert_eq!(compute_score(&responses), 30);
}

#[test]
fn test_partial_answers() {
    let mut set = ResponseSet::new();
    set.set_answer(0, 4).unwrap();
    set.set_answer(10, 3).unwrap();
    assert_eq!(compute_score(&set.snapshot()), 7);
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::array::uniform20(prop::option::of(0u8..=4))
}

proptest! {
    #[test]
    fn score_stays_in_range(responses in snapshot_strategy()) {
        let score = compute_score(&responses);
        prop_assert!(score <= 80);
    }

    #[test]
    fn unanswered_equals_explicit_zero(responses in snapshot_strategy()) {
        let explicit = responses.map(|slot| Some(slot.unwrap_or(0)));
        prop_assert_eq!(compute_score(&responses), compute_score(&explicit));
    }

    #[test]
    fn reset_always_scores_zero(responses in snapshot_strategy()) {
        let mut set = ResponseSet::from_snapshot(responses);
        set.reset();
        prop_assert_eq!(compute_score(&set.snapshot()), 0);
        set.reset();
        prop_assert_eq!(compute_score(&set.snapshot()), 0);
    }
}
