use serde::Serialize;

use crate::model::profiles::Profile;
use crate::model::responses::ResponseSet;
use crate::model::thresholds::{ProfileThresholds, UnansweredPolicy};
use crate::pipeline::stage2_score::compute_score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub score: u32,
    pub profile: Profile,
    pub description_lines: Vec<&'static str>,
}

/// Result of one scoring pass over a response set.
///
/// `outcome` is `None` when the policy hides the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub answered: usize,
    pub policy: UnansweredPolicy,
    pub outcome: Option<Outcome>,
}

pub fn classify(score: u32, thresholds: &ProfileThresholds) -> Profile {
    if score <= thresholds.slow_processor_max {
        Profile::SlowProcessor
    } else if score <= thresholds.mixed_profile_max {
        Profile::MixedProfile
    } else {
        Profile::Hsp
    }
}

pub fn describe_profile(profile: Profile) -> &'static [&'static str] {
    profile.description()
}

pub fn assess(
    responses: &ResponseSet,
    thresholds: &ProfileThresholds,
    policy: UnansweredPolicy,
) -> Assessment {
    let answered = responses.answered_count();
    let visible = match policy {
        UnansweredPolicy::CountAsZero => true,
        UnansweredPolicy::RequireComplete => responses.is_complete(),
    };

    let outcome = visible.then(|| {
        let score = compute_score(&responses.snapshot());
        let profile = classify(score, thresholds);
        Outcome {
            score,
            profile,
            description_lines: describe_profile(profile).to_vec(),
        }
    });

    Assessment {
        answered,
        policy,
        outcome,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
