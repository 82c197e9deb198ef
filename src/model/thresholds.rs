use serde::Serialize;

/// Upper bounds (inclusive) of the two lower profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileThresholds {
    pub slow_processor_max: u32,
    pub mixed_profile_max: u32,
}

/// What to do with questions that have not been answered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnansweredPolicy {
    /// Unanswered counts as 0; the result is always shown.
    #[default]
    CountAsZero,
    /// The result stays hidden until every question is answered.
    RequireComplete,
}

impl ProfileThresholds {
    pub fn default_v1() -> Self {
        Self {
            slow_processor_max: 26,
            mixed_profile_max: 53,
        }
    }
}

impl Default for ProfileThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl UnansweredPolicy {
    pub fn describe(self) -> &'static str {
        match self {
            UnansweredPolicy::CountAsZero => "unanswered counts as 0",
            UnansweredPolicy::RequireComplete => "all questions required",
        }
    }
}
