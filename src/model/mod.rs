pub mod profiles;
pub mod questionnaire;
pub mod responses;
pub mod thresholds;
