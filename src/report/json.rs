use serde::Serialize;

use crate::model::profiles::Profile;
use crate::model::questionnaire::MAX_SCORE;
use crate::model::thresholds::UnansweredPolicy;
use crate::report::ReportContext;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: &'a str,
    pub version: &'a str,
    pub policy: UnansweredPolicy,
    pub answered: usize,
    pub complete: bool,
    pub score: Option<u32>,
    pub max_score: u32,
    pub profile: Option<Profile>,
    pub profile_label: Option<&'static str>,
    pub profile_rank: Option<u8>,
    pub description: &'a [&'static str],
    pub answers: Vec<Option<u8>>,
}

pub fn build_summary(ctx: &ReportContext) -> SummaryData<'_> {
    let outcome = ctx.assessment.outcome.as_ref();
    SummaryData {
        tool: &ctx.tool_name,
        version: &ctx.tool_version,
        policy: ctx.assessment.policy,
        answered: ctx.assessment.answered,
        complete: ctx.is_complete(),
        score: outcome.map(|o| o.score),
        max_score: MAX_SCORE,
        profile: outcome.map(|o| o.profile),
        profile_label: outcome.map(|o| o.profile.label()),
        profile_rank: outcome.map(|o| o.profile.rank()),
        description: outcome.map(|o| o.description_lines.as_slice()).unwrap_or_default(),
        answers: ctx.answers.iter().map(|row| row.value).collect(),
    }
}

pub fn render_summary_json(ctx: &ReportContext) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_summary(ctx))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
