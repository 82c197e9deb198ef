use crate::model::questionnaire::{MAX_SCORE, QUESTION_COUNT, TITLE, intro};
use crate::pipeline::stage3_classify::Assessment;
use crate::report::ReportContext;

pub const REPORT_TITLE: &str = "HSP / Slow Processor Test – Rapport";

/// The exported document: result, profile characteristics, then every answer.
pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(REPORT_TITLE.chars().count()));
    out.push_str("\n\n");

    match &ctx.assessment.outcome {
        Some(outcome) => {
            out.push_str(&format!("Samlet score: {} / {}\n", outcome.score, MAX_SCORE));
            out.push_str(&format!("Profil: {}\n\n", outcome.profile.label()));
            out.push_str("Karakteristika for din profil:\n");
            for line in &outcome.description_lines {
                out.push_str(&format!("- {}\n", line));
            }
        }
        None => {
            out.push_str(&incomplete_notice(ctx.assessment.answered));
            out.push('\n');
        }
    }
    out.push('\n');

    out.push_str("Dine svar:\n");
    for row in &ctx.answers {
        out.push_str(&format!("{}. {} – {}\n", row.number, row.statement, row.label));
    }

    out
}

/// Title and introduction shown before the first question.
pub fn render_intro() -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");
    for paragraph in intro() {
        out.push_str(paragraph);
        out.push_str("\n\n");
    }
    out
}

/// The on-screen result block shown under the questions.
pub fn render_result_block(assessment: &Assessment) -> String {
    let mut out = String::new();
    out.push_str("Dit resultat\n");
    match &assessment.outcome {
        Some(outcome) => {
            out.push_str(&format!("Score: {} / {}\n", outcome.score, MAX_SCORE));
            out.push_str(&format!("Profil: {}\n", outcome.profile.label()));
            out.push_str("Karakteristika for din profil:\n");
            for line in &outcome.description_lines {
                out.push_str(&format!("- {}\n", line));
            }
        }
        None => {
            out.push_str(&incomplete_notice(assessment.answered));
            out.push('\n');
        }
    }
    out
}

fn incomplete_notice(answered: usize) -> String {
    format!(
        "Besvar alle {} udsagn for at se dit resultat ({} af {} besvaret).",
        QUESTION_COUNT, answered, QUESTION_COUNT
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
