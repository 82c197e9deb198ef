mod error;
mod form;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::form::session::Session;
use crate::model::questionnaire::{labels, statements};
use crate::model::responses::ResponseSet;
use crate::model::thresholds::{ProfileThresholds, UnansweredPolicy};
use crate::pipeline::stage1_answers::load_answer_sheet;
use crate::pipeline::stage3_classify::assess;
use crate::pipeline::stage4_report::write_reports;
use crate::report::ReportContext;
use crate::report::text::{render_intro, render_report_text};

#[derive(Debug, Parser)]
#[command(name = "hsp-profile", version, about = "HSP / Slow Processor self-assessment")]
struct Cli {
    /// Log filter (overridden by HSP_PROFILE_LOG).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print the statements and the answer scale.
    Questions,
    /// Score an answer sheet.
    Run(RunArgs),
    /// Answer the questionnaire on stdin.
    Interactive(InteractiveArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long)]
    answers: PathBuf,
    #[arg(long)]
    out: Option<PathBuf>,
    /// Hide the result until all 20 statements are answered.
    #[arg(long)]
    require_complete: bool,
}

#[derive(Debug, Args)]
struct InteractiveArgs {
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    require_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    out_dir: Option<PathBuf>,
    policy: UnansweredPolicy,
}

impl RunConfig {
    fn new(out_dir: Option<PathBuf>, require_complete: bool) -> Self {
        let policy = if require_complete {
            UnansweredPolicy::RequireComplete
        } else {
            UnansweredPolicy::CountAsZero
        };
        Self { out_dir, policy }
    }
}

fn main() {
    let cli = Cli::parse();
    let result = logging::init(cli.log_level.as_deref())
        .map_err(AppError::from)
        .and_then(|()| run(cli.command));
    if let Err(err) = result {
        report_failure(&err, &mut std::io::stderr().lock());
        std::process::exit(1);
    }
}

/// The single place a failed run is reported.
fn report_failure(err: &AppError, stderr: &mut impl Write) {
    let _ = writeln!(stderr, "{err}");
}

fn run(command: CliCommand) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    match command {
        CliCommand::Questions => {
            print_questions(&mut stdout.lock())?;
        }
        CliCommand::Run(args) => {
            let config = RunConfig::new(args.out.clone(), args.require_complete);
            let responses = load_answer_sheet(&args.answers)?;
            finish(&responses, &config, &mut stdout.lock())?;
        }
        CliCommand::Interactive(args) => {
            let config = RunConfig::new(args.out.clone(), args.require_complete);
            let stdin = std::io::stdin();
            let responses = Session::new(stdin.lock(), stdout.lock(), config.policy).run()?;
            finish(&responses, &config, &mut stdout.lock())?;
        }
    }
    Ok(())
}

/// Scores the final answers and either writes the report files or prints the report.
fn finish(
    responses: &ResponseSet,
    config: &RunConfig,
    stdout: &mut impl Write,
) -> Result<(), AppError> {
    let assessment = assess(responses, &ProfileThresholds::default_v1(), config.policy);
    match &assessment.outcome {
        Some(outcome) => tracing::info!(
            score = outcome.score,
            profile = outcome.profile.label(),
            answered = assessment.answered,
            "assessment complete"
        ),
        None => tracing::warn!(
            answered = assessment.answered,
            policy = config.policy.describe(),
            "result hidden until all questions are answered"
        ),
    }

    let ctx = ReportContext::new(responses, assessment);
    match &config.out_dir {
        Some(dir) => {
            let paths = write_reports(&ctx, dir)?;
            writeln!(stdout, "{}", paths.report.display())?;
            writeln!(stdout, "{}", paths.summary.display())?;
            writeln!(stdout, "{}", paths.answers.display())?;
        }
        None => write!(stdout, "{}", render_report_text(&ctx))?,
    }
    Ok(())
}

fn print_questions(out: &mut impl Write) -> std::io::Result<()> {
    let scale = labels()
        .iter()
        .enumerate()
        .map(|(value, label)| format!("{value} = {label}"))
        .collect::<Vec<_>>()
        .join(", ");
    write!(out, "{}", render_intro())?;
    writeln!(out, "Skala: {}", scale)?;
    for (idx, statement) in statements().iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, statement)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
