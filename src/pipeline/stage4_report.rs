use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::report::ReportContext;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub summary: PathBuf,
    pub answers: PathBuf,
}

pub fn write_reports(ctx: &ReportContext, out_dir: &Path) -> std::io::Result<ReportPaths> {
    fs::create_dir_all(out_dir)?;

    let paths = ReportPaths {
        report: out_dir.join("report.txt"),
        summary: out_dir.join("summary.json"),
        answers: out_dir.join("answers.tsv"),
    };

    write_text(&paths.report, &render_report_text(ctx))?;

    let mut json = render_summary_json(ctx)?;
    json.push('\n');
    write_text(&paths.summary, &json)?;

    write_answers_tsv(ctx, &paths.answers)?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(paths)
}

fn write_answers_tsv(ctx: &ReportContext, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = ["index", "statement", "value", "label", "answered"].join("\t");
    writeln!(w, "{}", header)?;

    for row in &ctx.answers {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            row.number,
            row.statement,
            row.value.unwrap_or(0),
            row.label,
            row.value.is_some()
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
