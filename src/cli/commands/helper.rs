use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::ReportArgs,
    core::CheckContext,
    issues::{Issue, Report, Severity, compare_issues},
    reports::{ReportDocument, write_reports},
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    locale_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let count = |severity: Severity| issues.iter().filter(|i| i.severity() == severity).count();
    let mut error_count = count(Severity::Error);
    let warning_count = count(Severity::Warning);
    let info_count = count(Severity::Info);

    if let CommandSummary::Init(ref summary) | CommandSummary::MonitorInit(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        info_count,
        exit_on_errors,
        issues,
        source_files_checked,
        locale_files_checked,
        report: None,
    }
}

/// Write the JSON and Markdown reports unless `--no-report` was given.
///
/// The summary gains the issue counts per severity and per rule.
pub fn write_report(
    ctx: &CheckContext,
    args: &ReportArgs,
    result: &mut CommandResult,
    document: ReportDocument,
) -> Result<()> {
    if args.no_report {
        return Ok(());
    }

    let mut document = document.issues(&result.issues);
    if let Value::Object(summary) = &mut document.summary {
        summary.insert("errors".to_string(), result.error_count.into());
        summary.insert("warnings".to_string(), result.warning_count.into());
        summary.insert("info".to_string(), result.info_count.into());
        let mut by_rule = Map::new();
        for issue in &document.issues {
            let count = by_rule.entry(issue.rule.clone()).or_insert(Value::from(0));
            *count = Value::from(count.as_u64().unwrap_or(0) + 1);
        }
        summary.insert("byRule".to_string(), Value::Object(by_rule));
    }

    result.report = Some(write_reports(&document, &ctx.reports_dir())?);
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct FileCount {
    pub file: String,
    pub issues: usize,
}

/// Issue counts per file, most affected first, plus the Markdown lines
/// listing them.
pub fn file_breakdown(issues: &[Issue]) -> (Vec<FileCount>, Vec<String>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for issue in issues {
        let location = issue.location();
        let (file, _, _) = location.position();
        *counts.entry(file).or_default() += 1;
    }
    let mut files: Vec<FileCount> = counts
        .into_iter()
        .map(|(file, issues)| FileCount {
            file: file.to_string(),
            issues,
        })
        .collect();
    files.sort_by(|a, b| b.issues.cmp(&a.issues).then_with(|| a.file.cmp(&b.file)));

    let lines = files
        .iter()
        .map(|f| format!("- `{}`: {}", f.file, f.issues))
        .collect();
    (files, lines)
}
