use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use super::ReportDocument;
use crate::issues::{Issue, Report};

/// One issue as it appears in a JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueEntry {
    pub rule: String,
    pub severity: String,
    pub file: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&Issue> for IssueEntry {
    fn from(issue: &Issue) -> Self {
        let location = issue.location();
        let (file, line, col) = location.position();
        Self {
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity().to_string(),
            file: file.to_string(),
            line,
            col,
            message: issue.message(),
            hint: issue.hint(),
            details: issue.details(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    report: &'a str,
    title: &'a str,
    generated_at: String,
    summary: &'a Value,
    issues: &'a [IssueEntry],
    #[serde(flatten)]
    data: &'a Map<String, Value>,
}

/// Pretty-printed JSON with a trailing newline.
pub(super) fn render(document: &ReportDocument) -> Result<String> {
    let report = JsonReport {
        report: &document.name,
        title: &document.title,
        generated_at: document.generated_at.to_rfc3339(),
        summary: &document.summary,
        issues: &document.issues,
        data: &document.data,
    };
    let content = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    Ok(format!("{}\n", content))
}
