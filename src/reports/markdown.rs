use std::{collections::BTreeMap, fmt::Write};

use serde_json::Value;

use super::{IssueEntry, ReportDocument};

pub(super) fn render(document: &ReportDocument) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}\n", document.title);
    let _ = writeln!(
        out,
        "Generated: {}\n",
        document.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "| Item | Value |");
    let _ = writeln!(out, "|---|---|");
    if let Value::Object(summary) = &document.summary {
        for (field, value) in summary {
            if let Some(value) = scalar(value) {
                let _ = writeln!(out, "| {} | {} |", humanize(field), value);
            }
        }
    }
    let _ = writeln!(out, "| Issues | {} |", document.issues.len());

    for section in &document.sections {
        let _ = writeln!(out, "\n## {}\n", section.heading);
        for line in &section.lines {
            let _ = writeln!(out, "{}", line);
        }
    }

    let _ = writeln!(out, "\n## Issues\n");
    if document.issues.is_empty() {
        let _ = writeln!(out, "No issues found.");
        return out;
    }

    let mut by_rule: BTreeMap<&str, Vec<&IssueEntry>> = BTreeMap::new();
    for issue in &document.issues {
        by_rule.entry(issue.rule.as_str()).or_default().push(issue);
    }
    for (rule, issues) in by_rule {
        let _ = writeln!(out, "### `{}` ({})\n", rule, issues.len());
        for issue in issues {
            let _ = write!(
                out,
                "- **{}** `{}`: {}",
                issue.severity,
                location(issue),
                escape_markdown(&issue.message)
            );
            if let Some(details) = &issue.details {
                let _ = write!(out, " ({})", escape_markdown(details));
            }
            let _ = writeln!(out);
            if let Some(hint) = &issue.hint {
                let _ = writeln!(out, "  - hint: {}", escape_markdown(hint));
            }
        }
        let _ = writeln!(out);
    }
    out
}

fn location(issue: &IssueEntry) -> String {
    if issue.line == 0 {
        issue.file.clone()
    } else {
        format!("{}:{}:{}", issue.file, issue.line, issue.col)
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "yes" } else { "no" }.to_string()),
        _ => None,
    }
}

/// `filesScanned` -> `Files scanned`
fn humanize(field: &str) -> String {
    let mut out = String::new();
    for (i, c) in field.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
