use anyhow::Result;
use serde::Serialize;

use super::{
    CommandResult, CommandSummary, KeysSummary,
    helper::{finish, write_report},
};
use crate::{
    cli::args::ScanCommand, core::CheckContext, issues::Issue, reports::ReportDocument,
    rules::keys::analyze_keys,
};

/// Keys found in one file, as listed in the report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileKeys<'a> {
    file: &'a str,
    keys: Vec<&'a str>,
    patterns: Vec<&'a str>,
    dynamic: usize,
}

pub fn keys(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let analysis = analyze_keys(&ctx)?;
    let locale_files = ctx.messages()?.all_messages.len();

    let files: Vec<FileKeys> = analysis
        .usages
        .iter()
        .map(|usage| FileKeys {
            file: &usage.file_path,
            keys: usage.keys.iter().map(|k| k.key.as_str()).collect(),
            patterns: usage.patterns.iter().map(|k| k.key.as_str()).collect(),
            dynamic: usage.dynamic.len(),
        })
        .collect();
    let lines = files
        .iter()
        .map(|f| {
            let mut line = format!("- `{}`: {} key(s)", f.file, f.keys.len());
            if !f.patterns.is_empty() {
                line.push_str(&format!(", {} pattern(s)", f.patterns.len()));
            }
            if f.dynamic > 0 {
                line.push_str(&format!(", {} dynamic", f.dynamic));
            }
            line
        })
        .collect();

    let summary = KeysSummary {
        files_scanned: analysis.files_scanned,
        files_with_keys: analysis.usages.len(),
        keys_used: analysis.keys_used,
        keys_defined: analysis.keys_defined,
        missing: analysis.missing.len(),
        unused: analysis.unused.len(),
        dynamic: analysis.dynamic.len(),
    };
    let document = ReportDocument::new("keys", "Translation Key Report")
        .summary(&summary)?
        .data("files", &files)?
        .section("Files", lines);

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(analysis.missing.into_iter().map(Issue::from));
    issues.extend(analysis.unused.into_iter().map(Issue::from));
    issues.extend(analysis.dynamic.into_iter().map(Issue::from));

    let mut result = finish(
        CommandSummary::Keys(summary),
        issues,
        analysis.files_scanned,
        locale_files,
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
