use std::collections::{BTreeSet, HashSet};

use anyhow::{Result, bail};

use super::super::{
    actions::{Action, ActionStats, DeleteKey},
    args::{CleanCommand, CleanRule},
};
use super::{
    CleanSummary, CommandResult, CommandSummary,
    helper::{file_breakdown, finish, write_report},
};
use crate::{
    core::CheckContext,
    issues::{DynamicKeyIssue, Issue, OrphanKeyIssue, UnusedKeyIssue},
    reports::ReportDocument,
    rules::{keys::check_unused_keys_issues, validate::check_orphan_keys_issues},
};

impl CleanRule {
    pub fn all() -> BTreeSet<Self> {
        [Self::Unused, Self::Orphan].into_iter().collect()
    }
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let rules = if cmd.rules.is_empty() {
        CleanRule::all()
    } else {
        cmd.rules.iter().copied().collect()
    };

    let mut unused_issues: Vec<UnusedKeyIssue> = Vec::new();
    let mut orphan_issues: Vec<OrphanKeyIssue> = Vec::new();
    for rule in rules {
        match rule {
            CleanRule::Unused => {
                let (unused, dynamic) = check_unused_keys_issues(&ctx)?;
                validate_safety(&dynamic)?;
                unused_issues.extend(unused);
            }
            CleanRule::Orphan => orphan_issues.extend(check_orphan_keys_issues(&ctx)?),
        }
    }

    let (file_count, applied_count) = if apply {
        let mut stats = ActionStats::default();
        if !unused_issues.is_empty() {
            stats += DeleteKey::run(&unused_issues)?;
        }
        if !orphan_issues.is_empty() {
            stats += DeleteKey::run(&orphan_issues)?;
        }
        (stats.files_modified, stats.changes_applied)
    } else {
        let files: HashSet<&str> = unused_issues
            .iter()
            .map(|issue| issue.context.file_path())
            .chain(orphan_issues.iter().map(|issue| issue.context.file_path()))
            .collect();
        (files.len(), 0)
    };

    let mut all_issues: Vec<Issue> = Vec::new();
    all_issues.extend(unused_issues.iter().cloned().map(Issue::UnusedKey));
    all_issues.extend(orphan_issues.iter().cloned().map(Issue::OrphanKey));

    let summary = CleanSummary {
        unused_count: unused_issues.len(),
        orphan_count: orphan_issues.len(),
        file_count,
        is_apply: apply,
        applied_count,
        unused_issues,
        orphan_issues,
    };
    let (files, lines) = file_breakdown(&all_issues);
    let document = ReportDocument::new("clean", "Translation Cleanup Report")
        .summary(&summary)?
        .data("files", &files)?
        .section("Files", lines);

    let locale_files = ctx.messages()?.all_messages.len();
    let mut result = finish(
        CommandSummary::Clean(summary),
        all_issues,
        ctx.sources().len(),
        locale_files,
        false,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}

/// Fails while any dynamic key call is neither resolved nor suppressed.
fn validate_safety(dynamic: &[DynamicKeyIssue]) -> Result<()> {
    let Some(first) = dynamic.first() else {
        return Ok(());
    };
    bail!(
        "Cannot clean unused keys, {} dynamic key call(s) found (first at {}:{}: t({})).\n\
         Run `i18nkit keys` to see them, then use literal keys or add \
         `// i18nkit-disable-next-line keys` above each call.",
        dynamic.len(),
        first.context.file_path(),
        first.context.line(),
        first.expression
    )
}
