use std::collections::HashSet;

use anyhow::Result;
use rayon::prelude::*;

use super::super::{
    actions::{Action, InsertAlt},
    args::FixAltCommand,
};
use super::{
    CommandResult, CommandSummary, FixAltSummary,
    helper::{finish, write_report},
};
use crate::{
    core::CheckContext,
    reports::ReportDocument,
    rules::images::{AltFix, IMAGE_EXTENSIONS, plan_alt_fixes},
};

pub fn fix_alt(cmd: FixAltCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?.with_extensions(IMAGE_EXTENSIONS);
    let apply = cmd.apply;

    let mut fixes: Vec<AltFix> = ctx.sources().par_iter().flat_map(plan_alt_fixes).collect();
    fixes.sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));

    let (file_count, applied_count) = if apply && !fixes.is_empty() {
        let stats = InsertAlt::run(&fixes)?;
        (stats.files_modified, stats.changes_applied)
    } else {
        let files: HashSet<&str> = fixes.iter().map(|fix| fix.file.as_str()).collect();
        (files.len(), 0)
    };

    let lines = fixes
        .iter()
        .map(|fix| format!("- `{}:{}` {}: \"{}\"", fix.file, fix.line, fix.src, fix.alt))
        .collect();
    let summary = FixAltSummary {
        files_scanned: ctx.sources().len(),
        fix_count: fixes.len(),
        file_count,
        is_apply: apply,
        applied_count,
        fixes,
    };
    let document = ReportDocument::new("fix-alt", "Alt Text Fix Report")
        .summary(&summary)?
        .data("fixes", &summary.fixes)?
        .section("Fixes", lines);

    let mut result = finish(
        CommandSummary::FixAlt(summary),
        Vec::new(),
        ctx.sources().len(),
        0,
        false,
    );
    // A dry run leaves no trace on disk.
    if apply {
        write_report(&ctx, &cmd.report, &mut result, document)?;
    }
    Ok(result)
}
