use anyhow::Result;

use super::{
    CommandResult, CommandSummary, HardcodeSummary,
    helper::{file_breakdown, finish, write_report},
};
use crate::{
    cli::args::HardcodeCommand,
    core::CheckContext,
    issues::Issue,
    reports::ReportDocument,
    rules::hardcoded::{check_compliance_issues, check_hardcoded_issues},
};

pub fn hardcode(cmd: HardcodeCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let mut locale_files = 0;
    if cmd.compliance {
        let (_, messages) = ctx.load_all()?;
        locale_files = messages.all_messages.len();
    }

    let mut issues: Vec<Issue> = check_hardcoded_issues(&ctx)
        .into_iter()
        .map(Issue::from)
        .collect();
    if cmd.compliance {
        issues.extend(check_compliance_issues(&ctx)?);
    }

    let summary = HardcodeSummary {
        files_scanned: ctx.sources().len(),
        compliance: cmd.compliance,
    };
    let (files, lines) = file_breakdown(&issues);
    let document = ReportDocument::new("hardcode", "Hardcoded Text Report")
        .summary(&summary)?
        .data("files", &files)?
        .section("Files", lines);

    let mut result = finish(
        CommandSummary::Hardcode(summary),
        issues,
        ctx.sources().len(),
        locale_files,
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
