use anyhow::Result;

use super::{
    CommandResult, CommandSummary, UrlsSummary,
    helper::{file_breakdown, finish, write_report},
};
use crate::{
    cli::args::ScanCommand,
    core::{CheckContext, extract::urls::URL_EXTENSIONS},
    issues::Issue,
    reports::ReportDocument,
    rules::urls::check_hardcoded_url_issues,
};

pub fn urls(cmd: ScanCommand) -> Result<CommandResult> {
    let mut ctx = CheckContext::new(&cmd.common)?.with_extensions(URL_EXTENSIONS);
    // Locale files carry links too.
    let messages_root = ctx.config.messages_root.clone();
    if !ctx.config.includes.is_empty() && !ctx.config.includes.contains(&messages_root) {
        ctx.config.includes.push(messages_root);
    }

    let issues: Vec<Issue> = check_hardcoded_url_issues(&ctx)?
        .into_iter()
        .map(Issue::from)
        .collect();

    let summary = UrlsSummary {
        files_scanned: ctx.sources().len(),
        hosts: ctx.config.site_hosts.clone(),
    };
    let (files, lines) = file_breakdown(&issues);
    let document = ReportDocument::new("urls", "Hardcoded URL Report")
        .summary(&summary)?
        .data("files", &files)?
        .section("Files", lines);

    let mut result = finish(
        CommandSummary::Urls(summary),
        issues,
        ctx.sources().len(),
        0,
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
