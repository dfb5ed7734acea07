use anyhow::Result;

use super::{
    CommandResult, CommandSummary, ImagesSummary,
    helper::{file_breakdown, finish, write_report},
};
use crate::{
    cli::args::ScanCommand,
    core::CheckContext,
    issues::Issue,
    reports::ReportDocument,
    rules::images::{IMAGE_EXTENSIONS, ImageStats, check_image_issues, recommendations},
};

pub fn images(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?.with_extensions(IMAGE_EXTENSIONS);
    let audit = check_image_issues(&ctx);
    let stats = ImageStats::from_audit(&audit);
    let recommendations = recommendations(&stats);

    let issues: Vec<Issue> = audit.issues.into_iter().map(Issue::from).collect();
    let (files, file_lines) = file_breakdown(&issues);
    let recommendation_lines = recommendations
        .iter()
        .map(|r| format!("- **{}** {}: {}", r.priority, r.message, r.action))
        .collect();

    let summary = ImagesSummary {
        stats,
        files_scanned: ctx.sources().len(),
        recommendations,
    };
    let document = ReportDocument::new("images", "Image Alt Text Report")
        .summary(&summary)?
        .data("recommendations", &summary.recommendations)?
        .data("files", &files)?
        .section("Recommendations", recommendation_lines)
        .section("Files", file_lines);

    let mut result = finish(
        CommandSummary::Images(summary),
        issues,
        ctx.sources().len(),
        0,
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
