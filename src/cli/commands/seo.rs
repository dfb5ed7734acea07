use anyhow::Result;

use super::{
    CommandResult, CommandSummary, SeoSummary,
    helper::{finish, write_report},
};
use crate::{
    cli::args::ScanCommand, core::CheckContext, issues::Issue, reports::ReportDocument,
    rules::seo::check_seo_issues,
};

pub fn seo(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let analysis = check_seo_issues(&ctx)?;
    let average_score = (analysis.average_score() * 10.0).round() / 10.0;

    let issues: Vec<Issue> = analysis
        .articles
        .iter()
        .flat_map(|article| article.issues.iter().cloned().map(Issue::from))
        .collect();
    let lines = analysis
        .articles
        .iter()
        .map(|a| format!("- `{}` ({}): {}/100", a.file, a.locale, a.score))
        .collect();

    let summary = SeoSummary {
        articles: analysis.articles.len(),
        skipped: analysis.skipped,
        average_score,
        scores: analysis.articles,
    };
    let document = ReportDocument::new("seo", "Article SEO Report")
        .summary(&summary)?
        .data("articles", &summary.scores)?
        .section("Scores", lines);

    let mut result = finish(
        CommandSummary::Seo(summary),
        issues,
        0,
        0,
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
