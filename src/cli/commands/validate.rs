use anyhow::Result;

use super::{
    CommandResult, CommandSummary, ValidateSummary,
    helper::{finish, write_report},
};
use crate::{
    cli::args::ScanCommand, core::CheckContext, reports::ReportDocument,
    rules::validate::check_validate_issues,
};

pub fn validate(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let issues = check_validate_issues(&ctx)?;
    let messages = ctx.messages()?;

    let summary = ValidateSummary {
        primary_locale: ctx.config.primary_locale.clone(),
        locales: messages.all_messages.keys().cloned().collect(),
        keys_defined: messages.primary_messages.len(),
    };
    let lines = messages
        .all_messages
        .iter()
        .map(|(locale, entries)| format!("- `{}`: {} key(s)", locale, entries.len()))
        .collect();
    let document = ReportDocument::new("validate", "Translation Validation Report")
        .summary(&summary)?
        .section("Locales", lines);

    let mut result = finish(
        CommandSummary::Validate(summary),
        issues,
        0,
        messages.all_messages.len(),
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
