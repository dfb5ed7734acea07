use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    CommandResult, CommandSummary, PdfSummary,
    helper::{finish, write_report},
};
use crate::{
    cli::args::PdfCommand,
    core::{
        CheckContext,
        pdf::{SiteInfo, load_resources, output_file_name, render_html},
    },
    reports::ReportDocument,
};

/// Render one HTML document per resource and locale.
///
/// Existing files are kept unless `--force` is given.
pub fn pdf(cmd: PdfCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let resources = load_resources(&cmd.resources)?;
    let out_dir = ctx.resolve_path(&cmd.out.to_string_lossy());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let site = SiteInfo {
        name: &ctx.config.site_name,
        url: &ctx.config.site_url,
    };

    let mut generated = Vec::new();
    let mut skipped = Vec::new();
    for resource in &resources {
        for locale in resource.locales() {
            let path = out_dir.join(output_file_name(&resource.id, locale, &cmd.base_locale));
            let display = path.to_string_lossy().to_string();
            if path.exists() && !cmd.force {
                if ctx.verbose {
                    eprintln!("{} {} exists, skipping", "note:".bold().cyan(), display);
                }
                skipped.push(display);
                continue;
            }
            fs::write(&path, render_html(resource, locale, &site))
                .with_context(|| format!("Failed to write file: {}", display))?;
            generated.push(display);
        }
    }

    let lines = generated
        .iter()
        .map(|file| format!("- generated `{}`", file))
        .chain(skipped.iter().map(|file| format!("- kept `{}`", file)))
        .collect();
    let summary = PdfSummary {
        resources: resources.len(),
        out_dir: out_dir.to_string_lossy().to_string(),
        generated,
        skipped,
    };
    let document = ReportDocument::new("pdf", "Printable Resources Report")
        .summary(&summary)?
        .section("Files", lines);

    let mut result = finish(CommandSummary::Pdf(summary), Vec::new(), 0, 0, false);
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
