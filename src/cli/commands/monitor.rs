use std::fs;

use anyhow::{Context, Result};
use chrono::Local;

use super::{
    CommandResult, CommandSummary, InitSummary, MonitorCheckSummary,
    helper::{finish, write_report},
};
use crate::{
    cli::args::{MonitorCheckCommand, MonitorInitCommand},
    core::{
        CheckContext,
        monitoring::{MONITORING_CONFIG_PATH, MonitoringConfig},
    },
    issues::Issue,
    reports::ReportDocument,
    rules::monitor::check_metric_issues,
};

/// Write the baseline monitoring config, refusing to overwrite it without `--force`.
pub fn monitor_init(cmd: MonitorInitCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let path = ctx.resolve_path(MONITORING_CONFIG_PATH);
    let display = path.to_string_lossy().to_string();

    let error = if path.exists() && !cmd.force {
        Some(format!("{} already exists, use --force to overwrite", display))
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let config = MonitoringConfig {
            generated_at: Some(Local::now().to_rfc3339()),
            ..MonitoringConfig::default()
        };
        let content =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        fs::write(&path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", display))?;
        None
    };

    Ok(finish(
        CommandSummary::MonitorInit(InitSummary {
            path: display,
            error,
        }),
        Vec::new(),
        0,
        0,
        true,
    ))
}

pub fn monitor_check(cmd: MonitorCheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let evaluation = check_metric_issues(&ctx, &cmd.metrics)?;

    let lines = evaluation
        .breaches
        .iter()
        .map(|b| format!("- `{}`: {} ({})", b.metric, b.value, b.action))
        .collect();
    let summary = MonitorCheckSummary {
        metrics_file: cmd.metrics.to_string_lossy().to_string(),
        checked: evaluation.checked,
        breaches: evaluation.breaches.len(),
        unknown: evaluation.unknown,
        without_baseline: evaluation.without_baseline,
    };
    let document = ReportDocument::new("monitor", "Metric Check Report")
        .summary(&summary)?
        .section("Breaches", lines);

    let issues: Vec<Issue> = evaluation.breaches.into_iter().map(Issue::from).collect();
    let mut result = finish(
        CommandSummary::MonitorCheck(summary),
        issues,
        0,
        0,
        true,
    );
    write_report(&ctx, &cmd.report, &mut result, document)?;
    Ok(result)
}
