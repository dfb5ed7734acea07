//! Metric breach rule.

use std::path::Path;

use anyhow::{Result, bail};

use crate::core::{
    CheckContext,
    monitoring::{
        MONITORING_CONFIG_PATH, MetricEvaluation, MonitoringConfig, evaluate_metrics,
        load_observed_metrics,
    },
};

/// Load the monitoring config and the observed metrics, then compare them.
///
/// Fails when the config has not been written yet.
pub fn check_metric_issues(ctx: &CheckContext, metrics_file: &Path) -> Result<MetricEvaluation> {
    let config_path = ctx.resolve_path(MONITORING_CONFIG_PATH);
    if !config_path.exists() {
        bail!(
            "Monitoring config '{}' not found, run `i18nkit monitor init` first",
            config_path.display()
        );
    }
    let config = MonitoringConfig::load(&config_path)?;
    let observed = load_observed_metrics(metrics_file)?;
    Ok(evaluate_metrics(
        &config,
        &observed,
        &metrics_file.to_string_lossy(),
    ))
}
