//! Monitoring baselines and metric evaluation.
//!
//! `monitor init` writes the baseline config; `monitor check` compares an
//! observed-metrics file against it:
//!
//! ```json
//! { "seo": { "indexRate": 0.44 }, "performance": { "lcp": 6400 } }
//! ```

use std::{collections::BTreeMap, fmt, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::issues::MetricBreachIssue;

/// Config location, relative to the project root.
pub const MONITORING_CONFIG_PATH: &str = "monitoring/config/monitoring.json";

/// How an observed value is compared with the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    /// Breached when the value exceeds the threshold.
    Above,
    /// Breached when the value falls under the threshold.
    Below,
    /// Breached when the value falls more than `threshold` (a negative
    /// fraction) below the baseline.
    DropBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricAction {
    Alert,
    Rollback,
}

impl fmt::Display for MetricAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricAction::Alert => write!(f, "alert"),
            MetricAction::Rollback => write!(f, "rollback"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInterval {
    Minutely,
    Hourly,
    Daily,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricConfig {
    /// `null` until a baseline has been measured.
    pub baseline: Option<f64>,
    pub threshold: f64,
    pub comparison: Comparison,
    pub action: MetricAction,
    pub description: String,
    pub check_interval: CheckInterval,
}

impl MetricConfig {
    fn new(
        baseline: Option<f64>,
        threshold: f64,
        comparison: Comparison,
        action: MetricAction,
        check_interval: CheckInterval,
        description: &str,
    ) -> Self {
        Self {
            baseline,
            threshold,
            comparison,
            action,
            description: description.to_string(),
            check_interval,
        }
    }

    /// Whether `value` breaches the threshold, or `None` when a drop cannot
    /// be computed because no baseline exists.
    pub fn is_breached(&self, value: f64) -> Option<bool> {
        match self.comparison {
            Comparison::Above => Some(value > self.threshold),
            Comparison::Below => Some(value < self.threshold),
            Comparison::DropBy => self
                .baseline
                .map(|baseline| value < baseline * (1.0 + self.threshold)),
        }
    }
}

/// Metrics by group (`seo`, `performance`, `system`) and name.
pub type MetricGroups<T> = BTreeMap<String, BTreeMap<String, T>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub metrics: MetricGroups<MetricConfig>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        use CheckInterval::*;
        use Comparison::*;
        use MetricAction::*;

        let group = |entries: Vec<(&str, MetricConfig)>| -> BTreeMap<String, MetricConfig> {
            entries
                .into_iter()
                .map(|(name, config)| (name.to_string(), config))
                .collect()
        };

        let mut metrics = BTreeMap::new();
        metrics.insert(
            "seo".to_string(),
            group(vec![
                (
                    "indexRate",
                    MetricConfig::new(Some(0.482), -0.05, DropBy, Alert, Daily, "Alert when the index rate drops more than 5%"),
                ),
                (
                    "organicTraffic",
                    MetricConfig::new(None, -0.1, DropBy, Rollback, Daily, "Roll back when organic traffic drops more than 10%"),
                ),
                (
                    "duplicatePages",
                    MetricConfig::new(Some(11.0), 15.0, Above, Rollback, Daily, "Roll back above 15 duplicate pages"),
                ),
                (
                    "canonicalErrors",
                    MetricConfig::new(Some(28.0), 35.0, Above, Alert, Daily, "Alert above 35 canonical errors"),
                ),
            ]),
        );
        metrics.insert(
            "performance".to_string(),
            group(vec![
                (
                    "lcp",
                    MetricConfig::new(Some(5000.0), 6000.0, Above, Rollback, Hourly, "Roll back when LCP exceeds 6 s"),
                ),
                (
                    "fid",
                    MetricConfig::new(Some(150.0), 300.0, Above, Alert, Hourly, "Alert when FID exceeds 300 ms"),
                ),
                (
                    "cls",
                    MetricConfig::new(Some(0.15), 0.25, Above, Alert, Hourly, "Alert when CLS exceeds 0.25"),
                ),
                (
                    "mobileScore",
                    MetricConfig::new(Some(45.0), 35.0, Below, Alert, Daily, "Alert when the mobile score falls below 35"),
                ),
                (
                    "desktopScore",
                    MetricConfig::new(Some(94.0), 85.0, Below, Alert, Daily, "Alert when the desktop score falls below 85"),
                ),
            ]),
        );
        metrics.insert(
            "system".to_string(),
            group(vec![
                (
                    "errorRate",
                    MetricConfig::new(Some(0.01), 0.05, Above, Rollback, Minutely, "Roll back when the error rate exceeds 5%"),
                ),
                (
                    "responseTime",
                    MetricConfig::new(Some(2000.0), 5000.0, Above, Alert, Minutely, "Alert when responses take longer than 5 s"),
                ),
                (
                    "uptime",
                    MetricConfig::new(Some(0.99), 0.95, Below, Alert, Minutely, "Alert when uptime falls below 95%"),
                ),
            ]),
        );

        Self {
            generated_at: None,
            metrics,
        }
    }
}

impl MonitoringConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read monitoring config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse monitoring config: {}", path.display()))
    }
}

/// Observed values, grouped like the config.
pub fn load_observed_metrics(path: &Path) -> Result<MetricGroups<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metrics file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse metrics file: {}", path.display()))
}

/// Outcome of comparing observed metrics with the config.
#[derive(Debug, Default)]
pub struct MetricEvaluation {
    pub checked: usize,
    pub breaches: Vec<MetricBreachIssue>,
    /// Observed metrics with no config entry, as `group.name`.
    pub unknown: Vec<String>,
    /// Drop metrics that have no baseline yet.
    pub without_baseline: Vec<String>,
}

/// Compare every observed value against its configured threshold.
///
/// `file_path` is the metrics file, used as the location of each breach.
pub fn evaluate_metrics(
    config: &MonitoringConfig,
    observed: &MetricGroups<f64>,
    file_path: &str,
) -> MetricEvaluation {
    let mut evaluation = MetricEvaluation::default();

    for (group, values) in observed {
        for (name, &value) in values {
            let metric = format!("{}.{}", group, name);
            let Some(metric_config) = config.metrics.get(group).and_then(|g| g.get(name)) else {
                evaluation.unknown.push(metric);
                continue;
            };

            match metric_config.is_breached(value) {
                None => evaluation.without_baseline.push(metric),
                Some(breached) => {
                    evaluation.checked += 1;
                    if breached {
                        evaluation.breaches.push(MetricBreachIssue {
                            file_path: file_path.to_string(),
                            metric,
                            value,
                            baseline: metric_config.baseline,
                            threshold: metric_config.threshold,
                            comparison: metric_config.comparison,
                            action: metric_config.action,
                            description: metric_config.description.clone(),
                        });
                    }
                }
            }
        }
    }

    evaluation
}
