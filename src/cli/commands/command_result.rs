use serde::Serialize;

use crate::{
    issues::{Issue, OrphanKeyIssue, UnusedKeyIssue},
    reports::ReportPaths,
    rules::{
        images::{AltFix, ImageStats, Recommendation},
        seo::ArticleSeo,
    },
};

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Hardcode(HardcodeSummary),
    Urls(UrlsSummary),
    Keys(KeysSummary),
    Validate(ValidateSummary),
    Clean(CleanSummary),
    Images(ImagesSummary),
    FixAlt(FixAltSummary),
    Seo(SeoSummary),
    Pdf(PdfSummary),
    MonitorInit(InitSummary),
    MonitorCheck(MonitorCheckSummary),
}

/// Outcome of writing a generated config file.
#[derive(Debug)]
pub struct InitSummary {
    pub path: String,
    /// Set when the file already exists and was left alone.
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardcodeSummary {
    pub files_scanned: usize,
    pub compliance: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlsSummary {
    pub files_scanned: usize,
    pub hosts: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysSummary {
    pub files_scanned: usize,
    pub files_with_keys: usize,
    pub keys_used: usize,
    pub keys_defined: usize,
    pub missing: usize,
    pub unused: usize,
    pub dynamic: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSummary {
    pub primary_locale: String,
    pub locales: Vec<String>,
    pub keys_defined: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanSummary {
    pub unused_count: usize,
    pub orphan_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    /// Keys actually deleted; 0 on a dry run.
    pub applied_count: usize,
    #[serde(skip)]
    pub unused_issues: Vec<UnusedKeyIssue>,
    #[serde(skip)]
    pub orphan_issues: Vec<OrphanKeyIssue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesSummary {
    #[serde(flatten)]
    pub stats: ImageStats,
    pub files_scanned: usize,
    #[serde(skip)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixAltSummary {
    pub files_scanned: usize,
    pub fix_count: usize,
    pub file_count: usize,
    pub is_apply: bool,
    pub applied_count: usize,
    #[serde(skip)]
    pub fixes: Vec<AltFix>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSummary {
    pub articles: usize,
    pub skipped: usize,
    pub average_score: f64,
    #[serde(skip)]
    pub scores: Vec<ArticleSeo>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfSummary {
    pub resources: usize,
    pub out_dir: String,
    pub generated: Vec<String>,
    /// Existing files kept because `--force` was not given.
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorCheckSummary {
    pub metrics_file: String,
    pub checked: usize,
    pub breaches: usize,
    pub unknown: Vec<String>,
    pub without_baseline: Vec<String>,
}

/// Result of running an i18nkit command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (dry runs and generators).
    pub exit_on_errors: bool,
    /// All issues found, sorted by location.
    pub issues: Vec<Issue>,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
    /// Number of locale files that were checked, 0 when none were read.
    pub locale_files_checked: usize,
    /// Report files, unless `--no-report` was given.
    pub report: Option<ReportPaths>,
}
