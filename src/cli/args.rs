//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all i18nkit commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `init`: Write a default `.i18nkitrc.json`
//! - `hardcode`: Find hardcoded locale text (and medical-content issues with `--compliance`)
//! - `urls`: Find absolute URLs pointing at the site's own hosts
//! - `keys`: Check translation key usage against the locale files
//! - `validate`: Check locale files against each other
//! - `clean`: Remove unused or orphan keys from locale files
//! - `images`: Audit image alt text
//! - `fix-alt`: Generate missing alt text
//! - `seo`: Score Markdown articles
//! - `pdf`: Render printable HTML for downloadable resources
//! - `monitor`: Write or check the monitoring baseline

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Hardcode(cmd)) => cmd.common.verbose,
            Some(Command::Urls(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Validate(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Images(cmd)) => cmd.common.verbose,
            Some(Command::FixAlt(cmd)) => cmd.common.verbose,
            Some(Command::Seo(cmd)) => cmd.common.verbose,
            Some(Command::Pdf(cmd)) => cmd.common.verbose,
            Some(Command::Monitor(cmd)) => match &cmd.action {
                MonitorAction::Init(init) => init.common.verbose,
                MonitorAction::Check(check) => check.common.verbose,
            },
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Project root directory (overrides the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Do not write the JSON and Markdown reports
    #[arg(long)]
    pub no_report: bool,
}

#[derive(Debug, Args)]
pub struct HardcodeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Also check medical-content compliance and the disclaimer
    #[arg(long)]
    pub compliance: bool,
}

/// Arguments of the commands that only analyse and report.
#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum CleanRule {
    Unused,
    Orphan,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Actually delete keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Rules to clean (default: all), e.g. --rules unused,orphan
    #[arg(long, value_enum, value_delimiter = ',')]
    pub rules: Vec<CleanRule>,
}

#[derive(Debug, Args)]
pub struct FixAltCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,

    /// Actually write the alt attributes (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct PdfCommand {
    /// JSON file listing the resources to render
    pub resources: PathBuf,

    /// Output directory, relative to the project root
    #[arg(long, default_value = "public/pdf-files")]
    pub out: PathBuf,

    /// Locale written without a locale suffix
    #[arg(long, default_value = "zh")]
    pub base_locale: String,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Debug, Args)]
pub struct MonitorCommand {
    #[command(subcommand)]
    pub action: MonitorAction,
}

#[derive(Debug, Subcommand)]
pub enum MonitorAction {
    /// Write monitoring/config/monitoring.json with the baseline metrics
    Init(MonitorInitCommand),
    /// Compare observed metrics against the monitoring config
    Check(MonitorCheckCommand),
}

#[derive(Debug, Args)]
pub struct MonitorInitCommand {
    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MonitorCheckCommand {
    /// JSON file with observed values, grouped like the config
    pub metrics: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .i18nkitrc.json configuration file
    Init,
    /// Find hardcoded locale text in source files
    Hardcode(HardcodeCommand),
    /// Find hardcoded absolute URLs to the site's own hosts
    Urls(ScanCommand),
    /// Check translation keys used in code against the locale files
    Keys(ScanCommand),
    /// Check locale files for missing, orphan and suspicious translations
    Validate(ScanCommand),
    /// Remove unused or orphan translation keys from JSON files
    Clean(CleanCommand),
    /// Audit image alt text
    Images(ScanCommand),
    /// Generate alt text for images without one
    FixAlt(FixAltCommand),
    /// Check Markdown articles for SEO problems
    Seo(ScanCommand),
    /// Render printable HTML documents for downloadable resources
    Pdf(PdfCommand),
    /// Monitoring baseline config and metric checks
    Monitor(MonitorCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_rules_accept_comma_list() {
        let args =
            Arguments::try_parse_from(["i18nkit", "clean", "--apply", "--rules", "unused,orphan"])
                .unwrap();
        let Some(Command::Clean(cmd)) = args.command else {
            panic!("expected clean");
        };
        assert!(cmd.apply);
        assert_eq!(cmd.rules, vec![CleanRule::Unused, CleanRule::Orphan]);
    }

    #[test]
    fn test_pdf_defaults() {
        let args = Arguments::try_parse_from(["i18nkit", "pdf", "resources.json", "-v"]).unwrap();
        assert!(args.verbose());
        let Some(Command::Pdf(cmd)) = args.command else {
            panic!("expected pdf");
        };
        assert_eq!(cmd.out, PathBuf::from("public/pdf-files"));
        assert_eq!(cmd.base_locale, "zh");
        assert!(!cmd.force);
    }

    #[test]
    fn test_monitor_check_takes_metrics_file() {
        let args =
            Arguments::try_parse_from(["i18nkit", "monitor", "check", "m.json", "--no-report"])
                .unwrap();
        let Some(Command::Monitor(cmd)) = args.command else {
            panic!("expected monitor");
        };
        let MonitorAction::Check(check) = cmd.action else {
            panic!("expected check");
        };
        assert_eq!(check.metrics, PathBuf::from("m.json"));
        assert!(check.report.no_report);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }
}
