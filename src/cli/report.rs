//! Console output for command results.
//!
//! Issues are printed cargo-style (severity, location, source line with a
//! caret, `= note:` and `= hint:` lines). Commands that edit or generate
//! files print a short summary of what was (or would be) done instead.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, DeleteKey, InsertAlt},
    commands::{
        CleanSummary, CommandResult, CommandSummary, FixAltSummary, ImagesSummary, InitSummary,
        KeysSummary, MonitorCheckSummary, PdfSummary, SeoSummary,
    },
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Init(summary) | CommandSummary::MonitorInit(summary) => {
            print_init(summary, writer);
        }
        CommandSummary::Clean(summary) => print_clean(summary, writer),
        CommandSummary::FixAlt(summary) => print_fix_alt(summary, verbose, writer),
        CommandSummary::Pdf(summary) => print_pdf(summary, verbose, writer),
        summary => {
            report_to(&result.issues, writer);
            match summary {
                CommandSummary::Keys(summary) => print_keys(summary, writer),
                CommandSummary::Images(summary) => print_images(summary, writer),
                CommandSummary::Seo(summary) => print_seo(summary, verbose, writer),
                CommandSummary::MonitorCheck(summary) => print_monitor_check(summary, writer),
                _ => {}
            }
            if result.issues.is_empty() {
                print_success_to(
                    result.source_files_checked,
                    result.locale_files_checked,
                    writer,
                );
            }
        }
    }

    if let Some(paths) = &result.report {
        let _ = writeln!(
            writer,
            "Report written to {} and {}",
            paths.json.display().to_string().cyan(),
            paths.markdown.display().to_string().cyan()
        );
    }
}

/// Print issues to a custom writer, followed by the problem count.
///
/// Issues are expected in display order (see `compare_issues`).
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, locale_files: usize, writer: &mut W) {
    let checked = match (source_files, locale_files) {
        (0, 0) => "Checked".to_string(),
        (source, 0) => format!("Checked {} source {}", source, plural(source, "file")),
        (0, locale) => format!("Checked {} locale {}", locale, plural(locale, "file")),
        (source, locale) => format!(
            "Checked {} source {}, {} locale {}",
            source,
            plural(source, "file"),
            locale,
            plural(locale, "file")
        ),
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("{} - no issues found", checked).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
        Severity::Info => "info".bold().blue(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line == 0 {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    } else {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
            Severity::Info => "^".blue(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

/// Info findings are listed but not counted as problems.
fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let count = |severity: Severity| {
        issues
            .iter()
            .filter(|i| i.report_severity() == severity)
            .count()
    };
    let total_errors = count(Severity::Error);
    let total_warnings = count(Severity::Warning);
    let total_info = count(Severity::Info);
    let total_problems = total_errors + total_warnings;

    let info_suffix = if total_info > 0 {
        format!(", {} {}", total_info, "info".blue())
    } else {
        String::new()
    };

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {}){}",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow(),
            info_suffix
        );
    } else {
        let _ = writeln!(
            writer,
            "{} no problems ({} {})",
            SUCCESS_MARK.green(),
            total_info,
            "info".blue()
        );
    }
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            Some(&ctx.source_line),
        ),
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col(), None),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path).green()
            );
        }
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if !summary.is_apply {
        if !summary.unused_issues.is_empty() {
            DeleteKey::preview_to(&summary.unused_issues, writer);
        }
        if !summary.orphan_issues.is_empty() {
            DeleteKey::preview_to(&summary.orphan_issues, writer);
        }
    }

    let total = summary.unused_count + summary.orphan_count;
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused or orphan keys found".green()
        );
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s) (processed {} key(s)).",
            "Deleted".green().bold(),
            summary.applied_count,
            summary.file_count,
            total
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} key(s) in {} file(s).",
            "Would delete".yellow().bold(),
            total,
            summary.file_count
        );
    }
    if summary.unused_count > 0 {
        let _ = writeln!(writer, "  - unused: {} key(s)", summary.unused_count);
    }
    if summary.orphan_count > 0 {
        let _ = writeln!(writer, "  - orphan: {} key(s)", summary.orphan_count);
    }
    if !summary.is_apply {
        let _ = writeln!(writer, "Run with {} to delete these keys.", "--apply".cyan());
    }
}

fn print_fix_alt<W: Write>(summary: &FixAltSummary, verbose: bool, writer: &mut W) {
    if (!summary.is_apply || verbose) && !summary.fixes.is_empty() {
        InsertAlt::preview_to(&summary.fixes, writer);
    }

    if summary.fix_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - every image has alt text",
                summary.files_scanned,
                plural(summary.files_scanned, "file")
            )
            .green()
        );
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} alt attribute(s) in {} file(s) (processed {} image(s)).",
            "Inserted".green().bold(),
            summary.applied_count,
            summary.file_count,
            summary.fix_count
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} alt attribute(s) in {} file(s).",
            "Would insert".yellow().bold(),
            summary.fix_count,
            summary.file_count
        );
        let _ = writeln!(writer, "Run with {} to write them.", "--apply".cyan());
    }
}

fn print_pdf<W: Write>(summary: &PdfSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for file in &summary.generated {
            let _ = writeln!(writer, "  {} {}", "+".green(), file);
        }
    }
    let _ = writeln!(
        writer,
        "{} {} file(s) from {} resource(s) in {}",
        "Generated".green().bold(),
        summary.generated.len(),
        summary.resources,
        summary.out_dir
    );
    if !summary.skipped.is_empty() {
        let _ = writeln!(
            writer,
            "  - kept {} existing file(s), use {} to overwrite",
            summary.skipped.len(),
            "--force".cyan()
        );
    }
}

fn print_keys<W: Write>(summary: &KeysSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} key(s) used in {} of {} file(s), {} defined",
        "Keys:".bold(),
        summary.keys_used,
        summary.files_with_keys,
        summary.files_scanned,
        summary.keys_defined
    );
    let _ = writeln!(
        writer,
        "  - missing: {}, unused: {}, dynamic: {}",
        summary.missing, summary.unused, summary.dynamic
    );
}

fn print_images<W: Write>(summary: &ImagesSummary, writer: &mut W) {
    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {} image(s): {} missing alt, {} empty, {} generic, {} to improve",
        "Images:".bold(),
        stats.total_images,
        stats.missing_alt,
        stats.empty_alt,
        stats.generic_alt,
        stats.seo_alt
    );
    for recommendation in &summary.recommendations {
        let _ = writeln!(
            writer,
            "  - [{}] {} ({})",
            recommendation.priority, recommendation.message, recommendation.action
        );
    }
}

fn print_seo<W: Write>(summary: &SeoSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for article in &summary.scores {
            let _ = writeln!(
                writer,
                "  {:>3}/100  {}",
                article.score,
                article.file
            );
        }
    }
    let _ = writeln!(
        writer,
        "{} {} article(s), average score {:.1}",
        "SEO:".bold(),
        summary.articles,
        summary.average_score
    );
    if summary.skipped > 0 {
        let _ = writeln!(writer, "  - skipped: {} unreadable article(s)", summary.skipped);
    }
}

fn print_monitor_check<W: Write>(summary: &MonitorCheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} metric(s) checked, {} breached",
        "Metrics:".bold(),
        summary.checked,
        summary.breaches
    );
    if !summary.without_baseline.is_empty() {
        let _ = writeln!(
            writer,
            "  - no baseline yet: {}",
            summary.without_baseline.join(", ")
        );
    }
    if !summary.unknown.is_empty() {
        let _ = writeln!(writer, "  - not configured: {}", summary.unknown.join(", "));
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::helper::finish;
    use crate::core::{MessageContext, MessageLocation, SourceContext, SourceLocation};
    use crate::issues::{
        HardcodeKind, HardcodedTextIssue, MissingKeyIssue, OrphanKeyIssue, SeoIssue,
        SeoIssueKind, UnusedKeyIssue,
    };

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render(issues: &[Issue]) -> String {
        let mut output = Vec::new();
        report_to(issues, &mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn hardcoded(file: &str, line: usize, col: usize, source: &str, text: &str) -> Issue {
        Issue::HardcodedText(HardcodedTextIssue {
            context: SourceContext::new(SourceLocation::new(file, line, col), source),
            kind: HardcodeKind::JsxText,
            text: text.to_string(),
            suggested_key: "app.page.content".to_string(),
        })
    }

    fn unused(key: &str, value: &str) -> UnusedKeyIssue {
        UnusedKeyIssue {
            context: MessageContext::new(
                MessageLocation::new("./messages/zh.json", 5, 3),
                key,
                value,
            ),
        }
    }

    #[test]
    fn test_report_empty() {
        let mut output = Vec::new();
        report_to(&[], &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn test_report_hardcoded_issue() {
        let stripped = render(&[hardcoded(
            "./app/page.tsx",
            10,
            9,
            "    <h1>经期指南</h1>",
            "经期指南",
        )]);

        assert!(stripped.contains("warning: \"经期指南\"  jsx-text"));
        assert!(stripped.contains("--> ./app/page.tsx:10:9"));
        assert!(stripped.contains("10 |     <h1>经期指南</h1>"));
        assert!(stripped.contains("= hint: move the text to messages and use t('app.page.content')"));
    }

    #[test]
    fn test_caret_accounts_for_wide_characters() {
        // "经期" is 4 columns wide, so the caret sits after 4 + 7 columns.
        let stripped = render(&[hardcoded(
            "./app/page.tsx",
            1,
            10,
            "经期 = '<p>指南",
            "指南",
        )]);
        let caret_line = stripped.lines().find(|l| l.contains('^')).unwrap();
        assert_eq!(caret_line, "  |            ^");
    }

    #[test]
    fn test_report_missing_key() {
        let issue = Issue::MissingKey(MissingKeyIssue {
            context: SourceContext::new(
                SourceLocation::new("./app/form.tsx", 20, 5),
                "t('form.email')",
            ),
            key: "form.email".to_string(),
            missing_in: vec!["en".to_string(), "zh".to_string()],
        });

        let stripped = render(&[issue]);
        assert!(stripped.contains("error: \"form.email\"  missing-key"));
        assert!(stripped.contains("= note: missing in: en, zh"));
        assert!(stripped.contains("1 problems (1 error, 0 warnings)"));
    }

    #[test]
    fn test_report_orphan_key() {
        let issue = Issue::OrphanKey(OrphanKeyIssue {
            context: MessageContext::new(
                MessageLocation::new("./messages/en.json", 10, 3),
                "common.orphan",
                "Orphan",
            ),
            locale: "en".to_string(),
        });

        let stripped = render(&[issue]);
        assert!(stripped.contains("\"common.orphan\"  orphan-key"));
        assert!(stripped.contains("--> ./messages/en.json:10:3"));
        assert!(stripped.contains("in en (\"Orphan\")"));
    }

    #[test]
    fn test_file_level_issue_has_no_position() {
        let issue = Issue::Seo(SeoIssue {
            file_path: "content/articles/zh/cramps.md".to_string(),
            kind: SeoIssueKind::MissingH1,
        });

        let stripped = render(&[issue]);
        assert!(stripped.contains("--> content/articles/zh/cramps.md\n"));
        assert!(!stripped.contains(":0:0"));
    }

    #[test]
    fn test_summary_counts_info_separately() {
        let info = Issue::HardcodedText(HardcodedTextIssue {
            context: SourceContext::new(SourceLocation::new("./lib/a.ts", 1, 1), "'经期'"),
            kind: HardcodeKind::ChineseString,
            text: "经期".to_string(),
            suggested_key: "content".to_string(),
        });
        let warning = hardcoded("./app/b.tsx", 2, 1, "<p>你好</p>", "你好");

        let stripped = render(&[info.clone(), warning]);
        assert!(stripped.contains("info: \"经期\""));
        assert!(stripped.contains("1 problems (0 errors, 1 warning), 1 info"));

        let stripped = render(&[info]);
        assert!(stripped.contains("no problems (1 info)"));
    }

    #[test]
    fn test_print_success() {
        let mut output = Vec::new();
        print_success_to(10, 3, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stripped.contains("Checked 10 source files, 3 locale files - no issues found"));

        let mut output = Vec::new();
        print_success_to(1, 0, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stripped.contains("Checked 1 source file - no issues found"));
    }

    #[test]
    fn test_print_clean_dry_run_previews_keys() {
        let summary = CleanSummary {
            unused_count: 1,
            orphan_count: 0,
            file_count: 1,
            is_apply: false,
            applied_count: 0,
            unused_issues: vec![unused("common.old", "旧")],
            orphan_issues: Vec::new(),
        };
        let result = finish(CommandSummary::Clean(summary), Vec::new(), 0, 2, false);

        let mut output = Vec::new();
        print_to(&result, false, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("- ./messages/zh.json:5  common.old (\"旧\")"));
        assert!(stripped.contains("Would delete 1 key(s) in 1 file(s)."));
        assert!(stripped.contains("Run with --apply to delete these keys."));
    }

    #[test]
    fn test_print_init_error() {
        let result = finish(
            CommandSummary::Init(InitSummary {
                path: ".i18nkitrc.json".to_string(),
                error: Some(".i18nkitrc.json already exists".to_string()),
            }),
            Vec::new(),
            0,
            0,
            true,
        );

        let mut output = Vec::new();
        print_to(&result, false, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());
        assert_eq!(stripped, "\u{2718} .i18nkitrc.json already exists\n");
    }

    #[test]
    fn test_print_monitor_check_lists_skipped_metrics() {
        let summary = MonitorCheckSummary {
            metrics_file: "metrics.json".to_string(),
            checked: 3,
            breaches: 0,
            unknown: vec!["seo.bounceRate".to_string()],
            without_baseline: vec!["seo.organicTraffic".to_string()],
        };
        let result = finish(CommandSummary::MonitorCheck(summary), Vec::new(), 0, 0, true);

        let mut output = Vec::new();
        print_to(&result, false, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stripped.contains("Metrics: 3 metric(s) checked, 0 breached"));
        assert!(stripped.contains("no baseline yet: seo.organicTraffic"));
        assert!(stripped.contains("not configured: seo.bounceRate"));
        assert!(stripped.contains("no issues found"));
    }
}
