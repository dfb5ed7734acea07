//! Medical-content compliance checks on user-facing strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::{LocaleMessages, SourceFile, extract::FileCursor, suppressions::SuppressibleRule},
    issues::{ComplianceIssue, ComplianceKind, MissingDisclaimerIssue},
};

/// Quoted strings, template literals, and JSX text.
static TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'([^'\n]*)'|"([^"\n]*)"|`([^`]*)`|>([^<>{}]+)<"#).unwrap()
});

static MEDICAL_ADVICE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\byou should\b|\bwe recommend\b|\bprescription\b|\bdoctors?\b.*\bprescribe").unwrap()
});

static DOSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:take|dose|dosage)\b.*?\d+(?:\.\d+)?\s*mg\b").unwrap()
});

static PROHIBITED_CLAIM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:cure|cures|guarantee|guaranteed|promise)\b").unwrap()
});

fn checks() -> [(ComplianceKind, &'static Regex); 3] {
    [
        (ComplianceKind::Dosage, &*DOSAGE_REGEX),
        (ComplianceKind::MedicalAdvice, &*MEDICAL_ADVICE_REGEX),
        (ComplianceKind::ProhibitedClaim, &*PROHIBITED_CLAIM_REGEX),
    ]
}

/// Scan the string contents of one file for advice, dosage, and claims.
pub fn scan_compliance(file: &SourceFile) -> Vec<ComplianceIssue> {
    let cursor = FileCursor::new(&file.path, &file.content);
    let mut issues = Vec::new();

    for caps in TEXT_REGEX.captures_iter(&file.content) {
        let Some(text) = (1..=4).find_map(|i| caps.get(i)) else {
            continue;
        };
        if text.as_str().trim().is_empty() {
            continue;
        }

        for (kind, regex) in checks() {
            for m in regex.find_iter(text.as_str()) {
                let offset = text.start() + m.start();
                if cursor.is_skipped(offset, &file.suppressions, SuppressibleRule::Hardcode) {
                    continue;
                }
                issues.push(ComplianceIssue {
                    context: cursor.context_at(offset),
                    kind,
                    matched: m.as_str().to_string(),
                });
            }
        }
    }

    issues.sort_by_key(|i| (i.context.line(), i.context.col()));
    issues
}

/// The primary locale must carry a medical disclaimer somewhere.
///
/// Any key containing `disclaimer`, or any value mentioning "medical advice",
/// counts.
pub fn check_disclaimer(primary: &LocaleMessages) -> Option<MissingDisclaimerIssue> {
    let has_disclaimer = primary.entries.iter().any(|(key, entry)| {
        key.to_lowercase().contains("disclaimer")
            || entry.context.value.to_lowercase().contains("medical advice")
    });

    (!has_disclaimer).then(|| MissingDisclaimerIssue {
        file_path: primary.file_path.clone(),
        locale: primary.locale.clone(),
    })
}
