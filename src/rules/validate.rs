//! Locale consistency rules.
//!
//! The primary locale is the source of truth. Every other locale is
//! compared against it key by key, and every value is checked on its own.

use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

use crate::{
    core::{AllLocaleMessages, CheckContext, LocaleMessages, LocaleTypeMismatch},
    issues::{
        Issue, KeyNamingIssue, KeyNamingKind, MissingTranslationIssue, OrphanKeyIssue,
        TypeMismatchIssue, ValueIssue, ValueIssueKind,
    },
    rules::helpers::compare_message_contexts,
    utils::{char_len, contains_alphabetic},
};

/// Longest allowed key, in characters.
pub const MAX_KEY_LENGTH: usize = 100;

/// Locales checked for stray English words.
const CJK_LOCALES: &[&str] = &["zh", "ja", "ko"];

static UNFINISHED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:TODO|TBD|FIXME)\b|\[translate\]").unwrap());

/// Bracketed asides, placeholders and tags are allowed to hold English.
static ALLOWED_ENGLISH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)|（[^）]*）|\{[^}]*\}|<[^>]*>").unwrap());

static ENGLISH_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{3,}").unwrap());

static KEY_SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9]*|[0-9]+)$").unwrap());

/// Run every validate rule.
///
/// Fails when fewer than two locales are present.
pub fn check_validate_issues(ctx: &CheckContext) -> Result<Vec<Issue>> {
    let messages = ctx.messages()?;
    let all = &messages.all_messages;
    if all.len() < 2 {
        bail!(
            "At least two locales are required in '{}', found {}",
            ctx.message_dir().display(),
            all.len()
        );
    }
    let primary_locale = &ctx.config.primary_locale;

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(
        check_missing_translations(primary_locale, all)
            .into_iter()
            .map(Issue::from),
    );
    issues.extend(check_orphan_keys(primary_locale, all).into_iter().map(Issue::from));
    issues.extend(
        check_type_mismatches(primary_locale, all)
            .into_iter()
            .map(Issue::from),
    );
    issues.extend(check_values(primary_locale, all).into_iter().map(Issue::from));
    issues.extend(
        check_key_naming(&messages.primary_messages)
            .into_iter()
            .map(Issue::from),
    );
    Ok(issues)
}

/// Orphan keys only; shared with `clean`.
pub fn check_orphan_keys_issues(ctx: &CheckContext) -> Result<Vec<OrphanKeyIssue>> {
    let messages = ctx.messages()?;
    Ok(check_orphan_keys(
        &ctx.config.primary_locale,
        &messages.all_messages,
    ))
}

fn others<'a>(
    primary_locale: &'a str,
    all_messages: &'a AllLocaleMessages,
) -> impl Iterator<Item = &'a LocaleMessages> {
    all_messages
        .values()
        .filter(move |messages| messages.locale != primary_locale)
}

/// Check for primary-locale keys that other locales lack.
///
/// # Arguments
/// * `primary_locale` - The primary locale code (e.g., "en")
/// * `all_messages` - All messages from all locales
///
/// # Returns
/// Vector of MissingTranslationIssue pointing at the primary locale file
pub fn check_missing_translations(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<MissingTranslationIssue> {
    let Some(primary) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<MissingTranslationIssue> = primary
        .entries
        .iter()
        .filter_map(|(key, entry)| {
            let missing_in: Vec<String> = others(primary_locale, all_messages)
                .filter(|messages| !messages.contains_key(key))
                .map(|messages| messages.locale.clone())
                .collect();
            (!missing_in.is_empty()).then(|| MissingTranslationIssue {
                context: entry.context.clone(),
                missing_in,
            })
        })
        .collect();

    issues.sort_by(|a, b| compare_message_contexts(&a.context, &b.context));
    issues
}

/// Check for keys that exist in other locales but not in the primary one.
///
/// These are usually leftovers of features removed from the primary locale.
pub fn check_orphan_keys(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<OrphanKeyIssue> {
    let Some(primary) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<OrphanKeyIssue> = others(primary_locale, all_messages)
        .flat_map(|messages| {
            messages
                .entries
                .iter()
                .filter(|(key, _)| !primary.contains_key(key))
                .map(|(_, entry)| OrphanKeyIssue {
                    context: entry.context.clone(),
                    locale: messages.locale.clone(),
                })
        })
        .collect();

    issues.sort_by(|a, b| compare_message_contexts(&a.context, &b.context));
    issues
}

/// Check for keys whose value shape differs from the primary locale.
pub fn check_type_mismatches(
    primary_locale: &str,
    all_messages: &AllLocaleMessages,
) -> Vec<TypeMismatchIssue> {
    let Some(primary) = all_messages.get(primary_locale) else {
        return Vec::new();
    };

    let mut issues: Vec<TypeMismatchIssue> = primary
        .entries
        .iter()
        .filter_map(|(key, primary_entry)| {
            let mut mismatched_in: Vec<LocaleTypeMismatch> = others(primary_locale, all_messages)
                .filter_map(|messages| {
                    let entry = messages.get(key)?;
                    (entry.value_type != primary_entry.value_type).then(|| {
                        LocaleTypeMismatch::new(
                            &messages.locale,
                            entry.value_type,
                            entry.context.location.clone(),
                        )
                    })
                })
                .collect();
            mismatched_in.sort();

            (!mismatched_in.is_empty()).then(|| TypeMismatchIssue {
                context: primary_entry.context.clone(),
                expected_type: primary_entry.value_type,
                mismatched_in,
            })
        })
        .collect();

    issues.sort_by(|a, b| compare_message_contexts(&a.context, &b.context));
    issues
}

/// Check individual values in every locale.
///
/// - empty: blank value (and nothing else is reported for it)
/// - unfinished: TODO, TBD, FIXME or `[translate]` markers
/// - mixed language: English words in a zh/ja/ko value, outside brackets
/// - untranslated: non-primary value identical to the primary value
/// `zh`, `zh-CN` and `ja_JP` all count; only the primary subtag is compared.
fn is_cjk_locale(locale: &str) -> bool {
    let language = locale.split(['-', '_']).next().unwrap_or(locale);
    CJK_LOCALES.iter().any(|cjk| cjk.eq_ignore_ascii_case(language))
}

pub fn check_values(primary_locale: &str, all_messages: &AllLocaleMessages) -> Vec<ValueIssue> {
    let primary = all_messages.get(primary_locale);
    let mut issues = Vec::new();

    for messages in all_messages.values() {
        let is_primary = messages.locale == primary_locale;
        let is_cjk = is_cjk_locale(&messages.locale);

        for (key, entry) in &messages.entries {
            let value = entry.context.value.as_str();
            let mut push = |kind| {
                issues.push(ValueIssue {
                    context: entry.context.clone(),
                    locale: messages.locale.clone(),
                    kind,
                })
            };

            if value.trim().is_empty() {
                push(ValueIssueKind::Empty);
                continue;
            }
            if UNFINISHED_REGEX.is_match(value) {
                push(ValueIssueKind::Unfinished);
            }
            if is_cjk && has_english_words(value) {
                push(ValueIssueKind::MixedLanguage);
            }
            if !is_primary
                && contains_alphabetic(value)
                && primary
                    .and_then(|p| p.get(key))
                    .is_some_and(|p| p.context.value == value)
            {
                push(ValueIssueKind::Untranslated);
            }
        }
    }

    issues.sort_by(|a, b| {
        compare_message_contexts(&a.context, &b.context).then_with(|| a.kind.rule().cmp(&b.kind.rule()))
    });
    issues
}

fn has_english_words(value: &str) -> bool {
    let stripped = ALLOWED_ENGLISH_REGEX.replace_all(value, " ");
    ENGLISH_WORD_REGEX.is_match(&stripped)
}

/// Check key naming on the primary locale.
///
/// Segments must be camelCase letters and digits, or a numeric index.
/// Only the first offending segment of a key is reported.
pub fn check_key_naming(primary_messages: &LocaleMessages) -> Vec<KeyNamingIssue> {
    let mut issues = Vec::new();

    for (key, entry) in &primary_messages.entries {
        if let Some(segment) = key.split('.').find(|s| !KEY_SEGMENT_REGEX.is_match(s)) {
            issues.push(KeyNamingIssue {
                context: entry.context.clone(),
                kind: KeyNamingKind::InvalidSegment {
                    segment: segment.to_string(),
                },
            });
        }
        let length = char_len(key);
        if length > MAX_KEY_LENGTH {
            issues.push(KeyNamingIssue {
                context: entry.context.clone(),
                kind: KeyNamingKind::TooLong { length },
            });
        }
    }

    issues.sort_by(|a, b| compare_message_contexts(&a.context, &b.context));
    issues
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{MessageEntry, MessageLocation, ValueType},
        rules::helpers::fixtures,
    };

    fn en_zh(en: &[(&str, &str)], zh: &[(&str, &str)]) -> AllLocaleMessages {
        fixtures::all(vec![fixtures::locale("en", en), fixtures::locale("zh", zh)])
    }

    #[test]
    fn test_missing_translations() {
        let all = en_zh(&[("a", "A"), ("b", "B")], &[("a", "甲")]);
        let issues = check_missing_translations("en", &all);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.key, "b");
        assert_eq!(issues[0].context.file_path(), "./messages/en.json");
        assert_eq!(issues[0].missing_in, vec!["zh"]);
    }

    #[test]
    fn test_orphan_keys() {
        let all = en_zh(&[("a", "A")], &[("a", "甲"), ("old", "旧")]);
        let issues = check_orphan_keys("en", &all);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.key, "old");
        assert_eq!(issues[0].locale, "zh");
        assert_eq!(issues[0].context.line(), 3);
    }

    #[test]
    fn test_type_mismatch() {
        let mut all = en_zh(&[("steps", "One, Two")], &[("steps", "一二")]);
        if let Some(en) = all.get_mut("en") {
            en.entries.insert(
                "steps".to_string(),
                MessageEntry {
                    context: crate::core::MessageContext::new(
                        MessageLocation::with_line("./messages/en.json", 2),
                        "steps",
                        "One, Two",
                    ),
                    value_type: ValueType::StringArray,
                },
            );
        }
        let issues = check_type_mismatches("en", &all);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].expected_type, ValueType::StringArray);
        assert_eq!(issues[0].mismatched_in[0].locale, "zh");
        assert_eq!(issues[0].mismatched_in[0].actual_type, ValueType::String);
    }

    fn kinds(issues: &[ValueIssue]) -> Vec<(&str, &str, ValueIssueKind)> {
        issues
            .iter()
            .map(|i| (i.locale.as_str(), i.context.key.as_str(), i.kind))
            .collect()
    }

    #[test]
    fn test_value_checks() {
        let all = en_zh(
            &[
                ("blank", " "),
                ("brand", "PeriodHub"),
                ("note", "TODO write this"),
                ("title", "Title"),
                ("count", "42"),
            ],
            &[
                ("blank", "空"),
                ("brand", "PeriodHub"),
                ("note", "[translate] 说明"),
                ("title", "经期 tracker 工具"),
                ("count", "42"),
            ],
        );
        let issues = check_values("en", &all);
        assert_eq!(
            kinds(&issues),
            vec![
                ("en", "blank", ValueIssueKind::Empty),
                ("en", "note", ValueIssueKind::Unfinished),
                ("zh", "brand", ValueIssueKind::MixedLanguage),
                ("zh", "brand", ValueIssueKind::Untranslated),
                ("zh", "note", ValueIssueKind::Unfinished),
                ("zh", "note", ValueIssueKind::MixedLanguage),
                ("zh", "title", ValueIssueKind::MixedLanguage),
            ]
        );
    }

    #[test]
    fn test_region_tagged_cjk_locale_checked_for_english() {
        let all = fixtures::all(vec![
            fixtures::locale("en", &[("title", "Title")]),
            fixtures::locale("zh-CN", &[("title", "经期 tracker 工具")]),
            fixtures::locale("ja_JP", &[("title", "生理 tracker ツール")]),
        ]);
        let issues = check_values("en", &all);
        assert_eq!(
            kinds(&issues),
            vec![
                ("ja_JP", "title", ValueIssueKind::MixedLanguage),
                ("zh-CN", "title", ValueIssueKind::MixedLanguage),
            ]
        );
        assert!(is_cjk_locale("ZH-hant"));
        assert!(!is_cjk_locale("en-US"));
    }

    #[test]
    fn test_english_inside_brackets_is_allowed() {
        assert!(!has_english_words("经期（Period）指南"));
        assert!(!has_english_words("你好 {name}"));
        assert!(!has_english_words("点击 <b>这里</b>"));
        assert!(has_english_words("下载 PDF 文件 now"));
        assert!(!has_english_words("下载 UI 文件"));
    }

    #[test]
    fn test_key_naming() {
        let long_key = format!("a.{}", "x".repeat(100));
        let primary = fixtures::locale(
            "en",
            &[
                ("home.title", "Home"),
                ("home.hero-title", "Hero"),
                ("steps.0", "One"),
                (long_key.as_str(), "Long"),
            ],
        );
        let issues = check_key_naming(&primary);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].kind,
            KeyNamingKind::InvalidSegment {
                segment: "hero-title".to_string()
            }
        );
        assert_eq!(issues[1].kind, KeyNamingKind::TooLong { length: 102 });
    }
}
