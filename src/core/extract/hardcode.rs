//! Hardcoded locale-specific text detection.
//!
//! Five heuristics run over the whole file. Overlapping matches are resolved
//! in favour of the most specific kind, in `HardcodeKind` order.

use std::{collections::HashSet, path::Path, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{SourceFile, extract::FileCursor, suppressions::SuppressibleRule},
    issues::{HardcodeKind, HardcodedTextIssue},
    utils::{contains_cjk, is_cjk},
};

/// Condition that selects between locales: `locale === 'zh'` or `isZh`.
const LOCALE_CONDITION: &str = r#"(?:\b(?:locale|lang|language|currentLocale|currentLanguage)\s*===?\s*['"][A-Za-z-]+['"]|\bis(?:Zh|En|Chinese|English)\b)"#;

static CONDITIONAL_STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"{LOCALE_CONDITION}\s*\?\s*(?:'[^'\n]*'|"[^"\n]*")\s*:\s*(?:'[^'\n]*'|"[^"\n]*")"#
    ))
    .unwrap()
});

static OBJECT_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:zh|en)\s*:\s*(?:'[^'\n]*'|"[^"\n]*")\s*,\s*(?:zh|en)\s*:\s*(?:'[^'\n]*'|"[^"\n]*")"#)
        .unwrap()
});

static TERNARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"{LOCALE_CONDITION}\s*\?\s*[^:?\n]+?\s*:\s*[^,;)}}\n]+"#
    ))
    .unwrap()
});

static JSX_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r">([^<>{}]*[\x{4e00}-\x{9fff}][^<>{}]*)<").unwrap()
});

static CHINESE_STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"'[^'\n]*[\x{4e00}-\x{9fff}][^'\n]*'|"[^"\n]*[\x{4e00}-\x{9fff}][^"\n]*"|`[^`]*[\x{4e00}-\x{9fff}][^`]*`"#,
    )
    .unwrap()
});

static QUOTED_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'([^'\n]*)'|"([^"\n]*)""#).unwrap());

static ENGLISH_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]{2,}").unwrap());

/// Top-level folders that start a key namespace.
const NAMESPACE_ROOTS: &[&str] = &["components", "app", "pages", "lib", "src"];

/// File stems that say nothing about their content.
const GENERIC_STEMS: &[&str] = &["page", "index", "layout", "template", "route"];

const STOP_CHARS: &[char] = &['的', '了', '在', '是', '有', '和', '与', '或', '但', '而'];

/// Bigrams common in the site's content, with their key words.
const BIGRAM_GLOSSARY: &[(&str, &str)] = &[
    ("痛经", "periodPain"),
    ("经期", "period"),
    ("月经", "menstrual"),
    ("周期", "cycle"),
    ("疼痛", "pain"),
    ("症状", "symptoms"),
    ("缓解", "relief"),
    ("健康", "health"),
    ("女性", "women"),
    ("指南", "guide"),
    ("治疗", "treatment"),
    ("饮食", "diet"),
    ("运动", "exercise"),
    ("睡眠", "sleep"),
    ("工具", "tools"),
    ("追踪", "tracker"),
    ("评估", "assessment"),
    ("建议", "tips"),
    ("标题", "title"),
    ("描述", "description"),
];

struct Candidate {
    start: usize,
    end: usize,
    kind: HardcodeKind,
    text: String,
    literals: Vec<String>,
}

/// Scan one file for hardcoded locale text.
pub fn scan_hardcoded_text(
    file: &SourceFile,
    ignore_texts: &HashSet<String>,
) -> Vec<HardcodedTextIssue> {
    let cursor = FileCursor::new(&file.path, &file.content);
    let content = file.content.as_str();
    let mut candidates = Vec::new();

    for m in CONDITIONAL_STRING_REGEX.find_iter(content) {
        let literals = quoted_literals(branches(m.as_str()));
        candidates.push(Candidate {
            start: m.start(),
            end: m.end(),
            kind: HardcodeKind::ConditionalString,
            text: locale_text(&literals, m.as_str()),
            literals,
        });
    }

    for m in OBJECT_LITERAL_REGEX.find_iter(content) {
        let literals = quoted_literals(m.as_str());
        if literals.iter().any(|l| contains_cjk(l)) {
            candidates.push(Candidate {
                start: m.start(),
                end: m.end(),
                kind: HardcodeKind::ObjectLiteral,
                text: locale_text(&literals, m.as_str()),
                literals,
            });
        }
    }

    for m in TERNARY_REGEX.find_iter(content) {
        candidates.push(Candidate {
            start: m.start(),
            end: m.end(),
            kind: HardcodeKind::TernaryOperator,
            text: collapse_whitespace(m.as_str().trim_end()),
            literals: quoted_literals(branches(m.as_str())),
        });
    }

    for caps in JSX_TEXT_REGEX.captures_iter(content) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        // `=>` is an arrow, not the end of a tag.
        if whole.start() > 0 && content.as_bytes()[whole.start() - 1] == b'=' {
            continue;
        }
        let leading = inner.as_str().len() - inner.as_str().trim_start().len();
        let text = collapse_whitespace(inner.as_str());
        candidates.push(Candidate {
            start: inner.start() + leading,
            end: inner.end(),
            kind: HardcodeKind::JsxText,
            literals: vec![text.clone()],
            text,
        });
    }

    for m in CHINESE_STRING_REGEX.find_iter(content) {
        let inner = &m.as_str()[1..m.as_str().len() - 1];
        candidates.push(Candidate {
            start: m.start(),
            end: m.end(),
            kind: HardcodeKind::ChineseString,
            text: inner.to_string(),
            literals: vec![inner.to_string()],
        });
    }

    candidates.sort_by_key(|c| (c.kind, c.start));
    let mut kept: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let overlaps = kept
            .iter()
            .any(|k| candidate.start < k.end && k.start < candidate.end);
        if !overlaps {
            kept.push(candidate);
        }
    }
    kept.sort_by_key(|c| c.start);

    kept.into_iter()
        .filter(|c| !cursor.is_skipped(c.start, &file.suppressions, SuppressibleRule::Hardcode))
        .filter(|c| {
            !c.literals
                .iter()
                .any(|l| ignore_texts.contains(l.trim()))
        })
        .map(|c| HardcodedTextIssue {
            context: cursor.context_at(c.start),
            kind: c.kind,
            suggested_key: suggest_key(&file.path, &c.literals),
            text: c.text,
        })
        .collect()
}

fn quoted_literals(text: &str) -> Vec<String> {
    QUOTED_LITERAL_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The Chinese branch of a locale switch, or the whole expression when no
/// branch holds CJK text.
fn locale_text(literals: &[String], whole: &str) -> String {
    literals
        .iter()
        .find(|l| contains_cjk(l))
        .cloned()
        .unwrap_or_else(|| collapse_whitespace(whole))
}

/// The part of a locale ternary after `?`, without the condition's locale literal.
fn branches(ternary: &str) -> &str {
    ternary.split_once('?').map_or(ternary, |(_, rest)| rest)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Propose a translation key for hardcoded text found in `file_path`.
///
/// English words win; Chinese text falls back to a small glossary of
/// bigrams, then to `content`.
pub fn suggest_key(file_path: &str, texts: &[String]) -> String {
    let leaf = english_leaf(texts)
        .or_else(|| chinese_leaf(texts))
        .unwrap_or_else(|| "translation.key".to_string());
    let namespace = namespace_for(file_path);
    if namespace.is_empty() {
        leaf
    } else {
        format!("{}.{}", namespace, leaf)
    }
}

fn english_leaf(texts: &[String]) -> Option<String> {
    texts.iter().find_map(|text| {
        let words: Vec<&str> = ENGLISH_WORD_REGEX
            .find_iter(text)
            .map(|m| m.as_str())
            .take(3)
            .collect();
        (!words.is_empty()).then(|| camel_case(&words))
    })
}

fn chinese_leaf(texts: &[String]) -> Option<String> {
    let chars: Vec<char> = texts.iter().flat_map(|t| t.chars()).filter(|c| is_cjk(*c)).collect();
    let bigrams: Vec<String> = chars
        .windows(2)
        .filter(|pair| !pair.iter().any(|c| STOP_CHARS.contains(c)))
        .map(|pair| pair.iter().collect())
        .collect();
    if bigrams.is_empty() {
        return None;
    }

    let mut words: Vec<&str> = Vec::new();
    for bigram in &bigrams {
        if let Some((_, word)) = BIGRAM_GLOSSARY.iter().find(|(b, _)| b == bigram)
            && !words.contains(word)
        {
            words.push(word);
            if words.len() == 2 {
                break;
            }
        }
    }

    if words.is_empty() {
        Some("content".to_string())
    } else {
        Some(camel_case(&words))
    }
}

/// `./components/PainTracker.tsx` -> `components.painTracker`
///
/// Route segments such as `[locale]` and `(marketing)` are skipped, and
/// `page`/`index` files take their directory name.
fn namespace_for(file_path: &str) -> String {
    let without_ext = Path::new(file_path).with_extension("");
    let parts: Vec<&str> = without_ext
        .iter()
        .filter_map(|c| c.to_str())
        .filter(|p| !p.is_empty() && *p != "." && *p != "/")
        .filter(|p| !p.starts_with('[') && !p.starts_with('('))
        .collect();

    let (root, rest) = match parts.iter().rposition(|p| NAMESPACE_ROOTS.contains(p)) {
        Some(idx) => (Some(parts[idx]), &parts[idx + 1..]),
        None => (None, &parts[parts.len().saturating_sub(1)..]),
    };

    let name = rest
        .iter()
        .rev()
        .find(|p| !GENERIC_STEMS.contains(p))
        .map(|p| camel_case(&[p]));

    match (root, name) {
        (Some(root), Some(name)) => format!("{}.{}", root, name),
        (Some(root), None) => root.to_string(),
        (None, Some(name)) => name,
        (None, None) => String::new(),
    }
}

/// Join words into lowerCamelCase, splitting on `-`, `_`, `.` and spaces.
fn camel_case(words: &[&str]) -> String {
    let mut out = String::new();
    for part in words
        .iter()
        .flat_map(|w| w.split(['-', '_', '.', ' ']))
        .filter(|p| !p.is_empty())
    {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if out.is_empty() {
            out.extend(first.to_lowercase());
            // Keep inner capitals of PascalCase names, lowercase ALL-CAPS words.
            if part.chars().all(|c| !c.is_lowercase()) {
                out.push_str(&chars.as_str().to_lowercase());
            } else {
                out.push_str(chars.as_str());
            }
        } else {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}
