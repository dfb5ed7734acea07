//! Image tag discovery for the alt-text audit and auto-fix.
//!
//! Tags may span several lines. The scan for the closing `>` skips quoted
//! strings and `{...}` expressions, so `onLoad={() => x}` does not end a tag.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use crate::core::{SourceContext, SourceFile, extract::FileCursor, suppressions::SuppressibleRule};

static TAG_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(img|Image|OptimizedImage)\b").unwrap());

static SRC_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*["'`]([^"'`$]*)["'`]\s*\})"#).unwrap()
});

static ALT_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\salt\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*["'`]([^"'`$]*)["'`]\s*\}|\{([^}]*)\})"#)
        .unwrap()
});

/// The alt attribute of one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AltAttr {
    Missing,
    /// A literal value; `range` is the value's byte range in the file.
    Literal { value: String, range: Range<usize> },
    /// A JSX expression such as `{t('hero.alt')}`, not audited.
    Expression(String),
}

/// One `<img>`, `<Image>` or `<OptimizedImage>` tag with a literal src.
#[derive(Debug, Clone)]
pub struct ImageTag {
    pub context: SourceContext,
    pub tag_name: String,
    pub src: String,
    /// Byte offset just after the src attribute, where a new alt is inserted.
    pub src_end: usize,
    pub alt: AltAttr,
    /// Full tag text, used as context for alt generation.
    pub text: String,
}

/// Find every auditable image tag in a file.
///
/// Tags whose src is an expression, a data URI, or a test/placeholder image
/// are skipped.
pub fn scan_image_tags(file: &SourceFile) -> Vec<ImageTag> {
    let cursor = FileCursor::new(&file.path, &file.content);
    let content = file.content.as_str();
    let mut tags = Vec::new();

    for caps in TAG_START_REGEX.captures_iter(content) {
        let (Some(start), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if cursor.is_skipped(start.start(), &file.suppressions, SuppressibleRule::Images) {
            continue;
        }
        let Some(end) = find_tag_end(content, start.end()) else {
            continue;
        };
        let text = &content[start.start()..end];

        let Some(src_caps) = SRC_ATTR_REGEX.captures(text) else {
            continue;
        };
        let Some(src) = (1..=3).find_map(|i| src_caps.get(i)) else {
            continue;
        };
        if is_skipped_src(src.as_str()) {
            continue;
        }
        let src_end = start.start() + src_caps.get(0).map_or(src.end(), |m| m.end());

        tags.push(ImageTag {
            context: cursor.context_at(start.start()),
            tag_name: name.as_str().to_string(),
            src: src.as_str().to_string(),
            src_end,
            alt: parse_alt(text, start.start()),
            text: text.to_string(),
        });
    }

    tags
}

/// Byte offset just past the `>` that closes the tag starting before `from`.
fn find_tag_end(content: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for (i, c) in content[from..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'' | '`') => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') => depth = depth.saturating_sub(1),
            (None, '>') if depth == 0 => return Some(from + i + 1),
            (None, '<') if depth == 0 => return None,
            _ => {}
        }
    }
    None
}

fn parse_alt(tag: &str, tag_offset: usize) -> AltAttr {
    if let Some(caps) = ALT_ATTR_REGEX.captures(tag) {
        if let Some(value) = (1..=3).find_map(|i| caps.get(i)) {
            return AltAttr::Literal {
                value: value.as_str().to_string(),
                range: tag_offset + value.start()..tag_offset + value.end(),
            };
        }
        if let Some(expr) = caps.get(4) {
            return AltAttr::Expression(expr.as_str().trim().to_string());
        }
    }
    AltAttr::Missing
}

/// Fragments that mark a fixture image rather than a real asset.
const FIXTURE_PATTERNS: &[&str] = &[
    "test-image",
    "placeholder",
    "dummy",
    "mock",
    "sample",
    "example",
];

/// Stock file names used by page templates.
const FIXTURE_FILE_NAMES: &[&str] = &["image.jpg", "hero-image.jpg", "content-image.webp"];

fn is_skipped_src(src: &str) -> bool {
    let lower = src.to_lowercase();
    let file_name = lower.rsplit('/').next().unwrap_or(&lower);
    lower.is_empty()
        || lower.starts_with("data:")
        || lower.contains("/test/")
        || FIXTURE_PATTERNS.iter().any(|p| lower.contains(p))
        || FIXTURE_FILE_NAMES.contains(&file_name)
}
