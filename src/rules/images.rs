//! Image alt-text audit and alt generation.

use std::{fmt, ops::Range, path::Path, sync::LazyLock};

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::{
    core::{
        CheckContext, SourceFile,
        extract::images::{AltAttr, ImageTag, scan_image_tags},
    },
    issues::{AltIssueKind, ImageAltIssue},
    utils::{char_len, truncate_chars},
};

/// Extensions scanned for image tags.
pub const IMAGE_EXTENSIONS: &[&str] = &["tsx", "jsx", "ts", "js"];

pub const MIN_ALT_LENGTH: usize = 10;
pub const MAX_ALT_LENGTH: usize = 125;

const GENERIC_ALTS: &[&str] = &[
    "image", "picture", "photo", "img", "pic", "图片", "图像", "照片",
];

/// Image type detected from the src or tag, checked in order.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("hero", "Hero image"),
    ("icon", "Icon"),
    ("logo", "Logo"),
    ("infographic", "Infographic"),
    ("chart", "Chart"),
    ("avatar", "Avatar"),
    ("photo", "Photo"),
];

/// `-800x600`, `_1920w`, `@2x`, `-large`
static SIZE_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[-_@]?\d+x\d*|[-_]\d+w|[-_](?:small|medium|large|thumb|thumbnail|sm|md|lg|xl))+$")
        .unwrap()
});

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Result of the alt-text audit.
pub struct ImageAudit {
    pub tags_scanned: usize,
    pub issues: Vec<ImageAltIssue>,
}

/// Per-rule counts for the report summary.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total_images: usize,
    pub missing_alt: usize,
    pub empty_alt: usize,
    pub generic_alt: usize,
    pub seo_alt: usize,
}

impl ImageStats {
    pub fn from_audit(audit: &ImageAudit) -> Self {
        let mut stats = Self {
            total_images: audit.tags_scanned,
            ..Default::default()
        };
        for issue in &audit.issues {
            match issue.kind {
                AltIssueKind::Missing => stats.missing_alt += 1,
                AltIssueKind::Empty => stats.empty_alt += 1,
                AltIssueKind::Generic => stats.generic_alt += 1,
                AltIssueKind::SeoUnfriendly { .. } => stats.seo_alt += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

pub fn check_image_issues(ctx: &CheckContext) -> ImageAudit {
    let per_file: Vec<(usize, Vec<ImageAltIssue>)> = ctx
        .sources()
        .par_iter()
        .map(|file| {
            let tags = scan_image_tags(file);
            (tags.len(), audit_image_tags(&tags, &ctx.config.image_keywords))
        })
        .collect();

    let tags_scanned = per_file.iter().map(|(count, _)| count).sum();
    let issues = per_file.into_iter().flat_map(|(_, issues)| issues).collect();
    ImageAudit {
        tags_scanned,
        issues,
    }
}

/// Audit the alt attribute of each tag.
///
/// Expression alts such as `{t('hero.alt')}` are trusted. An empty
/// `keywords` list disables the keyword check.
pub fn audit_image_tags(tags: &[ImageTag], keywords: &[String]) -> Vec<ImageAltIssue> {
    tags.iter()
        .filter_map(|tag| {
            let (kind, alt) = match &tag.alt {
                AltAttr::Missing => (AltIssueKind::Missing, None),
                AltAttr::Expression(_) => return None,
                AltAttr::Literal { value, .. } => (classify_alt(value, keywords)?, Some(value.clone())),
            };
            Some(ImageAltIssue {
                context: tag.context.clone(),
                kind,
                tag: tag.tag_name.clone(),
                src: tag.src.clone(),
                alt,
            })
        })
        .collect()
}

fn classify_alt(value: &str, keywords: &[String]) -> Option<AltIssueKind> {
    let alt = value.trim();
    if alt.is_empty() {
        return Some(AltIssueKind::Empty);
    }
    let lower = alt.to_lowercase();
    if GENERIC_ALTS.contains(&lower.as_str()) || lower.starts_with("image of") {
        return Some(AltIssueKind::Generic);
    }

    let mut reasons = Vec::new();
    let length = char_len(alt);
    if length < MIN_ALT_LENGTH {
        reasons.push(format!("shorter than {} characters", MIN_ALT_LENGTH));
    }
    if length > MAX_ALT_LENGTH {
        reasons.push(format!("longer than {} characters", MAX_ALT_LENGTH));
    }
    if !keywords.is_empty() && !keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
        reasons.push("contains no configured keyword".to_string());
    }

    (!reasons.is_empty()).then(|| AltIssueKind::SeoUnfriendly {
        reason: reasons.join("; "),
    })
}

/// Follow-up actions for the audit report, most urgent first.
pub fn recommendations(stats: &ImageStats) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if stats.missing_alt > 0 {
        out.push(Recommendation {
            priority: Priority::High,
            message: format!("{} image(s) have no alt attribute", stats.missing_alt),
            action: "run `i18nkit fix-alt --apply`".to_string(),
        });
    }
    if stats.empty_alt > 0 {
        out.push(Recommendation {
            priority: Priority::High,
            message: format!("{} image(s) have an empty alt attribute", stats.empty_alt),
            action: "describe the image, or keep alt=\"\" only for decorative images".to_string(),
        });
    }
    if stats.generic_alt > 0 {
        out.push(Recommendation {
            priority: Priority::Medium,
            message: format!("{} image(s) use generic alt text", stats.generic_alt),
            action: "replace words like \"image\" with what the image shows".to_string(),
        });
    }
    if stats.seo_alt > 0 {
        out.push(Recommendation {
            priority: Priority::Low,
            message: format!("{} alt text(s) could rank better", stats.seo_alt),
            action: format!(
                "keep alt text between {} and {} characters and include a topic keyword",
                MIN_ALT_LENGTH, MAX_ALT_LENGTH
            ),
        });
    }
    out
}

// ============================================================
// Alt generation
// ============================================================

/// How a generated alt is written into the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AltEdit {
    /// Insert ` alt="..."` at this byte offset.
    Insert { at: usize },
    /// Replace the empty literal value in this byte range.
    Replace { range: Range<usize> },
}

/// A generated alt for one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AltFix {
    pub file: String,
    pub line: usize,
    pub src: String,
    pub alt: String,
    #[serde(skip)]
    pub edit: AltEdit,
}

/// Plan alt fixes for the tags with a missing or empty alt.
pub fn plan_alt_fixes(file: &SourceFile) -> Vec<AltFix> {
    scan_image_tags(file)
        .into_iter()
        .filter_map(|tag| {
            let edit = match &tag.alt {
                AltAttr::Missing => AltEdit::Insert { at: tag.src_end },
                AltAttr::Literal { value, range } if value.trim().is_empty() => AltEdit::Replace {
                    range: range.clone(),
                },
                _ => return None,
            };
            Some(AltFix {
                file: file.path.clone(),
                line: tag.context.line(),
                alt: generate_alt_text(&tag.src, &tag.text),
                src: tag.src,
                edit,
            })
        })
        .collect()
}

/// Generate alt text from the image src and the surrounding tag.
///
/// ```
/// use i18nkit::rules::images::generate_alt_text;
///
/// assert_eq!(
///     generate_alt_text("/images/hero-period-relief@2x.webp", "<img src=\"...\" />"),
///     "Hero image: Hero period relief"
/// );
/// assert_eq!(generate_alt_text("/a/cat.png", ""), "Image: Cat");
/// ```
pub fn generate_alt_text(src: &str, context: &str) -> String {
    let name = clean_file_name(src);
    let alt = match (detect_image_type(src, context), name.is_empty()) {
        (Some(kind), false) => format!("{}: {}", kind, name),
        (Some(kind), true) => kind.to_string(),
        (None, false) => name,
        (None, true) => "Image".to_string(),
    };
    let alt = capitalize(&WHITESPACE_REGEX.replace_all(&alt, " ")).replace('"', "");
    let alt = alt.trim();

    if char_len(alt) < MIN_ALT_LENGTH {
        format!("Image: {}", alt)
    } else if char_len(alt) > MAX_ALT_LENGTH {
        format!("{}...", truncate_chars(alt, MAX_ALT_LENGTH - 3))
    } else {
        alt.to_string()
    }
}

fn detect_image_type(src: &str, context: &str) -> Option<&'static str> {
    let src = src.to_lowercase();
    let context = context.to_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(needle, _)| src.contains(*needle) || context.contains(*needle))
        .map(|(_, label)| *label)
}

fn clean_file_name(src: &str) -> String {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = SIZE_SUFFIX_REGEX.replace(&stem, "");
    let words = stem.replace(['-', '_'], " ");
    let words = DIGITS_REGEX.replace_all(&words, "");
    capitalize(WHITESPACE_REGEX.replace_all(words.trim(), " ").as_ref())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
