//! Article SEO checks.
//!
//! Articles live in `<articlesRoot>/<locale>/*.md`. Each one is checked for
//! required frontmatter, a single H1 heading and a set of length
//! recommendations, and gets a score out of 100. Every file name is expected
//! in every locale directory.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
    sync::LazyLock,
};

use anyhow::{Result, bail};
use colored::Colorize;
use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use crate::{
    core::{CheckContext, parsers::frontmatter::parse_document},
    issues::{SeoIssue, SeoIssueKind},
    utils::{char_len, truncate_chars},
};

pub const REQUIRED_FIELDS: &[&str] = &[
    "title",
    "seo_title",
    "seo_description",
    "summary",
    "tags",
    "category",
    "author",
    "canonical_url",
];

static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[ \t]+(.+?)\s*$").unwrap());

/// SEO result for one article.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSeo {
    pub file: String,
    pub locale: String,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub score: u32,
    #[serde(skip)]
    pub issues: Vec<SeoIssue>,
}

pub struct SeoAnalysis {
    pub articles: Vec<ArticleSeo>,
    /// Files that could not be read or parsed.
    pub skipped: usize,
}

impl SeoAnalysis {
    pub fn average_score(&self) -> f64 {
        if self.articles.is_empty() {
            return 0.0;
        }
        let total: u32 = self.articles.iter().map(|a| a.score).sum();
        f64::from(total) / self.articles.len() as f64
    }
}

pub fn check_seo_issues(ctx: &CheckContext) -> Result<SeoAnalysis> {
    let root = ctx.resolve_path(&ctx.config.articles_root);
    if !root.is_dir() {
        bail!("Articles directory '{}' not found", root.display());
    }

    let mut analysis = SeoAnalysis {
        articles: Vec::new(),
        skipped: 0,
    };

    let entries = WalkDir::new(&root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "md"));

    let mut listing: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in entries {
        let path = entry.path();
        let locale = path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let file_path = path.to_string_lossy().to_string();
        listing
            .entry(locale.clone())
            .or_default()
            .insert(entry.file_name().to_string_lossy().to_string());

        let result = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| analyze_article(&file_path, &locale, &content));
        match result {
            Ok(article) => analysis.articles.push(article),
            Err(e) => {
                eprintln!(
                    "{} Skipping {}: {:#}",
                    "warning:".bold().yellow(),
                    file_path,
                    e
                );
                analysis.skipped += 1;
            }
        }
    }

    check_missing_articles(&mut analysis.articles, &listing);
    Ok(analysis)
}

/// Flag articles whose file name is missing from another locale directory.
///
/// `listing` maps each locale to the Markdown file names found in it,
/// including files that failed to parse.
pub fn check_missing_articles(
    articles: &mut [ArticleSeo],
    listing: &BTreeMap<String, BTreeSet<String>>,
) {
    for article in articles {
        let Some(name) = Path::new(&article.file).file_name() else {
            continue;
        };
        let name = name.to_string_lossy();
        for (locale, names) in listing {
            if *locale != article.locale && !names.contains(name.as_ref()) {
                article.issues.push(SeoIssue {
                    file_path: article.file.clone(),
                    kind: SeoIssueKind::MissingArticle {
                        locale: locale.clone(),
                    },
                });
            }
        }
    }
}

/// H1 headings of a Markdown body, ignoring fenced code blocks.
fn h1_headings(body: &str) -> Vec<&str> {
    let mut in_fence = false;
    let mut headings = Vec::new();
    for line in body.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = H1_REGEX.captures(line)
            && let Some(text) = caps.get(1)
        {
            headings.push(text.as_str());
        }
    }
    headings
}

/// Check one Markdown article.
///
/// Fails only when the frontmatter is not valid YAML.
pub fn analyze_article(file_path: &str, locale: &str, content: &str) -> Result<ArticleSeo> {
    let document = parse_document(content)?;
    let fm = &document.frontmatter;
    let body = document.body.as_str();
    let headings = h1_headings(body);
    let h1 = headings.first().map(|h| h.to_string());
    let title = fm.text("title");

    let mut issues = Vec::new();
    let mut score: i32 = 100;
    let issue = |kind| SeoIssue {
        file_path: file_path.to_string(),
        kind,
    };
    let recommend = |message: String| issue(SeoIssueKind::Recommendation { message });

    for field in REQUIRED_FIELDS {
        if !fm.is_present(field) {
            issues.push(issue(SeoIssueKind::MissingField {
                field: field.to_string(),
            }));
            score -= 10;
        }
    }

    match &h1 {
        None => {
            issues.push(issue(SeoIssueKind::MissingH1));
            score -= 15;
        }
        Some(h1) => {
            if headings.len() > 1 {
                issues.push(issue(SeoIssueKind::MultipleH1 {
                    count: headings.len(),
                }));
                score -= 5;
            }
            if char_len(h1) > 60 {
                issues.push(recommend(format!(
                    "H1 is {} characters, keep it within 60",
                    char_len(h1)
                )));
            }
            if let Some(title) = title.as_deref().filter(|t| !t.trim().is_empty()) {
                let head = truncate_chars(title, 10).to_lowercase();
                if !h1.to_lowercase().contains(&head) {
                    issues.push(recommend("H1 does not echo the title".to_string()));
                }
            }
        }
    }

    if let Some(seo_title) = fm.text("seo_title").filter(|t| !t.trim().is_empty()) {
        let len = char_len(&seo_title);
        if len > 60 {
            issues.push(recommend(format!(
                "seo_title is {} characters, keep it within 60",
                len
            )));
            score -= 5;
        } else if len < 30 {
            issues.push(recommend(format!(
                "seo_title is {} characters, aim for at least 30",
                len
            )));
        }
    }

    if let Some(description) = fm.text("seo_description").filter(|t| !t.trim().is_empty()) {
        let len = char_len(&description);
        if len > 160 {
            issues.push(recommend(format!(
                "seo_description is {} characters, keep it within 160",
                len
            )));
            score -= 5;
        } else if len < 120 {
            issues.push(recommend(format!(
                "seo_description is {} characters, aim for at least 120",
                len
            )));
        }
    }

    let keywords = fm.list("keywords");
    if keywords.is_empty() {
        issues.push(recommend("no keywords".to_string()));
        score -= 10;
    } else if keywords.len() < 5 {
        issues.push(recommend(format!(
            "{} keywords, add at least 5",
            keywords.len()
        )));
    }

    let tags = fm.list("tags");
    if !tags.is_empty() && tags.len() < 3 {
        issues.push(recommend(format!("{} tags, add at least 3", tags.len())));
    }

    let content_len = char_len(body.trim());
    if content_len < 1000 {
        issues.push(recommend(format!(
            "content is {} characters, aim for at least 1000",
            content_len
        )));
        score -= 10;
    } else if content_len > 5000 {
        issues.push(recommend(format!(
            "content is {} characters, consider splitting above 5000",
            content_len
        )));
    }

    if !fm.is_present("featured_image") {
        issues.push(recommend("no featured_image".to_string()));
        score -= 5;
    }
    if !fm.is_present("reading_time") {
        issues.push(recommend("no reading_time".to_string()));
    }

    Ok(ArticleSeo {
        file: file_path.to_string(),
        locale: locale.to_string(),
        title,
        h1,
        score: score.max(0) as u32,
        issues,
    })
}
