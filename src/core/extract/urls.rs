//! Absolute URLs pointing at the site's own hosts.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    core::{SourceFile, extract::FileCursor, suppressions::SuppressibleRule},
    issues::HardcodedUrlIssue,
};

/// Extensions scanned for hardcoded URLs (locale JSON included).
pub const URL_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "json"];

/// `${...}` interpolations that read a base URL, usually with a literal fallback.
static BASE_URL_INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^{}]*BASE_URL[^{}]*\}").unwrap());

/// Sentence punctuation that may follow a URL in prose.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Matches `http(s)://[www.]<host><path>` for the configured hosts.
pub struct UrlMatcher {
    regex: Regex,
}

impl UrlMatcher {
    pub fn new(hosts: &[String]) -> Result<Self, regex::Error> {
        let alternation = hosts
            .iter()
            .map(|h| regex::escape(h.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&format!(
            r#"https?://(www\.)?(?:{})([^\s'"`<>)\]}}]*)"#,
            alternation
        ))?;
        Ok(Self { regex })
    }

    pub fn scan(&self, file: &SourceFile) -> Vec<HardcodedUrlIssue> {
        if file.path.ends_with(".md") {
            return Vec::new();
        }

        let cursor = FileCursor::new(&file.path, &file.content);
        let base_url_spans: Vec<_> = BASE_URL_INTERPOLATION_REGEX
            .find_iter(&file.content)
            .map(|m| m.range())
            .collect();
        let mut issues = Vec::new();

        for caps in self.regex.captures_iter(&file.content) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let raw_path = caps.get(2).map_or("", |m| m.as_str());
            let path = raw_path.trim_end_matches(TRAILING_PUNCTUATION);
            let url = &whole.as_str()[..whole.len() - (raw_path.len() - path.len())];
            // `periodhub.healthy.com` is another host.
            if path.starts_with(|c: char| c.is_alphanumeric() || c == '.' || c == '-') {
                continue;
            }
            if cursor.is_skipped(whole.start(), &file.suppressions, SuppressibleRule::Urls) {
                continue;
            }
            if base_url_spans.iter().any(|span| span.contains(&whole.start())) {
                continue;
            }

            issues.push(HardcodedUrlIssue {
                context: cursor.context_at(whole.start()),
                url: url.to_string(),
                path: path.to_string(),
                www: caps.get(1).is_some(),
            });
        }

        issues
    }
}
