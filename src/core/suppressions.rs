//! Suppression comments in source files.
//!
//! ```text
//! // i18nkit-disable-next-line
//! // i18nkit-disable-next-line hardcode urls
//! {/* i18nkit-disable images */}
//! ...
//! {/* i18nkit-enable images */}
//! ```
//!
//! A directive without rule names applies to every rule. `disable` without a
//! matching `enable` runs to the end of the file.

use std::collections::{HashMap, HashSet};

const DISABLE_NEXT_LINE: &str = "i18nkit-disable-next-line";
const DISABLE: &str = "i18nkit-disable";
const ENABLE: &str = "i18nkit-enable";

/// Scanners whose findings can be suppressed by comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuppressibleRule {
    Hardcode,
    Urls,
    Images,
    Keys,
}

impl SuppressibleRule {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hardcode" | "hardcoded" => Some(Self::Hardcode),
            "urls" | "url" => Some(Self::Urls),
            "images" | "image" => Some(Self::Images),
            "keys" | "key" => Some(Self::Keys),
            _ => None,
        }
    }

    pub fn all() -> HashSet<Self> {
        [Self::Hardcode, Self::Urls, Self::Images, Self::Keys]
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DisabledRange {
    start: usize,
    end: usize,
}

/// Lines suppressed per rule, collected from one file.
#[derive(Debug, Clone, Default)]
pub struct Suppressions {
    disabled_lines: HashMap<SuppressibleRule, HashSet<usize>>,
    disabled_ranges: HashMap<SuppressibleRule, Vec<DisabledRange>>,
}

enum Directive {
    DisableNextLine(HashSet<SuppressibleRule>),
    Disable(HashSet<SuppressibleRule>),
    Enable(HashSet<SuppressibleRule>),
}

impl Directive {
    fn parse(comment: &str) -> Option<Self> {
        let text = comment
            .trim()
            .trim_start_matches('{')
            .trim_start_matches("//")
            .trim_start_matches("/*")
            .trim_end_matches('}')
            .trim_end_matches("*/")
            .trim();

        // Longest prefix first: `disable` is a prefix of `disable-next-line`.
        if let Some(rest) = text.strip_prefix(DISABLE_NEXT_LINE) {
            Self::rules(rest).map(Self::DisableNextLine)
        } else if let Some(rest) = text.strip_prefix(DISABLE) {
            Self::rules(rest).map(Self::Disable)
        } else if let Some(rest) = text.strip_prefix(ENABLE) {
            Self::rules(rest).map(Self::Enable)
        } else {
            None
        }
    }

    fn rules(rest: &str) -> Option<HashSet<SuppressibleRule>> {
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let rules: HashSet<SuppressibleRule> = rest
            .split_whitespace()
            .filter_map(SuppressibleRule::parse)
            .collect();
        if rules.is_empty() {
            Some(SuppressibleRule::all())
        } else {
            Some(rules)
        }
    }
}

/// Lines that start a `//`, `/* */`, or JSX `{/* */}` comment.
pub fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || trimmed.starts_with("{/*")
}

impl Suppressions {
    /// Collect directives from every comment line in the file.
    pub fn collect(content: &str) -> Self {
        let mut suppressions = Self::default();
        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        let mut open_ranges: HashMap<SuppressibleRule, usize> = HashMap::new();

        for (idx, trimmed) in lines.iter().enumerate() {
            let line = idx + 1;
            if !is_comment_line(trimmed) {
                continue;
            }
            let Some(directive) = Directive::parse(trimmed) else {
                continue;
            };

            match directive {
                Directive::DisableNextLine(rules) => {
                    // Skip over stacked comments to the code they annotate.
                    let target = lines
                        .iter()
                        .enumerate()
                        .skip(idx + 1)
                        .find(|(_, l)| !is_comment_line(l))
                        .map(|(i, _)| i + 1)
                        .unwrap_or(line + 1);
                    for rule in rules {
                        suppressions
                            .disabled_lines
                            .entry(rule)
                            .or_default()
                            .insert(target);
                    }
                }
                Directive::Disable(rules) => {
                    for rule in rules {
                        open_ranges.entry(rule).or_insert(line);
                    }
                }
                Directive::Enable(rules) => {
                    for rule in rules {
                        if let Some(start) = open_ranges.remove(&rule) {
                            suppressions
                                .disabled_ranges
                                .entry(rule)
                                .or_default()
                                .push(DisabledRange {
                                    start,
                                    end: line.saturating_sub(1),
                                });
                        }
                    }
                }
            }
        }

        for (rule, start) in open_ranges {
            suppressions
                .disabled_ranges
                .entry(rule)
                .or_default()
                .push(DisabledRange {
                    start,
                    end: usize::MAX,
                });
        }

        suppressions
    }

    pub fn is_suppressed(&self, line: usize, rule: SuppressibleRule) -> bool {
        if let Some(lines) = self.disabled_lines.get(&rule)
            && lines.contains(&line)
        {
            return true;
        }
        if let Some(ranges) = self.disabled_ranges.get(&rule)
            && ranges.iter().any(|r| line >= r.start && line <= r.end)
        {
            return true;
        }
        false
    }
}
