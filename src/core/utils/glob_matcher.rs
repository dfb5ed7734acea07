//! Key patterns for template calls and the unused-key whitelist.

use std::collections::BTreeSet;

pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*')
}

/// True when the pattern matches the key or one of its parents.
///
/// `tools.*` covers `tools.timer.title`, since a template call such as
/// `` t(`${tool}`) `` may return a nested object.
pub fn pattern_covers(pattern: &str, key: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.split('.').collect();
    let key_segments: Vec<&str> = key.split('.').collect();
    if key_segments.len() < pattern_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(key_segments.iter())
        .all(|(pattern_seg, key_seg)| segment_matches(pattern_seg, key_seg))
}

/// Match text with `*` wildcards (0 or more characters, standard glob semantics).
fn segment_matches(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == text;
    }

    let parts: Vec<&str> = pattern.split('*').collect();

    let mut pos = 0;

    if !parts[0].is_empty() {
        if !text.starts_with(parts[0]) {
            return false;
        }
        pos = parts[0].len();
    }

    let last = parts[parts.len() - 1];
    let end = if last.is_empty() {
        text.len()
    } else {
        if !text.ends_with(last) {
            return false;
        }
        if pos + last.len() > text.len() {
            return false;
        }
        text.len() - last.len()
    };

    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        if let Some(found) = text[pos..end].find(part) {
            pos = pos + found + part.len();
        } else {
            return false;
        }
    }

    true
}

/// Keys that must never be reported as unused.
///
/// Entries with `*` match the whole key and the wildcard crosses dots
/// (`*.title` covers `a.b.title`). Plain entries cover the key itself and
/// everything nested below it.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    prefixes: BTreeSet<String>,
    patterns: Vec<String>,
}

impl Whitelist {
    pub fn new(entries: &[String]) -> Self {
        let mut whitelist = Self::default();
        for entry in entries {
            if is_glob_pattern(entry) {
                whitelist.patterns.push(entry.clone());
            } else {
                whitelist.prefixes.insert(entry.clone());
            }
        }
        whitelist
    }

    pub fn len(&self) -> usize {
        self.prefixes.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.prefixes.iter().any(|prefix| {
            key == prefix
                || (key.starts_with(prefix.as_str()) && key[prefix.len()..].starts_with('.'))
        }) || self
            .patterns
            .iter()
            .any(|pattern| segment_matches(pattern, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_wildcards() {
        assert!(segment_matches("*", "cramps"));
        assert!(segment_matches("symptoms", "symptoms"));
        assert!(!segment_matches("symptoms", "symptom"));
        assert!(segment_matches("step*", "step3"));
        assert!(!segment_matches("step*", "Step3"));
        assert!(segment_matches("*Options", "flowOptions"));
        assert!(segment_matches("pain*Level", "painLevel"));
        assert!(!segment_matches("pain*Level", "painLevels"));
    }

    #[test]
    fn test_whitelist_wildcard_crosses_dots() {
        let whitelist = Whitelist::new(&["*.title".to_string()]);
        assert!(whitelist.contains("hero.title"));
        assert!(whitelist.contains("pages.home.hero.title"));
        assert!(!whitelist.contains("hero.subtitle.text"));
    }

    #[test]
    fn test_whitelist_prefix_entries() {
        let whitelist = Whitelist::new(&["painTracker.symptoms".to_string()]);
        assert!(whitelist.contains("painTracker.symptoms"));
        assert!(whitelist.contains("painTracker.symptoms.cramps"));
        assert!(!whitelist.contains("painTracker.symptomsList"));
        assert!(!whitelist.contains("painTracker.levels"));
        assert_eq!(whitelist.len(), 1);
        assert!(Whitelist::new(&[]).is_empty());
    }

    #[test]
    fn test_pattern_covers_nested_keys() {
        assert!(pattern_covers("tools.*", "tools.timer"));
        assert!(pattern_covers("tools.*", "tools.timer.title"));
        assert!(pattern_covers("tools.*.title", "tools.timer.title"));
        assert!(!pattern_covers("tools.*.title", "tools.timer"));
        assert!(!pattern_covers("tools.*", "guides.timer"));
        assert!(pattern_covers("step*.title", "step2.title"));
    }
}
