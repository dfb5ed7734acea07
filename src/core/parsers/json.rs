use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{
    AllLocaleMessages, LocaleMessages, MessageContext, MessageEntry, MessageLocation, ValueType,
    utils::LineIndex,
};

pub fn parse_json_file(path: &Path, locale: &str) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let file_path = path.to_string_lossy().to_string();
    let line_index = LineIndex::new(&content);
    let mut messages = LocaleMessages::new(locale, file_path.clone());
    let mut flattener = Flattener {
        file_path: &file_path,
        content: &content,
        line_index: &line_index,
        result: &mut messages,
    };
    flattener.flatten(&json, String::new());
    Ok(messages)
}

/// Find the line number where a dotted key is declared.
///
/// Each key part is searched in sequence after the previous one, so
/// `Common.submit` finds the `"submit"` nested below `"Common"` rather than
/// one in another namespace. A match only counts when followed by `:`,
/// which skips string values that happen to contain the same text.
/// Numeric parts step into the matching array element (`faq.1.q`).
fn find_key_line(content: &str, key_path: &str, line_index: &LineIndex) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        if let Ok(index) = part.parse::<usize>()
            && let Some(start) = array_element_start(content, search_start, index)
        {
            search_start = start;
            continue;
        }

        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();
            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        line_index.line_of(search_start)
    } else {
        1
    }
}

/// Offset of element `index` of the array opening at `from` (after an
/// optional `:`), or `None` when no array starts there.
fn array_element_start(content: &str, from: usize, index: usize) -> Option<usize> {
    let rest = &content[from..];
    let open = rest.len() - rest.trim_start_matches(|c: char| c.is_whitespace() || c == ':').len();
    if !rest[open..].starts_with('[') {
        return None;
    }
    let skip_whitespace = |at: usize| at + content[at..].len() - content[at..].trim_start().len();

    let body_start = from + open + 1;
    if index == 0 {
        return Some(skip_whitespace(body_start));
    }

    let (mut depth, mut element) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for (i, c) in content[body_start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '{' => depth += 1,
            ']' | '}' if depth == 0 => return None,
            ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                element += 1;
                if element == index {
                    return Some(skip_whitespace(body_start + i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

struct Flattener<'a> {
    file_path: &'a str,
    content: &'a str,
    line_index: &'a LineIndex,
    result: &'a mut LocaleMessages,
}

impl Flattener<'_> {
    fn flatten(&mut self, value: &Value, prefix: String) {
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    self.flatten(val, join_key(&prefix, key));
                }
            }
            Value::String(s) => self.insert(prefix, s.clone(), ValueType::String),
            Value::Array(arr) => {
                if arr.is_empty() {
                    return;
                }

                // String lists are read whole (`t.raw("steps")`); anything else
                // is addressed by index (`faq.items.0.question`).
                let is_string_array = arr.iter().all(|v| matches!(v, Value::String(_)));
                if is_string_array && !prefix.is_empty() {
                    let values: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
                    self.insert(prefix, values.join(", "), ValueType::StringArray);
                } else {
                    for (index, val) in arr.iter().enumerate() {
                        self.flatten(val, join_key(&prefix, &index.to_string()));
                    }
                }
            }
            Value::Number(_) | Value::Bool(_) | Value::Null => {
                if !prefix.is_empty() {
                    self.insert(prefix, value.to_string(), ValueType::Other);
                }
            }
        }
    }

    fn insert(&mut self, key: String, value: String, value_type: ValueType) {
        let line = find_key_line(self.content, &key, self.line_index);
        let context = MessageContext::new(
            MessageLocation::with_line(self.file_path, line),
            key.clone(),
            value,
        );
        self.result.entries.insert(
            key,
            MessageEntry {
                context,
                value_type,
            },
        );
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Extracts the locale code from a file name.
///
/// - "en.json" -> Some("en")
/// - "/path/to/messages/zh-CN.json" -> Some("zh-CN")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json` in the messages directory.
///
/// A locale file with invalid JSON is fatal: every command that reads
/// messages would otherwise report against a partial key set.
pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<AllLocaleMessages> {
    let message_dir = message_dir.as_ref();
    let mut result = AllLocaleMessages::new();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check the 'messagesRoot' setting in .i18nkitrc.json.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let entries = fs::read_dir(message_dir)
        .with_context(|| format!("Failed to read directory: {}", message_dir.display()))?;
    for entry in entries {
        let path = entry?.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            let messages = parse_json_file(&path, &locale)?;
            result.insert(locale, messages);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::core::LocaleMessages;
    use crate::core::parsers::json::*;

    fn flatten_str(content: &str) -> LocaleMessages {
        let json: Value = serde_json::from_str(content).unwrap();
        let line_index = LineIndex::new(content);
        let mut result = LocaleMessages::new("en", "test.json");
        let mut flattener = Flattener {
            file_path: "test.json",
            content,
            line_index: &line_index,
            result: &mut result,
        };
        flattener.flatten(&json, String::new());
        result
    }

    #[test]
    fn test_flatten_nested() {
        let result = flatten_str(r#"{"painTracker": {"form": {"title": "Log pain"}}}"#);
        assert_eq!(
            result.get("painTracker.form.title").map(|e| &e.context.value),
            Some(&"Log pain".to_string())
        );
    }

    #[test]
    fn test_flatten_string_array_kept_whole() {
        let result = flatten_str(r#"{"tips": {"steps": ["Rest", "Heat"]}}"#);
        let entry = result.get("tips.steps").unwrap();
        assert_eq!(entry.value_type, ValueType::StringArray);
        assert_eq!(entry.context.value, "Rest, Heat");
        assert!(result.get("tips.steps.0").is_none());
    }

    #[test]
    fn test_flatten_object_array_indexed() {
        let result = flatten_str(r#"{"faq": [{"q": "Why?"}, {"q": "How?"}]}"#);
        assert_eq!(result.get("faq.1.q").unwrap().context.value, "How?");
    }

    #[test]
    fn test_flatten_other_values() {
        let result = flatten_str(r#"{"limits": {"max": 3, "enabled": true}}"#);
        assert_eq!(
            result.get("limits.max").unwrap().value_type,
            ValueType::Other
        );
        assert_eq!(result.get("limits.enabled").unwrap().context.value, "true");
    }

    #[test]
    fn test_find_key_line_skips_value_matches() {
        let content = r#"{
  "Auth": {
    "message": "Welcome to Auth page",
    "title": "Auth Login"
  }
}"#;
        let result = flatten_str(content);
        assert_eq!(result.get("Auth.title").unwrap().context.line(), 4);
        assert_eq!(result.get("Auth.message").unwrap().context.line(), 3);
    }

    #[test]
    fn test_find_key_line_follows_array_indices() {
        let content = r#"{
  "faq": [
    {
      "q": "Why, \"really\"?",
      "tags": ["a", "b"]
    },
    {
      "q": "How?"
    }
  ],
  "mixed": [1, "two"]
}"#;
        let result = flatten_str(content);
        assert_eq!(result.get("faq.0.q").unwrap().context.line(), 4);
        assert_eq!(result.get("faq.1.q").unwrap().context.line(), 8);
        assert_eq!(result.get("mixed.1").unwrap().context.line(), 11);
    }

    #[test]
    fn test_extract_locale() {
        assert_eq!(extract_locale(Path::new("en.json")), Some("en".to_string()));
        assert_eq!(
            extract_locale(Path::new("/path/to/messages/zh-CN.json")),
            Some("zh-CN".to_string())
        );
    }

    #[test]
    fn test_scan_message_files_skips_non_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"a": "A"}"#).unwrap();
        fs::write(dir.path().join("zh.json"), r#"{"a": "甲"}"#).unwrap();
        fs::write(dir.path().join("en.json.backup"), r#"{"old": "x"}"#).unwrap();

        let result = scan_message_files(dir.path()).unwrap();
        let locales: Vec<&String> = result.keys().collect();
        assert_eq!(locales, vec!["en", "zh"]);
    }

    #[test]
    fn test_scan_message_files_invalid_json_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en.json"), "{ broken").unwrap();

        let err = scan_message_files(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON file"));
    }

    #[test]
    fn test_scan_message_files_missing_dir() {
        let dir = tempdir().unwrap();
        let err = scan_message_files(dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
