//! Translation key extraction.
//!
//! A text-level approximation of how next-intl style code uses keys:
//!
//! ```text
//! const t = useTranslations('painTracker');     // binds t -> painTracker
//! const tc = await getTranslations('common');   // binds tc -> common
//! const g = await getTranslations({ locale, namespace: 'guide' });
//!
//! t('title')            -> painTracker.title
//! t.rich('intro')       -> painTracker.intro
//! t(`steps.${id}.name`) -> painTracker.steps.*.name (pattern)
//! t(key)                -> dynamic, cannot be checked
//! ```
//!
//! A bare `t(...)` with no binding in the file uses the key as written.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::core::{
    SourceContext, SourceFile,
    extract::FileCursor,
    suppressions::{SuppressibleRule, is_comment_line},
};

static BINDING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*=\s*(?:await\s+)?(?:useTranslations|getTranslations)\s*\(\s*(?:["'`]([^"'`]*)["'`]|\{[^}]*?\bnamespace\s*:\s*["'`]([^"'`]*)["'`][^}]*\}|[^)]*)\)"#,
    )
    .unwrap()
});

static CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_$][\w$]*)(?:\.(?:rich|raw|markup))?\s*\(").unwrap()
});

/// A key (or key pattern) used at one location.
#[derive(Debug, Clone)]
pub struct KeyUsage {
    /// Fully resolved key, or a pattern with `*` for template keys.
    pub key: String,
    pub context: SourceContext,
    /// Set when a `keys` suppression covers the line.
    pub suppressed: bool,
}

/// A translation call whose key cannot be determined statically.
#[derive(Debug, Clone)]
pub struct DynamicKeyUsage {
    pub context: SourceContext,
    pub expression: String,
}

/// Everything the key scanner found in one file.
#[derive(Debug, Clone, Default)]
pub struct FileKeyUsages {
    pub file_path: String,
    pub keys: Vec<KeyUsage>,
    pub patterns: Vec<KeyUsage>,
    pub dynamic: Vec<DynamicKeyUsage>,
}

impl FileKeyUsages {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.patterns.is_empty() && self.dynamic.is_empty()
    }
}

struct Binding {
    offset: usize,
    namespace: String,
}

/// Namespace bindings in one file, by binding name, in source order.
struct Bindings(HashMap<String, Vec<Binding>>);

impl Bindings {
    fn collect(content: &str) -> Self {
        let mut bindings: HashMap<String, Vec<Binding>> = HashMap::new();
        for caps in BINDING_REGEX.captures_iter(content) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let namespace = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or(String::new(), |m| m.as_str().to_string());
            bindings
                .entry(name.as_str().to_string())
                .or_default()
                .push(Binding {
                    offset: whole.start(),
                    namespace,
                });
        }
        Self(bindings)
    }

    /// Namespace in effect for a call at `offset`: the nearest earlier binding,
    /// else the first one in the file.
    fn namespace_at(&self, name: &str, offset: usize) -> Option<&str> {
        let bindings = self.0.get(name)?;
        bindings
            .iter()
            .rev()
            .find(|b| b.offset < offset)
            .or_else(|| bindings.first())
            .map(|b| b.namespace.as_str())
    }
}

enum KeyArg {
    Literal(String),
    Template(String),
    Dynamic(String),
}

/// Extract the key usages of one file.
pub fn scan_translation_calls(file: &SourceFile) -> FileKeyUsages {
    let content = file.content.as_str();
    let cursor = FileCursor::new(&file.path, content);
    let bindings = Bindings::collect(content);
    let mut usages = FileKeyUsages {
        file_path: file.path.clone(),
        ..Default::default()
    };

    for caps in CALL_REGEX.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        let start = whole.start();

        // `i18n.t(...)` and `function t(...)` are not calls of a binding.
        if content[..start].ends_with('.') || preceding_word(content, start) == Some("function") {
            continue;
        }

        let namespace = match bindings.namespace_at(name, start) {
            Some(ns) => ns,
            None if name == "t" => "",
            None => continue,
        };

        let line = cursor.line_of(start);
        if is_comment_line(cursor.line_text(line).trim_start()) {
            continue;
        }
        let suppressed = file.suppressions.is_suppressed(line, SuppressibleRule::Keys);

        match parse_key_arg(&content[whole.end()..]) {
            Some(KeyArg::Literal(key)) => usages.keys.push(KeyUsage {
                key: qualify(namespace, &key),
                context: cursor.context_at(start),
                suppressed,
            }),
            Some(KeyArg::Template(pattern)) => usages.patterns.push(KeyUsage {
                key: qualify(namespace, &pattern),
                context: cursor.context_at(start),
                suppressed,
            }),
            Some(KeyArg::Dynamic(expression)) if !suppressed => {
                usages.dynamic.push(DynamicKeyUsage {
                    context: cursor.context_at(start),
                    expression,
                })
            }
            _ => {}
        }
    }

    usages
}

fn preceding_word(content: &str, offset: usize) -> Option<&str> {
    content[..offset].trim_end().rsplit(|c: char| !c.is_alphanumeric() && c != '_').next()
}

fn qualify(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", namespace, key)
    }
}

/// Parse the first call argument. `rest` starts just after `(`.
///
/// Returns `None` for calls without arguments.
fn parse_key_arg(rest: &str) -> Option<KeyArg> {
    let rest = rest.trim_start();
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;

    match first {
        '\'' | '"' => {
            let end = rest[1..].find(first)? + 1;
            let key = &rest[1..end];
            if key.contains('\n') {
                return None;
            }
            Some(KeyArg::Literal(key.to_string()))
        }
        '`' => {
            let end = rest[1..].find('`')? + 1;
            let key = &rest[1..end];
            if key.contains("${") {
                Some(KeyArg::Template(template_to_pattern(key)))
            } else {
                Some(KeyArg::Literal(key.to_string()))
            }
        }
        ')' => None,
        _ => {
            let end = rest
                .find(|c: char| c == ')' || c == ',' || c == '\n')
                .unwrap_or(rest.len());
            let expression = rest[..end].trim();
            if expression.is_empty() {
                None
            } else {
                Some(KeyArg::Dynamic(expression.to_string()))
            }
        }
    }
}

/// `steps.${id}.name` -> `steps.*.name`
fn template_to_pattern(template: &str) -> String {
    let mut out = String::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        out.push('*');
        rest = match rest[start..].find('}') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}
