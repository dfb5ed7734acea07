use std::{collections::BTreeMap, fmt};

/// Position information in locale files (JSON).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// Shape of a flattened translation value.
///
/// - `String`: `"submit": "Submit"`
/// - `StringArray`: `"steps": ["One", "Two"]`, kept whole rather than indexed
/// - `Other`: numbers, booleans and null
///
/// Locales disagreeing on the shape of a key is reported as a type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueType {
    String,
    StringArray,
    Other,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::StringArray => write!(f, "array"),
            ValueType::Other => write!(f, "other"),
        }
    }
}

/// A locale whose value type differs from the primary locale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocaleTypeMismatch {
    pub locale: String,
    pub actual_type: ValueType,
    pub location: MessageLocation,
}

impl LocaleTypeMismatch {
    pub fn new(
        locale: impl Into<String>,
        actual_type: ValueType,
        location: MessageLocation,
    ) -> Self {
        Self {
            locale: locale.into(),
            actual_type,
            location,
        }
    }
}

/// Position with context information in locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The translation key (e.g., "painTracker.title").
    pub key: String,
    /// The translation value. Arrays are joined with ", ".
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// A single flattened entry from a locale file.
#[derive(Debug, Clone)]
pub struct MessageEntry {
    pub context: MessageContext,
    pub value_type: ValueType,
}

/// All messages for a single locale.
#[derive(Debug, Clone)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "zh").
    pub locale: String,
    pub file_path: String,
    /// Entries keyed by dotted translation key, sorted.
    pub entries: BTreeMap<String, MessageEntry>,
}

/// Every loaded locale, sorted by locale code.
pub type AllLocaleMessages = BTreeMap<String, LocaleMessages>;

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True for a leaf key or for the parent of nested keys (`t.raw('steps')`).
    pub fn has_key_or_children(&self, key: &str) -> bool {
        if self.entries.contains_key(key) {
            return true;
        }
        let prefix = format!("{}.", key);
        self.entries
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(k, _)| k.starts_with(&prefix))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
