//! Shared helpers for rule implementations.

use std::cmp::Ordering;

use crate::core::{MessageContext, SourceContext};

/// Order by file path, then line, then key.
pub fn compare_message_contexts(a: &MessageContext, b: &MessageContext) -> Ordering {
    a.location
        .file_path
        .cmp(&b.location.file_path)
        .then_with(|| a.location.line.cmp(&b.location.line))
        .then_with(|| a.key.cmp(&b.key))
}

/// Order by file path, then line, then column.
pub fn compare_source_contexts(a: &SourceContext, b: &SourceContext) -> Ordering {
    a.location.cmp(&b.location)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::{
        AllLocaleMessages, LocaleMessages, MessageContext, MessageEntry, MessageLocation,
        ValueType,
    };

    /// Locale messages with one string entry per line, starting at line 2.
    pub fn locale(locale: &str, entries: &[(&str, &str)]) -> LocaleMessages {
        let file = format!("./messages/{}.json", locale);
        let mut messages = LocaleMessages::new(locale, file.clone());
        for (i, (key, value)) in entries.iter().enumerate() {
            messages.entries.insert(
                key.to_string(),
                MessageEntry {
                    context: MessageContext::new(
                        MessageLocation::with_line(file.clone(), i + 2),
                        *key,
                        *value,
                    ),
                    value_type: ValueType::String,
                },
            );
        }
        messages
    }

    pub fn all(locales: Vec<LocaleMessages>) -> AllLocaleMessages {
        locales
            .into_iter()
            .map(|m| (m.locale.clone(), m))
            .collect()
    }
}
