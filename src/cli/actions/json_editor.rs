use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Deletes dotted keys from a locale file.
///
/// Key order is preserved (`serde_json` with `preserve_order`). Output is
/// pretty-printed with 2-space indentation and a trailing newline.
pub struct JsonEditor {
    file_path: PathBuf,
    value: Value,
}

impl JsonEditor {
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        if !value.is_object() {
            bail!("Root of JSON file must be an object: {}", path.display());
        }
        Ok(Self {
            file_path: path.to_path_buf(),
            value,
        })
    }

    /// Delete keys by their full paths (e.g. `common.submit`) and prune the
    /// objects left empty.
    ///
    /// Returns how many keys were actually present.
    pub fn delete_keys(&mut self, key_paths: &[&str]) -> usize {
        let removed = key_paths
            .iter()
            .filter(|key_path| delete_key_path(&mut self.value, key_path))
            .count();
        remove_empty_objects(&mut self.value);
        removed
    }

    pub fn content(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(&self.value).context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.file_path, self.content()?)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))
    }
}

/// Parents flattened from arrays (`steps.0.title`) are walked by index.
/// Array items themselves are never removed, so later indices stay valid.
fn delete_key_path(value: &mut Value, key_path: &str) -> bool {
    let (parents, last) = key_path.rsplit_once('.').unwrap_or(("", key_path));

    let mut current = value;
    if !parents.is_empty() {
        for part in parents.split('.') {
            let next = match current {
                Value::Object(map) => map.get_mut(part),
                Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
                _ => None,
            };
            match next {
                Some(child) => current = child,
                None => return false,
            }
        }
    }

    match current {
        Value::Object(map) => map.shift_remove(last).is_some(),
        _ => false,
    }
}

fn remove_empty_objects(value: &mut Value) {
    if let Value::Object(map) = value {
        for child in map.values_mut() {
            remove_empty_objects(child);
        }
        map.retain(|_, v| !matches!(v, Value::Object(m) if m.is_empty()));
    }
}
