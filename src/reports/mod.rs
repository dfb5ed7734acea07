//! JSON and Markdown reports written under `reportsDir`.
//!
//! Every analysing command builds one [`ReportDocument`]: the issues it found,
//! a serializable summary, optional extra JSON fields and optional Markdown
//! sections. [`write_reports`] then writes `<name>-YYYY-MM-DD.json` and
//! `<name>-YYYY-MM-DD.md` next to each other.

mod json;
mod markdown;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::issues::{Issue, compare_issues};

pub use json::IssueEntry;

/// Extra Markdown section appended after the summary.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Everything one report file pair contains.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    /// File name prefix, e.g. `hardcode`.
    pub name: String,
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub summary: Value,
    pub issues: Vec<IssueEntry>,
    /// Command-specific JSON fields, written after `issues`.
    pub data: Map<String, Value>,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            generated_at: Local::now(),
            summary: Value::Object(Map::new()),
            issues: Vec::new(),
            data: Map::new(),
            sections: Vec::new(),
        }
    }

    pub fn summary(mut self, summary: &impl Serialize) -> Result<Self> {
        self.summary = serde_json::to_value(summary).context("Failed to serialize report summary")?;
        Ok(self)
    }

    /// Issues are stored in file, line and column order.
    pub fn issues(mut self, issues: &[Issue]) -> Self {
        let mut sorted: Vec<&Issue> = issues.iter().collect();
        sorted.sort_by(|a, b| compare_issues(a, b));
        self.issues = sorted.into_iter().map(IssueEntry::from).collect();
        self
    }

    pub fn data(mut self, field: &str, value: &impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to serialize report field '{}'", field))?;
        self.data.insert(field.to_string(), value);
        Ok(self)
    }

    pub fn section(mut self, heading: &str, lines: Vec<String>) -> Self {
        if !lines.is_empty() {
            self.sections.push(Section {
                heading: heading.to_string(),
                lines,
            });
        }
        self
    }

    fn file_stem(&self) -> String {
        format!("{}-{}", self.name, self.generated_at.format("%Y-%m-%d"))
    }
}

/// Paths of the files written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Write the JSON and Markdown files, creating `dir` when needed.
///
/// A report from an earlier run on the same day is overwritten.
pub fn write_reports(document: &ReportDocument, dir: &Path) -> Result<ReportPaths> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create reports directory: {}", dir.display()))?;

    let stem = document.file_stem();
    let paths = ReportPaths {
        json: dir.join(format!("{}.json", stem)),
        markdown: dir.join(format!("{}.md", stem)),
    };

    fs::write(&paths.json, json::render(document)?)
        .with_context(|| format!("Failed to write report: {}", paths.json.display()))?;
    fs::write(&paths.markdown, markdown::render(document))
        .with_context(|| format!("Failed to write report: {}", paths.markdown.display()))?;

    Ok(paths)
}
