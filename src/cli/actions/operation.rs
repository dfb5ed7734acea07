use std::{
    fs,
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{backup::write_backup, insert_alt::apply_alt_fixes, json_editor::JsonEditor};
use crate::{core::MessageContext, rules::images::AltFix};

/// One edit in one file.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Delete a dotted key from a locale file.
    DeleteJsonKey { context: MessageContext },
    /// Write a generated alt attribute into an image tag.
    InsertAlt { fix: AltFix },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::DeleteJsonKey { context } => context.file_path(),
            Operation::InsertAlt { fix } => &fix.file,
        }
    }

    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        match self {
            Operation::DeleteJsonKey { context } => {
                let _ = writeln!(
                    writer,
                    "  {} {}:{}  {} {}",
                    "-".red(),
                    context.file_path(),
                    context.line(),
                    context.key.bold(),
                    format!("(\"{}\")", context.value).dimmed()
                );
            }
            Operation::InsertAlt { fix } => {
                let _ = writeln!(
                    writer,
                    "  {} {}:{}  {} {}",
                    "+".green(),
                    fix.file,
                    fix.line,
                    format!("alt=\"{}\"", fix.alt).bold(),
                    format!("({})", fix.src).dimmed()
                );
            }
        }
    }

    /// Apply every operation targeting `file_path`, backing the file up first.
    ///
    /// Returns the number of operations that changed the file. Nothing is
    /// written (and no backup is made) when none did.
    pub(crate) fn apply_to_file(file_path: &str, ops: &[&Operation]) -> Result<usize> {
        let path = Path::new(file_path);
        let mut keys: Vec<&str> = Vec::new();
        let mut fixes: Vec<&AltFix> = Vec::new();
        for op in ops {
            match op {
                Operation::DeleteJsonKey { context } => keys.push(&context.key),
                Operation::InsertAlt { fix } => fixes.push(fix),
            }
        }

        let mut applied = 0;
        if !keys.is_empty() {
            let mut editor = JsonEditor::open(path)?;
            let removed = editor.delete_keys(&keys);
            if removed > 0 {
                write_backup(path)?;
                editor.save()?;
            }
            applied += removed;
        }
        if !fixes.is_empty() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let (updated, written) = apply_alt_fixes(&content, &fixes);
            if written > 0 {
                write_backup(path)?;
                fs::write(path, updated)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
            }
            applied += written;
        }
        Ok(applied)
    }
}
