//! Action trait definition.
//!
//! Actions convert findings into Operations. Each Action can be implemented
//! for several input types.

use std::collections::BTreeMap;

use anyhow::Result;

use super::operation::Operation;

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations that changed nothing (key already gone, tag moved).
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Converts findings into Operations and executes or previews them.
///
/// ```ignore
/// if apply {
///     DeleteKey::run(&unused_issues)?;
/// } else {
///     DeleteKey::preview_to(&unused_issues, &mut writer);
/// }
/// ```
pub trait Action<I> {
    /// Convert findings to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(items: &[I]) -> Vec<Operation>;

    /// Back up and modify the files.
    fn run(items: &[I]) -> Result<ActionStats> {
        execute_operations(&Self::to_operations(items))
    }

    /// Write what `run` would change (dry-run mode).
    fn preview_to<W: std::io::Write>(items: &[I], writer: &mut W) {
        for op in Self::to_operations(items) {
            op.preview_to(writer);
        }
    }
}

/// Execute operations file by file; each file is backed up once.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        by_file.entry(op.file_path()).or_default().push(op);
    }

    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };
    for (file_path, file_ops) in by_file {
        let applied = Operation::apply_to_file(file_path, &file_ops)?;
        if applied > 0 {
            stats.files_modified += 1;
        }
        stats.changes_applied += applied;
        stats.skipped += file_ops.len() - applied;
    }
    Ok(stats)
}
