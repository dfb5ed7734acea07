use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub const BACKUP_SUFFIX: &str = ".backup";

/// Copy `path` to `<path>.backup` before it is rewritten.
///
/// An older backup is replaced.
pub fn write_backup(path: &Path) -> Result<PathBuf> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(BACKUP_SUFFIX);
    let backup = PathBuf::from(backup);
    fs::copy(path, &backup).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            path.display(),
            backup.display()
        )
    })?;
    Ok(backup)
}
