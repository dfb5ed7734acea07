use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of source files that may contain UI text.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted and free of duplicates.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Options for one scan.
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub extensions: &'a [&'a str],
    pub verbose: bool,
}

enum LiteralIgnore {
    /// A bare name such as `node_modules` matches any path component.
    Component(String),
    /// A relative path such as `app/legacy` matches under the scan root.
    Prefix(PathBuf),
}

struct IgnoreSet {
    base: PathBuf,
    literals: Vec<LiteralIgnore>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, options: &ScanOptions<'_>) -> Self {
        let mut literals = Vec::new();
        let mut globs = Vec::new();

        for p in options.ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => {
                        if options.verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else if p.contains('/') {
                literals.push(LiteralIgnore::Prefix(
                    base_dir.join(p.trim_start_matches("./")),
                ));
            } else {
                literals.push(LiteralIgnore::Component(p.clone()));
            }
        }

        if options.ignore_test_files {
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            base: base_dir.to_path_buf(),
            literals,
            globs,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let literal_hit = self.literals.iter().any(|ignore| match ignore {
            LiteralIgnore::Component(name) => path
                .strip_prefix(&self.base)
                .unwrap_or(path)
                .components()
                .any(|c| c.as_os_str().to_str() == Some(name.as_str())),
            LiteralIgnore::Prefix(prefix) => path.starts_with(prefix),
        });
        literal_hit || {
            let path_str = path.to_string_lossy();
            self.globs.iter().any(|p| p.matches(&path_str))
        }
    }
}

pub fn scan_files(base_dir: &str, options: &ScanOptions<'_>) -> ScanResult {
    let base = Path::new(base_dir);
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;
    let ignore_set = IgnoreSet::new(base, options);

    let dirs_to_scan: Vec<PathBuf> = if options.includes.is_empty() {
        vec![base.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in options.includes {
            if is_glob_pattern(inc) {
                let full_pattern = base.join(inc);
                match glob(&full_pattern.to_string_lossy()) {
                    Ok(entries) => paths.extend(entries.flatten().filter(|e| e.is_dir())),
                    Err(e) => {
                        if options.verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = base.join(inc.trim_start_matches("./"));
                if path.exists() {
                    paths.push(path);
                } else if options.verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        let walker = WalkDir::new(&dir)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !ignore_set.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if options.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if entry.file_type().is_file()
                && has_extension(path, options.extensions)
                && !ignore_set.is_ignored(path)
            {
                files.insert(path.to_string_lossy().into());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
