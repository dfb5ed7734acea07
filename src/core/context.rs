use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        AllLocaleMessages, LocaleMessages,
        file_scanner::{SOURCE_EXTENSIONS, ScanOptions, scan_files},
        parsers::json::scan_message_files,
        suppressions::Suppressions,
    },
};

/// A source file read into memory, with its suppression comments.
pub struct SourceFile {
    pub path: String,
    pub content: String,
    pub suppressions: Suppressions,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let suppressions = Suppressions::collect(&content);
        Self {
            path: path.into(),
            content,
            suppressions,
        }
    }
}

/// Aggregated message data from all locale files.
pub struct MessageData {
    /// Messages for every locale, keyed by locale code.
    pub all_messages: AllLocaleMessages,
    /// Messages for the primary locale (source of truth for keys).
    pub primary_messages: LocaleMessages,
}

/// Shared state for one command run.
///
/// Configuration is resolved eagerly (CLI args > config file > defaults).
/// Source files and locale messages are loaded on first access, so commands
/// only pay for what they read.
pub struct CheckContext {
    /// Merged configuration.
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Extensions of the source files to scan.
    pub extensions: &'static [&'static str],

    /// Texts never reported as hardcoded (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    pub verbose: bool,

    sources: OnceLock<Vec<SourceFile>>,
    messages: OnceLock<MessageData>,
}

impl CheckContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }
        if let Some(ref messages_root) = common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            extensions: SOURCE_EXTENSIONS,
            ignore_texts,
            verbose,
            sources: OnceLock::new(),
            messages: OnceLock::new(),
        })
    }

    pub fn with_extensions(mut self, extensions: &'static [&'static str]) -> Self {
        self.extensions = extensions;
        self
    }

    /// Resolve a configured path against the project root.
    ///
    /// Absolute paths are kept. When the root is the current directory the
    /// path is returned unchanged so reported paths stay short.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            return p.to_path_buf();
        }
        let is_cur_dir = self
            .root_dir
            .components()
            .all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            self.root_dir.join(rel)
        }
    }

    pub fn message_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.messages_root)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.reports_dir)
    }

    /// Source files matching `extensions`, read in parallel.
    pub fn sources(&self) -> &[SourceFile] {
        self.sources.get_or_init(|| {
            read_sources(&self.root_dir, &self.config, self.extensions, self.verbose)
        })
    }

    /// Locale messages; fails when the directory or the primary locale is missing.
    pub fn messages(&self) -> Result<&MessageData> {
        if let Some(data) = self.messages.get() {
            return Ok(data);
        }
        let data = load_message_data(&self.message_dir(), &self.config.primary_locale)?;
        Ok(self.messages.get_or_init(|| data))
    }

    /// Load sources and messages together, scanning both in parallel.
    pub fn load_all(&self) -> Result<(&[SourceFile], &MessageData)> {
        if self.sources.get().is_none() && self.messages.get().is_none() {
            let message_dir = self.message_dir();
            let (root_dir, config, extensions, verbose) =
                (&self.root_dir, &self.config, self.extensions, self.verbose);

            let (sources, messages) = rayon::join(
                || read_sources(root_dir, config, extensions, verbose),
                || load_message_data(&message_dir, &config.primary_locale),
            );

            let _ = self.sources.set(sources);
            let _ = self.messages.set(messages?);
        }
        Ok((self.sources(), self.messages()?))
    }
}

fn read_sources(
    root_dir: &Path,
    config: &Config,
    extensions: &[&str],
    verbose: bool,
) -> Vec<SourceFile> {
    let root = root_dir.to_string_lossy();
    let scan_result = scan_files(
        &root,
        &ScanOptions {
            includes: &config.includes,
            ignores: &config.ignores,
            ignore_test_files: config.ignore_test_files,
            extensions,
            verbose,
        },
    );

    if scan_result.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            scan_result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    scan_result
        .files
        .par_iter()
        .filter_map(|path| match fs::read_to_string(path) {
            Ok(content) => Some(SourceFile::new(path.clone(), content)),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path,
                        e
                    );
                }
                None
            }
        })
        .collect()
}

fn load_message_data(message_dir: &Path, primary_locale: &str) -> Result<MessageData> {
    let all_messages = scan_message_files(message_dir)?;
    let primary_messages = all_messages
        .get(primary_locale)
        .ok_or_else(|| {
            anyhow!(
                "Primary locale '{}' messages not found in '{}'",
                primary_locale,
                message_dir.display()
            )
        })?
        .clone();

    Ok(MessageData {
        all_messages,
        primary_messages,
    })
}
