use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nkitrc.json";

/// Path segments that mark a file as test code.
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.*",
    "**/*.spec.*",
    "**/__tests__/**",
    "**/__mocks__/**",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    /// Translation keys that are never reported as unused.
    /// `*` matches any run of characters, including dots.
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,
    #[serde(default = "default_site_hosts")]
    pub site_hosts: Vec<String>,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_site_url")]
    pub site_url: String,
    #[serde(default = "default_articles_root")]
    pub articles_root: String,
    #[serde(default = "default_image_keywords")]
    pub image_keywords: Vec<String>,
}

fn default_includes() -> Vec<String> {
    ["app", "components", "lib", "pages", "src"]
        .map(String::from)
        .to_vec()
}

fn default_ignores() -> Vec<String> {
    [
        "node_modules",
        ".next",
        "dist",
        "build",
        "out",
        "coverage",
        "reports",
        "**/*.backup*",
    ]
    .map(String::from)
    .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_reports_dir() -> String {
    "reports".to_string()
}

fn default_whitelist() -> Vec<String> {
    [
        "painTracker.symptoms",
        "painTracker.levels",
        "painTracker.locations",
        "painTracker.triggers",
        "painTracker.activities",
        "healthGuide.sections",
        "scenarioSolutions.scenarios",
        "naturalTherapies.categories",
        "teenHealth.topics",
        "interactiveTools.components",
        "*.title",
        "*.description",
        "*.subtitle",
        "*.cta",
        "*.button",
        "*.label",
        "*.placeholder",
        "*.error",
        "*.success",
        "*.loading",
        "*.empty",
        "*.notFound",
    ]
    .map(String::from)
    .to_vec()
}

fn default_site_hosts() -> Vec<String> {
    vec!["periodhub.health".to_string()]
}

fn default_site_name() -> String {
    "Period Hub".to_string()
}

fn default_site_url() -> String {
    "https://periodhub.health".to_string()
}

fn default_articles_root() -> String {
    "content/articles".to_string()
}

fn default_image_keywords() -> Vec<String> {
    [
        "period", "menstrual", "pain", "health", "women", "cycle", "relief", "痛经", "经期", "健康",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            messages_root: default_messages_root(),
            primary_locale: default_primary_locale(),
            reports_dir: default_reports_dir(),
            ignore_texts: Vec::new(),
            whitelist: default_whitelist(),
            site_hosts: default_site_hosts(),
            site_name: default_site_name(),
            site_url: default_site_url(),
            articles_root: default_articles_root(),
            image_keywords: default_image_keywords(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is invalid,
    /// or if a host in `siteHosts` is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Literal includes such as `app/[locale]` are directory paths, not globs.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.site_hosts.iter().any(|h| h.trim().is_empty()) {
            anyhow::bail!("'siteHosts' must not contain empty entries");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
