use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result, bail};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod clean;
mod fix_alt;
mod hardcode;
mod images;
mod init;
mod keys;
mod monitor;
mod pdf;
mod seo;
mod urls;
mod validate;

const BIN_NAME: &str = "i18nkit";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

/// Captured result of one CLI run.
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `.i18nkitrc.json` scanning `app/`, Chinese as primary locale.
    pub fn with_config() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            ".i18nkitrc.json",
            r#"{
  "includes": ["app"],
  "messagesRoot": "./messages",
  "primaryLocale": "zh",
  "siteHosts": ["periodhub.health"]
}"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_messages(&self, zh: &str, en: &str) -> Result<()> {
        self.write_file("messages/zh.json", zh)?;
        self.write_file("messages/en.json", en)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn hardcode_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("hardcode");
        cmd
    }

    pub fn keys_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("keys");
        cmd
    }

    pub fn validate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("validate");
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn images_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("images");
        cmd
    }

    pub fn urls_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("urls");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<RunOutput> {
        let output = self.command().args(args).output()?;
        Ok(RunOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Report files named `<name>-<date>.<ext>` in `reports/`.
    pub fn report_files(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.project_dir.join("reports");
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let prefix = format!("{}-", name);
        let mut files: Vec<String> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|file| file.starts_with(&prefix))
            .collect();
        files.sort();
        Ok(files)
    }

    pub fn report_json(&self, name: &str) -> Result<Value> {
        let Some(file) = self
            .report_files(name)?
            .into_iter()
            .find(|file| file.ends_with(".json"))
        else {
            bail!("no {} report written", name);
        };
        let content = self.read_file(&format!("reports/{}", file))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nkitrc.json", "{ not json")?;

    let out = test.run(&["hardcode"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.starts_with("Error: Failed to parse config file"));
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let out = test.run(&[])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Usage: i18nkit"));
    Ok(())
}
