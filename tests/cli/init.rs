use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, 0);
    assert_snapshot!(out.stdout, @"✓ Created .i18nkitrc.json");

    let content = test.read_file(".i18nkitrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["reportsDir"], "reports");
    assert!(parsed["siteHosts"].is_array());
    assert!(content.contains("\n  \"includes\""));
    Ok(())
}

#[test]
fn test_init_keeps_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nkitrc.json", "{}")?;

    let out = test.run(&["init"])?;
    assert_eq!(out.code, 1);
    assert_snapshot!(out.stdout, @"✘ .i18nkitrc.json already exists");
    assert_eq!(test.read_file(".i18nkitrc.json")?, "{}");
    Ok(())
}
