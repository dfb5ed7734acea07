use anyhow::{Context, Result};
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(
        "app/page.tsx",
        "const t = useTranslations('home');\nexport const a = t('heading');\n",
    )?;
    test.write_messages(
        r#"{"home": {"heading": "首页", "old": "旧内容"}, "legacy": {"banner": "横幅"}}"#,
        r#"{"home": {"heading": "Home", "extra": "Extra"}}"#,
    )
}

/// Tips looked up through a variable, as in a rotating tip widget.
fn setup_dynamic(test: &CliTest, page: &str) -> Result<()> {
    test.write_file("app/tips.tsx", page)?;
    test.write_messages(
        r#"{"tips": {"heat": "热敷", "rest": "休息"}}"#,
        r#"{"tips": {"heat": "Heat", "rest": "Rest"}}"#,
    )
}

fn json_key_exists(value: &Value, key_path: &str) -> bool {
    let mut current = value;
    for part in key_path.split('.') {
        match current.get(part) {
            Some(v) => current = v,
            None => return false,
        }
    }
    true
}

fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("JSON should be parseable")
}

#[test]
fn test_clean_dry_run_changes_nothing() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;
    let before = test.read_file("messages/zh.json")?;

    with_settings!({filters => vec![(r"\d{4}-\d{2}-\d{2}", "[DATE]")]}, {
        assert_cmd_snapshot!(test.clean_command(), @r#"
        success: true
        exit_code: 0
        ----- stdout -----
          - ./messages/zh.json:1  home.old ("旧内容")
          - ./messages/zh.json:1  legacy.banner ("横幅")
          - ./messages/en.json:1  home.extra ("Extra")
        Would delete 3 key(s) in 2 file(s).
          - unused: 2 key(s)
          - orphan: 1 key(s)
        Run with --apply to delete these keys.
        Report written to reports/clean-[DATE].json and reports/clean-[DATE].md

        ----- stderr -----
        "#);
    });

    assert_eq!(test.read_file("messages/zh.json")?, before);
    assert!(!test.root().join("messages/zh.json.backup").exists());

    let report = test.report_json("clean")?;
    assert_eq!(report["summary"]["isApply"], false);
    assert_eq!(report["summary"]["unusedCount"], 2);
    Ok(())
}

#[test]
fn test_clean_apply_deletes_and_backs_up() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;
    let original = test.read_file("messages/zh.json")?;

    let mut cmd = test.clean_command();
    cmd.args(["--apply", "--no-report"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Deleted 3 key(s) in 2 file(s) (processed 3 key(s)).
      - unused: 2 key(s)
      - orphan: 1 key(s)

    ----- stderr -----
    ");

    let zh = parse(&test.read_file("messages/zh.json")?)?;
    assert!(json_key_exists(&zh, "home.heading"));
    assert!(!json_key_exists(&zh, "home.old"));
    // Emptied parents are pruned.
    assert!(!json_key_exists(&zh, "legacy"));

    let en = parse(&test.read_file("messages/en.json")?)?;
    assert!(json_key_exists(&en, "home.heading"));
    assert!(!json_key_exists(&en, "home.extra"));

    assert_eq!(test.read_file("messages/zh.json.backup")?, original);
    assert!(test.root().join("messages/en.json.backup").exists());
    Ok(())
}

#[test]
fn test_clean_only_orphans() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;

    let mut cmd = test.clean_command();
    cmd.args(["--apply", "--rules", "orphan", "--no-report"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Deleted 1 key(s) in 1 file(s) (processed 1 key(s)).
      - orphan: 1 key(s)

    ----- stderr -----
    ");

    let zh = parse(&test.read_file("messages/zh.json")?)?;
    assert!(json_key_exists(&zh, "home.old"));
    let en = parse(&test.read_file("messages/en.json")?)?;
    assert!(!json_key_exists(&en, "home.extra"));
    assert!(!test.root().join("messages/zh.json.backup").exists());
    Ok(())
}

#[test]
fn test_clean_refuses_with_dynamic_keys() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_dynamic(
        &test,
        "const t = useTranslations('tips');\nexport const tip = (k) => t(k);\n",
    )?;
    let before = test.read_file("messages/zh.json")?;

    let mut cmd = test.clean_command();
    cmd.args(["--apply", "--no-report"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Cannot clean unused keys, 1 dynamic key call(s) found (first at ./app/tips.tsx:2: t(k)).
    Run `i18nkit keys` to see them, then use literal keys or add `// i18nkit-disable-next-line keys` above each call.
    ");

    assert_eq!(test.read_file("messages/zh.json")?, before);
    assert!(!test.root().join("messages/zh.json.backup").exists());
    Ok(())
}

#[test]
fn test_clean_suppressed_dynamic_key_is_allowed() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_dynamic(
        &test,
        "const t = useTranslations('tips');\n// i18nkit-disable-next-line keys\nexport const tip = (k) => t(k);\nexport const heat = t('heat');\n",
    )?;

    let mut cmd = test.clean_command();
    cmd.args(["--apply", "--no-report"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Deleted 1 key(s) in 1 file(s) (processed 1 key(s)).
      - unused: 1 key(s)

    ----- stderr -----
    ");

    let zh = parse(&test.read_file("messages/zh.json")?)?;
    assert!(json_key_exists(&zh, "tips.heat"));
    assert!(!json_key_exists(&zh, "tips.rest"));
    Ok(())
}

#[test]
fn test_clean_orphans_ignore_dynamic_keys() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_dynamic(
        &test,
        "const t = useTranslations('tips');\nexport const tip = (k) => t(k);\n",
    )?;

    let mut cmd = test.clean_command();
    cmd.args(["--rules", "orphan", "--no-report"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No unused or orphan keys found

    ----- stderr -----
    ");
    Ok(())
}
