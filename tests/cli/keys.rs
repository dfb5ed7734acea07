use anyhow::Result;
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const PAGE: &str = r#"export default function Home() {
  const t = useTranslations('home');
  return <main>{t('heading')}{t('missing')}{t(dynamicKey)}</main>;
}
"#;

#[test]
fn test_keys_reports_missing_unused_and_dynamic() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/page.tsx", PAGE)?;
    test.write_messages(
        r#"{"home": {"heading": "首页", "old": "旧内容"}}"#,
        r#"{"home": {"heading": "Home", "old": "Old"}}"#,
    )?;

    with_settings!({filters => vec![(r"\d{4}-\d{2}-\d{2}", "[DATE]")]}, {
        assert_cmd_snapshot!(test.keys_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: "home.missing"  missing-key
          --> ./app/page.tsx:3:31
          |
        3 |   return <main>{t('heading')}{t('missing')}{t(dynamicKey)}</main>;
          |                               ^
          = note: missing in: en, zh

        warning: "dynamicKey"  dynamic-key
          --> ./app/page.tsx:3:45
          |
        3 |   return <main>{t('heading')}{t('missing')}{t(dynamicKey)}</main>;
          |                                             ^
          = hint: use a template key or add the possible keys to 'whitelist'

        warning: "home.old"  unused-key
          --> ./messages/zh.json:1:1
          = note: ("旧内容")

        ✘ 3 problems (1 error, 2 warnings)
        Keys: 2 key(s) used in 1 of 1 file(s), 2 defined
          - missing: 1, unused: 1, dynamic: 1
        Report written to reports/keys-[DATE].json and reports/keys-[DATE].md

        ----- stderr -----
        "#);
    });

    let report = test.report_json("keys")?;
    assert_eq!(report["summary"]["missing"], 1);
    assert_eq!(report["summary"]["unused"], 1);
    assert_eq!(report["files"][0]["keys"][0], "home.heading");
    assert_eq!(report["files"][0]["dynamic"], 1);
    Ok(())
}

#[test]
fn test_keys_all_defined() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "app/page.tsx",
        "const t = useTranslations('home');\nexport const a = t('heading');\n",
    )?;
    test.write_messages(r#"{"home": {"heading": "首页"}}"#, r#"{"home": {"heading": "Home"}}"#)?;

    let mut cmd = test.keys_command();
    cmd.arg("--no-report");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Keys: 1 key(s) used in 1 of 1 file(s), 1 defined
      - missing: 0, unused: 0, dynamic: 0
    ✓ Checked 1 source file, 2 locale files - no issues found

    ----- stderr -----
    ");
    Ok(())
}
