use anyhow::Result;
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const PAGE: &str = r#"export default function Page({ locale }) {
  const title = locale === 'zh' ? '经期指南' : 'Period Guide';
  return (
    <h1>
      痛经缓解
    </h1>
  );
}
"#;

#[test]
fn test_hardcode_reports_and_fails_on_errors() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/page.tsx", PAGE)?;

    with_settings!({filters => vec![(r"\d{4}-\d{2}-\d{2}", "[DATE]")]}, {
        assert_cmd_snapshot!(test.hardcode_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: "经期指南"  conditional-string
          --> ./app/page.tsx:2:17
          |
        2 |   const title = locale === 'zh' ? '经期指南' : 'Period Guide';
          |                 ^
          = hint: move the text to messages and use t('app.periodGuide')

        warning: "痛经缓解"  jsx-text
          --> ./app/page.tsx:5:7
          |
        5 |       痛经缓解
          |       ^
          = hint: move the text to messages and use t('app.periodPainRelief')

        ✘ 2 problems (1 error, 1 warning)
        Report written to reports/hardcode-[DATE].json and reports/hardcode-[DATE].md

        ----- stderr -----
        "#);
    });

    let report = test.report_json("hardcode")?;
    assert_eq!(report["report"], "hardcode");
    assert_eq!(report["summary"]["filesScanned"], 1);
    assert_eq!(report["summary"]["errors"], 1);
    assert_eq!(report["summary"]["byRule"]["jsx-text"], 1);
    assert_eq!(report["issues"][0]["rule"], "conditional-string");
    assert_eq!(report["files"][0]["issues"], 2);
    Ok(())
}

#[test]
fn test_hardcode_no_report() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/page.tsx", "export const a = 1;\n")?;

    let mut cmd = test.hardcode_command();
    cmd.arg("--no-report");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");
    assert!(test.report_files("hardcode")?.is_empty());
    Ok(())
}

#[test]
fn test_hardcode_compliance_needs_disclaimer() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/page.tsx", "export const a = 1;\n")?;
    test.write_messages(r#"{"home": {"title": "首页"}}"#, r#"{"home": {"title": "Home"}}"#)?;

    let out = test.run(&["hardcode", "--compliance", "--no-report"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("missing-disclaimer"));
    Ok(())
}

#[test]
fn test_hardcode_compliance_without_messages_is_an_error() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/page.tsx", "export const a = 1;\n")?;

    let out = test.run(&["hardcode", "--compliance"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("Messages directory './messages' does not exist"));
    Ok(())
}
