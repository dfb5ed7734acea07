use anyhow::Result;
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_validate_finds_locale_drift() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_messages(
        "{\n  \"home\": {\n    \"title\": \"首页\",\n    \"intro\": \"介绍\"\n  }\n}\n",
        "{\n  \"home\": {\n    \"title\": \"Home\",\n    \"extra\": \"Extra\"\n  }\n}\n",
    )?;

    with_settings!({filters => vec![(r"\d{4}-\d{2}-\d{2}", "[DATE]")]}, {
        assert_cmd_snapshot!(test.validate_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        warning: "home.extra"  orphan-key
          --> ./messages/en.json:4:1
          = note: in en ("Extra")

        error: "home.intro"  missing-translation
          --> ./messages/zh.json:4:1
          = note: ("介绍") missing in: en

        ✘ 2 problems (1 error, 1 warning)
        Report written to reports/validate-[DATE].json and reports/validate-[DATE].md

        ----- stderr -----
        "#);
    });

    let report = test.report_json("validate")?;
    assert_eq!(report["summary"]["primaryLocale"], "zh");
    assert_eq!(report["summary"]["locales"][0], "en");
    assert_eq!(report["summary"]["locales"][1], "zh");
    assert_eq!(report["summary"]["keysDefined"], 2);
    Ok(())
}

#[test]
fn test_validate_needs_two_locales() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("messages/zh.json", r#"{"a": "甲"}"#)?;

    assert_cmd_snapshot!(test.validate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: At least two locales are required in './messages', found 1
    ");
    Ok(())
}
