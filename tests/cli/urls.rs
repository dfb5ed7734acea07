use anyhow::Result;
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_urls_in_sources_and_messages() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "app/seo.ts",
        "export const canonical = 'https://periodhub.health/zh/articles';\nexport const other = 'https://example.com';\n",
    )?;
    test.write_messages(
        "{\n  \"home\": \"https://www.periodhub.health\"\n}\n",
        "{\n  \"home\": \"Home\"\n}\n",
    )?;

    with_settings!({filters => vec![(r"\d{4}-\d{2}-\d{2}", "[DATE]")]}, {
        assert_cmd_snapshot!(test.urls_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: "https://periodhub.health/zh/articles"  hardcoded-url
          --> ./app/seo.ts:1:27
          |
        1 | export const canonical = 'https://periodhub.health/zh/articles';
          |                           ^
          = hint: use `${process.env.NEXT_PUBLIC_BASE_URL}/zh/articles`

        warning: "https://www.periodhub.health"  hardcoded-url
          --> ./messages/zh.json:2:12
          |
        2 |   "home": "https://www.periodhub.health"
          |            ^
          = hint: use `${process.env.NEXT_PUBLIC_BASE_URL}`

        ✘ 2 problems (1 error, 1 warning)
        Report written to reports/urls-[DATE].json and reports/urls-[DATE].md

        ----- stderr -----
        "#);
    });

    let report = test.report_json("urls")?;
    assert_eq!(report["summary"]["hosts"][0], "periodhub.health");
    assert_eq!(report["issues"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_urls_in_prose_drop_trailing_punctuation() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "app/about.tsx",
        "export const note = 'Read more at https://periodhub.health/en/about.';\n",
    )?;
    test.write_messages("{}\n", "{}\n")?;

    let mut cmd = test.urls_command();
    cmd.arg("--no-report");
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "https://periodhub.health/en/about"  hardcoded-url
      --> ./app/about.tsx:1:35
      |
    1 | export const note = 'Read more at https://periodhub.health/en/about.';
      |                                   ^
      = hint: use `${process.env.NEXT_PUBLIC_BASE_URL}/en/about`

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    "#);
    Ok(())
}
