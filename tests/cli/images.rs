use anyhow::Result;
use insta::with_settings;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_images_audit() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(
        "app/gallery.tsx",
        r#"export const Gallery = () => (
  <div>
    <img src="/images/cat.png" />
    <img src="/images/pad.png" alt={t('gallery.pad')} />
    <img src="/images/testimonial-sarah.jpg" />
    <img src="/images/placeholder.png" />
  </div>
);
"#,
    )?;

    with_settings!({filters => vec![(r"\d{4}-\d{2}-\d{2}", "[DATE]")]}, {
        assert_cmd_snapshot!(test.images_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: "<img> without alt: /images/cat.png"  missing-alt
          --> ./app/gallery.tsx:3:5
          |
        3 |     <img src="/images/cat.png" />
          |     ^
          = hint: run `i18nkit fix-alt` to generate alt text

        error: "<img> without alt: /images/testimonial-sarah.jpg"  missing-alt
          --> ./app/gallery.tsx:5:5
          |
        5 |     <img src="/images/testimonial-sarah.jpg" />
          |     ^
          = hint: run `i18nkit fix-alt` to generate alt text

        ✘ 2 problems (2 errors, 0 warnings)
        Images: 3 image(s): 2 missing alt, 0 empty, 0 generic, 0 to improve
          - [high] 2 image(s) have no alt attribute (run `i18nkit fix-alt --apply`)
        Report written to reports/images-[DATE].json and reports/images-[DATE].md

        ----- stderr -----
        "#);
    });

    let report = test.report_json("images")?;
    assert_eq!(report["summary"]["totalImages"], 3);
    assert_eq!(report["summary"]["missingAlt"], 2);
    assert_eq!(report["recommendations"][0]["priority"], "high");
    Ok(())
}
