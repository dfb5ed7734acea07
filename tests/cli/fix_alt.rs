use anyhow::Result;

use crate::CliTest;

const GALLERY: &str = r#"export const Gallery = () => (
  <div>
    <img src="/images/cat.png" />
    <img src="/images/hero-banner.jpg" alt="" />
  </div>
);
"#;

#[test]
fn test_fix_alt_dry_run() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/gallery.tsx", GALLERY)?;

    let out = test.run(&["fix-alt"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("+ ./app/gallery.tsx:3  alt=\"Image: Cat\" (/images/cat.png)"));
    assert!(out.stdout.contains("Would insert 2 alt attribute(s) in 1 file(s)."));

    assert_eq!(test.read_file("app/gallery.tsx")?, GALLERY);
    assert!(test.report_files("fix-alt")?.is_empty());
    Ok(())
}

#[test]
fn test_fix_alt_apply() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("app/gallery.tsx", GALLERY)?;

    let out = test.run(&["fix-alt", "--apply"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Inserted 2 alt attribute(s) in 1 file(s) (processed 2 image(s))."));

    let content = test.read_file("app/gallery.tsx")?;
    assert!(content.contains(r#"<img src="/images/cat.png" alt="Image: Cat" />"#));
    assert!(content.contains(r#"<img src="/images/hero-banner.jpg" alt="Hero image: Hero banner" />"#));
    assert_eq!(test.read_file("app/gallery.tsx.backup")?, GALLERY);

    let report = test.report_json("fix-alt")?;
    assert_eq!(report["summary"]["appliedCount"], 2);
    assert_eq!(report["fixes"][0]["alt"], "Image: Cat");

    // Nothing left to fix.
    let out = test.run(&["fix-alt", "--no-report"])?;
    assert!(out.stdout.contains("every image has alt text"));
    Ok(())
}
