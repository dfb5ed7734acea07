use anyhow::Result;

use crate::CliTest;

const RESOURCES: &str = r#"[
  {
    "id": "pain-relief-card",
    "title": { "zh": "疼痛缓解卡片", "en": "Pain Relief Card" },
    "description": { "zh": "随身携带的缓解方法", "en": "Relief methods to carry along" },
    "sections": [{ "heading": { "en": "Steps" }, "items": { "en": ["Breathe slowly"] } }]
  }
]"#;

#[test]
fn test_pdf_generates_one_file_per_locale() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("resources.json", RESOURCES)?;

    let out = test.run(&["pdf", "resources.json"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Generated 2 file(s) from 1 resource(s) in public/pdf-files"));

    let zh = test.read_file("public/pdf-files/pain-relief-card.html")?;
    assert!(zh.contains("<h1 class=\"title\">疼痛缓解卡片</h1>"));
    let en = test.read_file("public/pdf-files/pain-relief-card-en.html")?;
    assert!(en.contains("Breathe slowly"));

    let report = test.report_json("pdf")?;
    assert_eq!(report["summary"]["generated"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_pdf_keeps_existing_files_without_force() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("resources.json", RESOURCES)?;
    test.write_file("public/pdf-files/pain-relief-card.html", "custom")?;

    let out = test.run(&["pdf", "resources.json", "--no-report"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Generated 1 file(s)"));
    assert!(out.stdout.contains("kept 1 existing file(s), use --force to overwrite"));
    assert_eq!(test.read_file("public/pdf-files/pain-relief-card.html")?, "custom");

    test.run(&["pdf", "resources.json", "--force", "--no-report"])?;
    assert_ne!(test.read_file("public/pdf-files/pain-relief-card.html")?, "custom");
    Ok(())
}

#[test]
fn test_pdf_base_locale_and_out_dir() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("resources.json", RESOURCES)?;

    let out = test.run(&[
        "pdf",
        "resources.json",
        "--base-locale",
        "en",
        "--out",
        "static/print",
        "--no-report",
    ])?;
    assert_eq!(out.code, 0);
    assert!(test.root().join("static/print/pain-relief-card.html").exists());
    assert!(test.root().join("static/print/pain-relief-card-zh.html").exists());
    Ok(())
}

#[test]
fn test_pdf_rejects_path_like_ids() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("resources.json", r#"[{ "id": "../escape", "title": { "en": "X" } }]"#)?;

    let out = test.run(&["pdf", "resources.json"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("Invalid resource id \"../escape\""));
    Ok(())
}
