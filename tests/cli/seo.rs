use anyhow::Result;

use crate::CliTest;

const ARTICLE: &str = r#"---
title: 经期疼痛缓解指南
seo_title: 经期疼痛缓解指南
summary: 简介
tags: [经期]
category: health
author: PeriodHub
canonical_url: https://periodhub.health/zh/articles/guide
---

# 经期疼痛缓解指南

正文
"#;

#[test]
fn test_seo_scores_articles() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("content/articles/zh/guide.md", ARTICLE)?;
    test.write_file("content/articles/en/bare.md", "Just text.\n")?;

    let out = test.run(&["seo", "-v"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("error: \"missing required field 'seo_description'\"  seo-required"));
    assert!(out.stdout.contains("--> content/articles/zh/guide.md"));
    assert!(out.stdout.contains("error: \"missing H1 heading\"  seo-missing-h1"));
    assert!(out.stdout.contains("SEO: 2 article(s), average score"));
    assert!(out.stdout.contains(
        "warning: \"no 'en' version of this article\"  seo-missing-article\n  --> content/articles/zh/guide.md"
    ));
    assert!(out.stdout.contains(
        "warning: \"no 'zh' version of this article\"  seo-missing-article\n  --> content/articles/en/bare.md"
    ));

    let report = test.report_json("seo")?;
    assert_eq!(report["summary"]["articles"], 2);
    let locales: Vec<&str> = report["articles"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|a| a["locale"].as_str())
        .collect();
    assert_eq!(locales, vec!["en", "zh"]);
    Ok(())
}

#[test]
fn test_seo_translated_articles_are_complete() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("content/articles/zh/guide.md", ARTICLE)?;
    test.write_file("content/articles/en/guide.md", ARTICLE)?;
    test.write_file("content/articles/en/draft.md", "---\ntitle: [unclosed\n---\n")?;

    // draft.md fails to parse but still counts as present in `en`
    let out = test.run(&["seo", "--no-report"])?;
    assert!(!out.stdout.contains("seo-missing-article"));
    assert!(out.stdout.contains("skipped: 1 unreadable article(s)"));
    Ok(())
}

#[test]
fn test_seo_skips_invalid_frontmatter() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("content/articles/zh/broken.md", "---\ntitle: [unclosed\n---\n# T\n")?;

    let out = test.run(&["seo", "--no-report"])?;
    assert_eq!(out.code, 0);
    assert!(out.stderr.contains("warning: Skipping content/articles/zh/broken.md"));
    assert!(out.stdout.contains("skipped: 1 unreadable article(s)"));
    Ok(())
}

#[test]
fn test_seo_without_articles_dir() -> Result<()> {
    let test = CliTest::with_config()?;
    let out = test.run(&["seo"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("Articles directory 'content/articles' not found"));
    Ok(())
}
