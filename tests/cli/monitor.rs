use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

const CONFIG_PATH: &str = "monitoring/config/monitoring.json";

#[test]
fn test_monitor_init_writes_baseline() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["monitor", "init"])?;
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("Created monitoring/config/monitoring.json"));

    let config: Value = serde_json::from_str(&test.read_file(CONFIG_PATH)?)?;
    assert!(config["generatedAt"].is_string());
    assert_eq!(config["metrics"]["performance"]["lcp"]["threshold"], 6000.0);
    assert!(config["metrics"]["seo"]["organicTraffic"]["baseline"].is_null());

    let out = test.run(&["monitor", "init"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("already exists, use --force to overwrite"));

    let out = test.run(&["monitor", "init", "--force"])?;
    assert_eq!(out.code, 0);
    Ok(())
}

#[test]
fn test_monitor_check_reports_breaches() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["monitor", "init"])?;
    test.write_file(
        "metrics.json",
        r#"{
  "performance": { "lcp": 7200, "cls": 0.1 },
  "seo": { "organicTraffic": 1200, "bounceRate": 0.4 }
}"#,
    )?;

    let out = test.run(&["monitor", "check", "metrics.json"])?;
    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("error: \"performance.lcp = 7200\"  metric-breach"));
    assert!(out.stdout.contains("--> metrics.json"));
    assert!(out.stdout.contains("= hint: action: rollback"));
    assert!(out.stdout.contains("Metrics: 2 metric(s) checked, 1 breached"));
    assert!(out.stdout.contains("no baseline yet: seo.organicTraffic"));
    assert!(out.stdout.contains("not configured: seo.bounceRate"));

    let report = test.report_json("monitor")?;
    assert_eq!(report["summary"]["breaches"], 1);
    assert_eq!(report["issues"][0]["severity"], "error");
    Ok(())
}

#[test]
fn test_monitor_check_without_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("metrics.json", "{}")?;

    let out = test.run(&["monitor", "check", "metrics.json"])?;
    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("run `i18nkit monitor init` first"));
    Ok(())
}
