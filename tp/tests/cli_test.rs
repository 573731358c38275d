//! End-to-end tests for the `tp` binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// `tp` isolated from any user or project config
fn tp(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tp").expect("bin");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn plan_with_default_budget() {
    let temp = TempDir::new().unwrap();

    tp(temp.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: Rp 50,000,000"))
        .stdout(predicate::str::contains("Total cost: Rp 40,800,000"))
        .stdout(predicate::str::contains("Remaining budget: Rp 9,200,000"));
}

#[test]
fn plan_honours_rust_log() {
    let temp = TempDir::new().unwrap();

    tp(temp.path())
        .args(["plan", "100"])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting plan search"));
}

#[test]
fn plan_is_quiet_by_default() {
    let temp = TempDir::new().unwrap();

    tp(temp.path())
        .args(["plan", "100"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting plan search").not());
}

#[test]
fn plan_zero_budget() {
    let temp = TempDir::new().unwrap();

    tp(temp.path())
        .args(["plan", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Flight: none"))
        .stdout(predicate::str::contains("Total cost: Rp 0"));
}

#[test]
fn plan_json_output() {
    let temp = TempDir::new().unwrap();

    let output = tp(temp.path()).args(["plan", "25000000", "-f", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let total_cost = report["total_cost"].as_u64().unwrap();
    let remaining = report["remaining_budget"].as_u64().unwrap();
    assert!(total_cost <= 25_000_000);
    assert_eq!(total_cost + remaining, 25_000_000);
    assert_eq!(report["categories"].as_array().unwrap().len(), 7);
}

#[test]
fn plan_rejects_negative_budget() {
    let temp = TempDir::new().unwrap();

    tp(temp.path()).args(["plan", "--", "-1"]).assert().failure();
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let temp = TempDir::new().unwrap();

    tp(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let content = fs::read_to_string(temp.path().join("tripplan.yml")).unwrap();
    assert!(content.contains("budget: 50000000"));
    assert!(content.contains("Tosokchon Samgyetang"));

    tp(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tp(temp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn local_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tripplan.yml"),
        r#"
budget: 300
currency: USD
catalog:
  flight: { options: [ { name: Budget air, price: 200 } ] }
  communication: { options: [ { name: eSIM, price: 10 } ] }
  lodging: { options: [ { name: Hostel, price: 50 } ] }
  dining: { cap: 30, options: [ { name: Street food, price: 20 } ] }
  transport: { options: [ { name: Metro pass, price: 15 } ] }
  touring: { cap: 20, options: [ { name: Palace, price: 5 } ] }
  shopping: { cap: 40, options: [ { name: Market, price: 40 } ] }
"#,
    )
    .unwrap();

    // 200 + 10 + 50 + 20 + 15 + 5 leaves 0 for the market
    tp(temp.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total budget: USD 300"))
        .stdout(predicate::str::contains("Total cost: USD 300"));
}

#[test]
fn empty_category_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.yml");
    fs::write(
        &config,
        r#"
catalog:
  flight: { options: [] }
  communication: { options: [ { name: eSIM, price: 10 } ] }
  lodging: { options: [ { name: Hostel, price: 50 } ] }
  dining: { cap: 30, options: [ { name: Street food, price: 20 } ] }
  transport: { options: [ { name: Metro pass, price: 15 } ] }
  touring: { cap: 20, options: [ { name: Palace, price: 5 } ] }
  shopping: { cap: 40, options: [ { name: Market, price: 40 } ] }
"#,
    )
    .unwrap();

    tp(temp.path())
        .args(["--config", config.to_str().unwrap(), "plan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category flight has no options"));
}

#[test]
fn catalog_lists_categories() {
    let temp = TempDir::new().unwrap();

    tp(temp.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dining (multi), cap Rp 2,000,000"))
        .stdout(predicate::str::contains("  - Olive Young: Rp 500,000"));
}

#[test]
fn catalog_yaml_output_parses() {
    let temp = TempDir::new().unwrap();

    let output = tp(temp.path()).args(["catalog", "--format", "yaml"]).output().unwrap();
    assert!(output.status.success());

    let catalog: tripplan::Catalog = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(catalog, tripplan::Catalog::default());
}
