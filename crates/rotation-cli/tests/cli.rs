//! End-to-end tests for the `rotation` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's real configuration directory.
fn rotation(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rotation").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("ROTATION_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

const PLANNER: &str = r#"
[evaluation]
parallel = false

[[scenarios]]
name = "Walk-in push"
walk_in_daily = 100

[[scenarios]]
name = "Bigger groups"
avg_group_size = 4
"#;

fn write_planner(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("planner.toml");
    std::fs::write(&path, PLANNER).unwrap();
    path
}

#[test]
fn test_compute_defaults() {
    let home = TempDir::new().unwrap();
    let value = json_output(rotation(&home).args(["--format", "json", "compute"]));

    assert_eq!(value["result"]["total_capacity"], 50.0);
    assert_eq!(value["result"]["gap"], -150.0);
    assert_eq!(value["result"]["utilization_rate"], 100.0);
    assert_eq!(value["status"], "shortfall");
    assert!(value.get("breakdown").is_none());
}

#[test]
fn test_compute_table_shows_status() {
    let home = TempDir::new().unwrap();
    rotation(&home)
        .arg("compute")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Capacity"))
        .stdout(predicate::str::contains("Below target"));
}

#[test]
fn test_compute_minimal_prints_capacity() {
    let home = TempDir::new().unwrap();
    rotation(&home)
        .args(["-f", "minimal", "compute", "--walk-in-daily", "100"])
        .assert()
        .success()
        .stdout("162\n");
}

#[test]
fn test_compute_breakdown() {
    let home = TempDir::new().unwrap();
    let value = json_output(rotation(&home).args(["-f", "json", "compute", "--breakdown"]));

    let rows = value["breakdown"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["segment"], "local");
    assert_eq!(rows[0]["target"], 120.0);
    assert_eq!(rows[2]["segment"], "walk_in");
    assert_eq!(rows[2]["capacity"], 28.0);
}

#[test]
fn test_strict_rejects_out_of_domain_input() {
    let home = TempDir::new().unwrap();
    rotation(&home)
        .args(["compute", "--strict", "--no-show-rate", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_show_rate"));
}

#[test]
fn test_out_of_range_warns_without_clamp() {
    let home = TempDir::new().unwrap();
    rotation(&home)
        .args(["compute", "--no-show-rate", "70"])
        .assert()
        .success()
        .stderr(predicate::str::contains("outside the slider range"));
}

#[test]
fn test_clamp_pulls_input_into_range() {
    let home = TempDir::new().unwrap();
    let value = json_output(rotation(&home).args([
        "-f",
        "json",
        "compute",
        "--clamp",
        "--no-show-rate",
        "120",
    ]));
    assert_eq!(value["input"]["no_show_rate"], 50.0);
}

#[test]
fn test_compare_from_config_file() {
    let home = TempDir::new().unwrap();
    let path = write_planner(&home);

    let value = json_output(rotation(&home).arg("--config").arg(&path).args(["-f", "json", "compare"]));
    let rows = value.as_array().unwrap();
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Current", "Walk-in push", "Bigger groups"]);
    assert_eq!(rows[1]["capacity"], 162.0);
    assert_eq!(rows[1]["status"], "shortfall");
}

#[test]
fn test_compare_minimal_names_best_scenario() {
    let home = TempDir::new().unwrap();
    let path = write_planner(&home);

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["-f", "minimal", "compare", "--parallel"])
        .assert()
        .success()
        .stdout("Walk-in push\n");
}

#[test]
fn test_compare_without_config_is_baseline_only() {
    let home = TempDir::new().unwrap();
    rotation(&home)
        .args(["-f", "csv", "compare"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,capacity,target,gap,active_base,status"))
        .stdout(predicate::str::contains("Current,50.0,200.0,-150.0"));
}

#[test]
fn test_compute_from_named_scenario() {
    let home = TempDir::new().unwrap();
    let path = write_planner(&home);

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["-f", "minimal", "compute", "--scenario", "Walk-in push"])
        .assert()
        .success()
        .stdout("162\n");

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["compute", "--scenario", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No scenario named 'Nope'"));
}

#[test]
fn test_bounds_lists_every_field() {
    let home = TempDir::new().unwrap();
    let output = rotation(&home)
        .args(["-f", "minimal", "bounds"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 11);
    assert!(stdout.contains("local_customers=100"));
    assert!(stdout.contains("no_show_rate=15"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("conf").join("rotation.toml");

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Walk-in push"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    std::fs::write(&path, "[[scenarios]]\nname = \"\"\n").unwrap();

    rotation(&home)
        .arg("--config")
        .arg(&path)
        .arg("compare")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenarios[0].name"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    rotation(&home)
        .args(["--config", "/nonexistent/rotation.toml", "compute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn test_compute_csv_is_one_result_row() {
    let home = TempDir::new().unwrap();
    let output = rotation(&home).args(["-f", "csv", "compute"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("local_active_base,tourist_active_base"));
    assert!(lines[1].contains("50.0,"));
}

#[test]
fn test_bounds_json_steps_by_one() {
    let home = TempDir::new().unwrap();
    let value = json_output(rotation(&home).args(["-f", "json", "bounds"]));
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 11);
    assert!(rows.iter().all(|r| r["step"] == 1.0));
    assert_eq!(rows[5]["field"], "avg_group_size");
    assert_eq!(rows[5]["max"], 8.0);
}

#[test]
fn test_zero_frequency_reports_undefined() {
    let home = TempDir::new().unwrap();
    let value = json_output(rotation(&home).args([
        "-f",
        "json",
        "compute",
        "--local-frequency",
        "0",
        "--local-customers",
        "0",
    ]));
    assert_eq!(value["status"], "undefined");

    rotation(&home)
        .args(["compute", "--local-frequency", "0", "--local-customers", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Undefined"))
        .stdout(predicate::str::contains("On target").not());
}

#[test]
fn test_misspelled_config_keys_are_rejected() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("typo.toml");

    std::fs::write(&path, "[defaults]\ntarget_dishs = 400\n").unwrap();
    rotation(&home)
        .arg("--config")
        .arg(&path)
        .arg("compute")
        .assert()
        .failure()
        .stderr(predicate::str::contains("target_dishs"));

    std::fs::write(&path, "[[scenarios]]\nname = \"Push\"\nwalk_in_dialy = 90\n").unwrap();
    rotation(&home)
        .arg("--config")
        .arg(&path)
        .arg("compare")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenarios[0].walk_in_dialy"));
}
