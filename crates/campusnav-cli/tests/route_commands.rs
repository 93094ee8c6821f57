use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus_map.json")
        .canonicalize()
        .expect("fixture map present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav-cli");
    cmd.env_remove("CAMPUSNAV_MAP")
        .env_remove("LOG_FORMAT")
        .env("RUST_LOG", "error");
    cmd
}

fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.arg("--map").arg(fixture_path());
    cmd
}

#[test]
fn route_prints_path_and_cost() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "1", "--to", "4"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("+ North Gate [1]"))
        .stdout(predicate::str::contains("| Clock Tower [3]"))
        .stdout(predicate::str::contains("- Canteen One [4]"))
        .stdout(predicate::str::contains("Total cost: 11.00 meters"));
}

#[test]
fn time_strategy_reports_seconds() {
    let mut cmd = prepare_command();
    cmd.args([
        "route", "--from", "1", "--to", "2", "--strategy", "time", "--mode", "bike",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 0.60 seconds"));
}

#[test]
fn legacy_dist_strategy_name_is_accepted() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "1", "--to", "3", "--strategy", "dist"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("strategy: distance"));
}

#[test]
fn json_route_output_is_structured() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "1", "--to", "3"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["kind"], "point_to_point");
    assert_eq!(value["total_cost"], 7.0);
    assert_eq!(value["cost_unit"], "meters");
    let ids: Vec<i64> = value["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn unreachable_destination_fails() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "1", "--to", "6"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no route found between 1 and 6"));
}

#[test]
fn unknown_spot_fails() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "1", "--to", "404"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown spot id: 404"));
}

#[test]
fn tour_reports_skipped_waypoints() {
    let mut cmd = prepare_command();
    cmd.args(["tour", "--from", "1", "--via", "4", "--via", "6", "--via", "7"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tour (5 hops"))
        .stdout(predicate::str::contains("- Canteen One [4]"))
        .stdout(predicate::str::contains("Total cost: 17.50 meters"))
        .stdout(predicate::str::contains("Unreachable waypoints skipped: 6"));
}

#[test]
fn tour_requires_a_waypoint() {
    let mut cmd = prepare_command();
    cmd.args(["tour", "--from", "1"]);
    cmd.assert().failure();
}

#[test]
fn spots_lists_destinations_only_by_default() {
    let mut cmd = prepare_command();
    cmd.arg("spots");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Library"))
        .stdout(predicate::str::contains("East Crossing").not());

    let mut cmd = prepare_command();
    cmd.args(["spots", "--all"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("East Crossing"));
}

#[test]
fn map_command_dumps_spots_and_segments() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "map"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["spots"].as_array().map(Vec::len), Some(7));
    assert_eq!(value["segments"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["segments"][0]["u"], 1);
    assert_eq!(value["segments"][0]["v"], 2);
    assert_eq!(value["segments"][0]["distance"], 3.0);

    let mut cmd = prepare_command();
    cmd.arg("map");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("7 spots, 6 segments"));
}

#[test]
fn map_directory_from_environment_is_used() {
    let temp_dir = tempdir().expect("create temp dir");
    fs::copy(fixture_path(), temp_dir.path().join("campus_map.json")).expect("copy fixture");

    let mut cmd = cli();
    cmd.env("CAMPUSNAV_MAP", temp_dir.path())
        .args(["route", "--from", "2", "--to", "3"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- Clock Tower [3]"));
}

#[test]
fn missing_map_is_reported() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.arg("--map")
        .arg(temp_dir.path().join("absent.json"))
        .args(["spots"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to locate the campus map"));
}
