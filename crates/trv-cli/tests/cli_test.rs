use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use trv_testing::TestWorld;
use trv_testing::fixtures::ALPHA;

#[test]
fn test_missing_file() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trv");
    world
        .configure_command(&mut cmd)
        .args(["stats", "nope.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to parse nope.csv"));
}

#[test]
fn test_find_requires_filter() {
    let world = TestWorld::new().with_input("alpha.csv", ALPHA);
    let mut cmd = cargo_bin_cmd!("trv");
    world
        .configure_command(&mut cmd)
        .args(["find", "alpha.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_validate_plain() {
    let world = TestWorld::new().with_input("alpha.csv", ALPHA);
    let mut cmd = cargo_bin_cmd!("trv");
    world
        .configure_command(&mut cmd)
        .args(["validate", "alpha.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 1 (2 track points)"))
        .stdout(predicate::str::contains("All track points within bounds."));
}

#[test]
fn test_range_warnings_are_logged() {
    let world = TestWorld::new().with_input(
        "far.csv",
        "66666,X,1,1,X,0,Far,2024-07-01\n2024-07-01 00,10.0,120.0,1,1,1\n",
    );
    let mut cmd = cargo_bin_cmd!("trv");
    world
        .configure_command(&mut cmd)
        .args(["stats", "far.csv", "--log-level", "warn"])
        .assert()
        .success()
        .stderr(predicate::str::contains("latitude 10 out of range"));

    let mut cmd = cargo_bin_cmd!("trv");
    world
        .configure_command(&mut cmd)
        .args(["stats", "far.csv", "--log-level", "error"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_export_to_unwritable_path() {
    let world = TestWorld::new().with_input("alpha.csv", ALPHA);
    let mut cmd = cargo_bin_cmd!("trv");
    world
        .configure_command(&mut cmd)
        .args([
            "export",
            "alpha.csv",
            "--to",
            "csv",
            "--output",
            "missing-dir/out.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create file: missing-dir/out.csv"));
}
