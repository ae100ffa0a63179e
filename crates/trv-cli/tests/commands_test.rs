use trv_testing::fixtures::{ALPHA, DEGREES_SAMPLE, INCOMPLETE, TENTHS_SAMPLE};
use trv_testing::{TestWorld, assertions};

fn tenths_world() -> TestWorld {
    TestWorld::new().with_sample(TENTHS_SAMPLE)
}

#[test]
fn test_stats_json() {
    let world = tenths_world();
    let result = world
        .run(&["stats", TENTHS_SAMPLE, "--units", "tenths", "--format", "json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_total_records(&json, 5).unwrap();
    assert_eq!(json["content"]["total_points"], 28);
    assert_eq!(json["content"]["years"]["first"], 1999);
    assert_eq!(json["content"]["years"]["last"], 2005);
    assert_eq!(json["content"]["duration"]["max_hours"], 13);
    assert_eq!(json["content"]["thresholds_hours"], serde_json::json!([6, 12, 24]));
    assert_eq!(
        json["content"]["yearly"][1],
        serde_json::json!({"year": 2001, "records": 1, "at_least": [1, 1, 0]})
    );
}

#[test]
fn test_stats_plain() {
    let world = tenths_world();
    let result = world
        .run(&["stats", TENTHS_SAMPLE, "--units", "tenths"])
        .unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Records: 5 (28 track points)"));
    assert!(result.stdout().contains("Moved out of boundary"));
}

#[test]
fn test_units_from_config() {
    let world = tenths_world().with_config("[parse]\nunits = \"tenths\"\n");
    let result = world
        .run(&["validate", TENTHS_SAMPLE, "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    let warnings = json["content"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["record_name"], "Utor");
    assert_eq!(warnings[0]["coordinate"], "latitude");
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_units_flag_overrides_config() {
    let world = tenths_world().with_config("[parse]\nunits = \"tenths\"\n");
    let result = world
        .run(&["validate", TENTHS_SAMPLE, "--units", "degrees", "--format", "json"])
        .unwrap();
    assert!(result.success());

    // Read as degrees, every point is far outside both ranges.
    let json = result.json().unwrap();
    assert_eq!(json["content"]["units"], "degrees");
    assert_eq!(json["content"]["warnings"].as_array().unwrap().len(), 56);
}

#[test]
fn test_bounds_from_config() {
    let world = TestWorld::new()
        .with_input("alpha.csv", ALPHA)
        .with_config("[bounds]\nlat_min = 20.1\n");
    let result = world
        .run(&["validate", "alpha.csv", "--format", "json"])
        .unwrap();

    let json = result.json().unwrap();
    let warnings = json["content"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["value"], 20.0);
    assert_eq!(warnings[0]["line"], 2);
}

#[test]
fn test_find_by_name_and_year() {
    let world = TestWorld::new().with_sample(DEGREES_SAMPLE);

    let result = world
        .run(&["find", DEGREES_SAMPLE, "--year", "2024", "--format", "json"])
        .unwrap();
    let json = result.json().unwrap();
    assertions::assert_record_names(&json, &["ALPHA", "BRAVO"]).unwrap();

    let result = world
        .run(&[
            "find",
            DEGREES_SAMPLE,
            "--name",
            "bravo",
            "--year",
            "1999",
            "--format",
            "json",
        ])
        .unwrap();
    assert!(result.success());
    assertions::assert_record_count(&result.json().unwrap(), 0).unwrap();
}

#[test]
fn test_find_reports_file_positions() {
    let world = TestWorld::new().with_sample(DEGREES_SAMPLE);
    let result = world
        .run(&["find", DEGREES_SAMPLE, "--name", "Charlie", "--format", "json"])
        .unwrap();
    let json = result.json().unwrap();
    assert_eq!(json["content"]["records"][0]["index"], 2);
    assert_eq!(json["content"]["filter"], serde_json::json!({"name": "Charlie"}));
}

#[test]
fn test_show_detail() {
    let world = tenths_world();
    let result = world
        .run(&["show", TENTHS_SAMPLE, "--index", "4", "--units", "tenths"])
        .unwrap();
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.starts_with("Utor (#5), record 5 of 5"));
    assert!(stdout.contains(">=12h: yes"));
    assert!(stdout.contains("... 10 more ..."));
    assert!(stdout.contains("2001-07-05 13:00"));
}

#[test]
fn test_show_index_out_of_range() {
    let world = tenths_world();
    let result = world
        .run(&["show", TENTHS_SAMPLE, "--index", "5", "--units", "tenths"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Record index 5 out of range"));
    assert!(result.stderr().contains("0..=4"));
    assert!(result.stdout().is_empty());
}

#[test]
fn test_export_json_to_file_round_trips() {
    let world = tenths_world();
    let result = world
        .run(&[
            "export",
            TENTHS_SAMPLE,
            "--to",
            "json",
            "--output",
            "out.json",
            "--units",
            "tenths",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Exported 5 records to out.json (json)"));

    let exported = trv_engine::import_json(&world.read_output("out.json").unwrap()).unwrap();
    let options = trv_engine::ParseOptions {
        units: trv_engine::Units::Tenths,
        ..Default::default()
    };
    let parsed = trv_engine::parse_file(&world.path(TENTHS_SAMPLE), &options)
        .unwrap()
        .collection;
    assert_eq!(exported, parsed);
}

#[test]
fn test_export_csv_to_stdout() {
    let world = tenths_world();
    let result = world
        .run(&[
            "export",
            TENTHS_SAMPLE,
            "--to",
            "csv",
            "--name",
            "katrina",
            "--units",
            "tenths",
        ])
        .unwrap();
    assert!(result.success());

    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("flag,intl_code,record_count"));
    assert_eq!(
        lines[1],
        "66666,0501,5,1,0501,2,Katrina,2005-08-30,2005-08-30 00:00,25.5,118.5,120.0,35.0,12.3"
    );
}

#[test]
fn test_export_csv_layout_from_config() {
    let world = tenths_world()
        .with_config("[parse]\nunits = \"tenths\"\n\n[export]\ncsv_layout = \"header-only\"\n");
    let result = world
        .run(&["export", TENTHS_SAMPLE, "--to", "csv", "--year", "1999"])
        .unwrap();
    assert!(result.success());
    insta::assert_snapshot!(result.stdout(), @r"
    flag,intl_code,record_count,sequence_num,china_code,stop_reason,name,start_date,duration_hours
    66666,9903,1,3,9903,0,Maggie,1999-06-07,0
    66666,9905,0,4,9905,1,Sam,1999-08-23,0
    ");
}

#[test]
fn test_incomplete_record_fails() {
    let world = TestWorld::new().with_input("bad.csv", INCOMPLETE);
    let result = world.run(&["validate", "bad.csv"]).unwrap();
    assert!(!result.success());
    assert!(result.stdout().is_empty());

    let stderr = result.stderr();
    assert!(stderr.contains("Error: Failed to parse bad.csv"));
    assert!(stderr.contains("incomplete record"));
    assert!(stderr.contains("line 1"));
}

#[test]
fn test_invalid_config_fails() {
    let world = TestWorld::new()
        .with_input("alpha.csv", ALPHA)
        .with_config("[export]\ncsv_layout = \"sideways\"\n");
    let result = world.run(&["stats", "alpha.csv"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Failed to parse config"));
    assert!(
        result
            .stderr()
            .contains(&world.config_path().display().to_string())
    );
}

#[test]
fn test_rust_log_overrides_log_level() {
    let world = TestWorld::new()
        .with_input("alpha.csv", ALPHA)
        .with_env("RUST_LOG", "trv_engine=debug");
    let result = world.run(&["validate", "alpha.csv"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("Sealed record ALPHA (2024-07-01) with 2 track points"));
}

#[test]
fn test_default_log_level_hides_debug() {
    let world = TestWorld::new().with_input("alpha.csv", ALPHA);
    let result = world.run(&["validate", "alpha.csv"]).unwrap();
    assert!(result.success());
    assert!(!result.stderr().contains("Sealed record"));
}
