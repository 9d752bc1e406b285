use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEY_OUTPUT: &str = "
Summary:
  Total:\t0.0375 secs
  Slowest:\t0.0121 secs
  Fastest:\t0.0002 secs
  Average:\t0.0036 secs
  Requests/sec:\t13334.5075

Latency distribution:
  10% in 0.0010 secs
  50% in 0.0027 secs
  90% in 0.0039 secs
  95% in 0.0041 secs
  99% in 0.0113 secs

Status code distribution:
  [200]\t500 responses
";

fn hey_report(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hey-report").unwrap();
    cmd.current_dir(cwd);
    cmd
}

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("raw-output.txt");
    fs::write(&path, content).unwrap();
    path
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_both_result_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), HEY_OUTPUT);

    hey_report(temp_dir.path()).arg(&input).assert().success();

    let throughput = read_json(&temp_dir.path().join("throughput_results.json"));
    assert_eq!(
        throughput,
        serde_json::json!([{ "name": "HTTP RPS", "unit": "req/s", "value": 13334.5075 }])
    );

    let latency = read_json(&temp_dir.path().join("latency_results.json"));
    let entries = latency.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "HTTP p95 Latency");
    assert_eq!(entries[0]["unit"], "ms");
    assert_eq!(entries[0]["value"].as_f64().unwrap(), 0.0041 * 1000.0);
}

#[test]
fn output_uses_two_space_indentation() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "Requests/sec: 13334.5075\n");

    hey_report(temp_dir.path()).arg(&input).assert().success();

    let content = fs::read_to_string(temp_dir.path().join("throughput_results.json")).unwrap();
    assert!(content.starts_with("[\n  {\n    \"name\": \"HTTP RPS\""));
}

#[test]
fn throughput_only_input_skips_latency_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "Requests/sec: 13334.5075\n");

    hey_report(temp_dir.path()).arg(&input).assert().success();

    let throughput = read_json(&temp_dir.path().join("throughput_results.json"));
    assert_eq!(throughput[0]["value"].as_f64(), Some(13334.5075));
    assert!(!temp_dir.path().join("latency_results.json").exists());
}

#[test]
fn unrecognised_input_writes_nothing_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "Error: connection refused\n");

    hey_report(temp_dir.path()).arg(&input).assert().code(0);

    assert!(!temp_dir.path().join("throughput_results.json").exists());
    assert!(!temp_dir.path().join("latency_results.json").exists());
}

#[test]
fn last_requests_per_sec_line_wins() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "Requests/sec: 100.0\nRequests/sec: 200.5\n");

    hey_report(temp_dir.path()).arg(&input).assert().success();

    let throughput = read_json(&temp_dir.path().join("throughput_results.json"));
    assert_eq!(throughput[0]["value"].as_f64(), Some(200.5));
}

#[test]
fn malformed_p95_row_skips_latency_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "Latency distribution:\n  95% in ??? secs\n  95% in 0.0041 secs\n",
    );

    hey_report(temp_dir.path()).arg(&input).assert().success();

    assert!(!temp_dir.path().join("latency_results.json").exists());
}

#[test]
fn no_arguments_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    hey_report(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: hey-report"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn two_arguments_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), HEY_OUTPUT);

    hey_report(temp_dir.path())
        .arg(&input)
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: hey-report"));

    assert!(!temp_dir.path().join("throughput_results.json").exists());
    assert!(!temp_dir.path().join("latency_results.json").exists());
}

#[test]
fn missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    hey_report(temp_dir.path())
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn malformed_throughput_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "Requests/sec: lots\n");

    hey_report(temp_dir.path())
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("lots"));

    assert!(!temp_dir.path().join("throughput_results.json").exists());
}

#[test]
fn latency_overflowing_milliseconds_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        &format!("Latency distribution:\n  95% in 1{} secs\n", "0".repeat(307)),
    );

    hey_report(temp_dir.path())
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a finite number"));

    assert!(!temp_dir.path().join("latency_results.json").exists());
}

#[test]
fn output_dir_flag_redirects_results() {
    let temp_dir = TempDir::new().unwrap();
    let results_dir = temp_dir.path().join("results");
    fs::create_dir(&results_dir).unwrap();
    let input = write_input(temp_dir.path(), HEY_OUTPUT);

    hey_report(temp_dir.path())
        .arg(&input)
        .arg("--output-dir")
        .arg(&results_dir)
        .assert()
        .success();

    assert!(results_dir.join("throughput_results.json").exists());
    assert!(results_dir.join("latency_results.json").exists());
    assert!(!temp_dir.path().join("throughput_results.json").exists());
}

#[test]
fn config_file_in_working_directory_renames_outputs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("hey-report.toml"),
        "[output]\nthroughput_file = \"rps.json\"\nlatency_file = \"p95.json\"\n",
    )
    .unwrap();
    let input = write_input(temp_dir.path(), HEY_OUTPUT);

    hey_report(temp_dir.path()).arg(&input).assert().success();

    assert!(temp_dir.path().join("rps.json").exists());
    assert!(temp_dir.path().join("p95.json").exists());
}

#[test]
fn invalid_config_fails_before_parsing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("hey-report.toml"),
        "[output]\nthroughput_file = \"same.json\"\nlatency_file = \"same.json\"\n",
    )
    .unwrap();
    let input = write_input(temp_dir.path(), HEY_OUTPUT);

    hey_report(temp_dir.path()).arg(&input).assert().code(4);

    assert!(!temp_dir.path().join("same.json").exists());
}

#[test]
fn json_output_format_reports_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), HEY_OUTPUT);

    hey_report(temp_dir.path())
        .arg(&input)
        .args(["--output-format", "json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dry_run\": true"))
        .stdout(predicate::str::contains("\"requests_per_sec\": 13334.5075"));

    assert!(!temp_dir.path().join("throughput_results.json").exists());
}
