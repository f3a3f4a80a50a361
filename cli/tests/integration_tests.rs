use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("netuse")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Drive config with one connected, one IPC and one missing mapping.
fn write_config(dir: &Path) -> PathBuf {
    let yaml = r#"version: "1.0"
persistent: false
drives:
  - local: "z:"
    address: 'alice:s3cret@\\FileServer\Public\'
  - address: '\\backup01\IPC$'
  - local: "W:"
    address: 'bob@\\archive\old reports'
"#;
    let path = dir.join("win-unc.yml");
    fs::write(&path, yaml).expect("failed to write config");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_win-unc"))
        .args(args)
        .output()
        .expect("failed to run win-unc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_parse_file_json() {
    let input = fixture("net-use-populated.txt");
    let output = run(&["parse-file", "--input", input.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "parse-file failed: {output:?}");

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1]["local"], "Y:");
    assert_eq!(rows[1]["remote"], r"\\fileserver\departments\engineering");
    assert_eq!(rows[2]["status"], "Disconnected");
}

#[test]
fn test_parse_file_table_format() {
    let input = fixture("net-use-populated.txt");
    let output = run(&["parse-file", "--input", input.to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("local"));
    assert!(text.contains(r"\\nas.example.local\media"));
}

#[test]
fn test_parse_empty_fixture_reports_no_connections() {
    let input = fixture("net-use-empty.txt");
    let output = run(&["parse-file", "--input", input.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("(no connections)"));
}

#[test]
fn test_parse_malformed_output_fails() {
    let input = fixture("net-use-no-separator.txt");
    let output = run(&["parse-file", "--input", input.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "), "stderr: {stderr}");
}

#[test]
fn test_parse_stdin_markdown() {
    let input = fs::read_to_string(fixture("net-use-populated.txt")).unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_win-unc"))
        .args(["parse-stdin", "--format", "markdown"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn win-unc");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let md = stdout(&output);
    assert_eq!(md.lines().count(), 6);
    assert!(md.contains(r"| Z: | `\\fileserver\public` | OK |"));
}

#[test]
fn test_address_json_does_not_leak_password() {
    let output = run(&["address", r"alice:s3cret@\\Host\Share\"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(!text.contains("s3cret"));
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["path"], r"\\Host\Share\");
    assert_eq!(report["normalized_path"], r"\\host\share");
    assert_eq!(report["username"], "alice");
    assert_eq!(report["has_password"], true);
    assert_eq!(report["is_unc"], true);
}

#[test]
fn test_status_against_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let input = fixture("net-use-populated.txt");
    let output = run(&[
        "status",
        "--config",
        config.to_str().unwrap(),
        "--input",
        input.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "status failed: {output:?}");

    let statuses: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(statuses[0]["connected"], true);
    assert_eq!(statuses[0]["status"], "OK");
    assert_eq!(statuses[1]["connected"], true);
    assert_eq!(statuses[1]["remote"], r"\\backup01");
    assert_eq!(statuses[2]["connected"], false);
    assert!(statuses[2]["status"].is_null());
}

#[test]
fn test_connect_commands() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let output = run(&["connect-commands", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            r"NET USE Z: \\FileServer\Public\ s3cret /USER:alice /PERSISTENT:NO",
            r"NET USE \\backup01\IPC$ /PERSISTENT:NO",
            r#"NET USE W: "\\archive\old reports" /USER:bob /PERSISTENT:NO"#,
        ]
    );
}

#[test]
fn test_disconnect_commands() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let output = run(&["disconnect-commands", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "NET USE Z: /DELETE /YES",
            r"NET USE \\backup01\IPC$ /DELETE /YES",
            "NET USE W: /DELETE /YES",
        ]
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yml");
    fs::write(
        &path,
        "version: \"1.0\"\ndrives:\n  - { local: \"Z:\", address: '\\\\a\\s' }\n  - { local: \"z\", address: '\\\\b\\s' }\n",
    )
    .unwrap();

    let output = run(&["connect-commands", "--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid config"), "stderr: {stderr}");
}
