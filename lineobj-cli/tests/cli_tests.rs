//! End-to-end tests of the lineobj binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const PAIR: &str = "o a\nv 0 0 0\nv 1 0 0\nl 1 2\no b\nv 0 0 1\nv 1 0 1\nl 1 2\n";

fn lineobj() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lineobj"))
}

#[test]
fn test_inspect_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.lineobj");
    fs::write(&input, PAIR).unwrap();

    let output = lineobj().arg("inspect").arg("-i").arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Assets: 1"));
    assert!(stdout.contains("pair: 4 vertices, 0 triangles, 2 lines"));
}

#[test]
fn test_export_per_group_writes_directory() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.lineobj");
    let settings = dir.path().join("import.yaml");
    let out = dir.path().join("out");
    fs::write(&input, PAIR).unwrap();
    fs::write(&settings, "merge_groups: false\n").unwrap();

    let status = lineobj()
        .args(["export", "-f", "yaml", "--settings"])
        .arg(&settings)
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let yaml = fs::read_to_string(out.join("pair_b.yaml")).unwrap();
    assert!(yaml.contains("line_indices"));
    assert!(out.join("pair_a.yaml").exists());
}

#[test]
fn test_dump_lists_records() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("quad.lineobj");
    fs::write(&input, "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\nl 1 2\n").unwrap();

    let output = lineobj().arg("dump").arg("-i").arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Group: default"));
    assert!(stdout.contains("l[0] = 0 1"));
    assert!(stdout.contains("Rejected:"));
}

#[test]
fn test_scan_rejects_file_argument() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.lineobj");
    fs::write(&input, PAIR).unwrap();

    let status = lineobj().arg("scan").arg("-i").arg(&input).status().unwrap();
    assert!(!status.success());
}

#[test]
fn test_dump_uses_settings_group_mode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pair.lineobj");
    let settings = dir.path().join("import.yaml");
    fs::write(&input, PAIR).unwrap();
    fs::write(&settings, "parse:\n  group_mode: single\n").unwrap();

    let output = lineobj()
        .arg("dump")
        .arg("-i")
        .arg(&input)
        .arg("--settings")
        .arg(&settings)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Group: default"));
    assert!(!stdout.contains("Group: a"));
    assert!(stdout.contains("v[3] = 1 0 1"));
    assert!(stdout.contains("l[1] = 0 1"));
}
