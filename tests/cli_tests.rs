//! End-to-end tests that drive the compiled `dsk` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = "app/\n├── src/\n│   └── main.py [print('hi')]\n└── readme.md\n";

fn run_dsk(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dsk"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run dsk")
}

fn run_dsk_with_stdin(args: &[&str], cwd: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dsk"))
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn dsk");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(stdin.as_bytes())
        .expect("failed to write to stdin");

    child.wait_with_output().expect("failed to wait for dsk")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_generate_python_from_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(&["generate", "sketch.txt"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let script = stdout_of(&output);
    assert!(script.starts_with("import os\n"));
    assert!(script.contains("# Generated by dirsketch"));
    assert!(script.contains("os.makedirs('app/src', exist_ok=True)\n"));
    assert!(script.contains("with open('app/src/main.py', 'w') as f:\n"));
    assert!(script.contains("    f.write('print(\\'hi\\')')\n"));
}

#[test]
fn test_generate_reads_stdin_by_default() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_dsk_with_stdin(&["generate", "-f", "bash"], dir.path(), SAMPLE);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let script = stdout_of(&output);
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains("mkdir -p \"app/src\"\n"));
    assert!(script.contains("touch \"app/readme.md\"\n"));
}

#[test]
fn test_generate_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(
        &["generate", "sketch.txt", "-f", "powershell", "-o", "make.ps1"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("Wrote powershell script to make.ps1"));

    let script = std::fs::read_to_string(dir.path().join("make.ps1")).unwrap();
    assert!(script.contains("New-Item -ItemType Directory -Force -Path \"app\\src\""));
}

#[test]
fn test_archive_defaults_to_root_named_zip() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(&["archive", "sketch.txt"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("Wrote app.zip"));

    let bytes = std::fs::read(dir.path().join("app.zip")).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_archive_tar_gz_with_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(
        &["archive", "sketch.txt", "-f", "tar-gz", "-o", "bundle.tar.gz"],
        dir.path(),
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let bytes = std::fs::read(dir.path().join("bundle.tar.gz")).unwrap();
    assert!(bytes.starts_with(&[0x1f, 0x8b]), "missing gzip magic");
}

#[test]
fn test_preview_renders_outline_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(&["preview", "sketch.txt"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let out = stdout_of(&output);
    assert!(out.contains("app/\n"));
    assert!(out.contains("├── src/\n"));
    assert!(out.contains("└── readme.md\n"));
    assert!(out.contains("2 directories, 2 files, max depth 3"));
}

#[test]
fn test_bare_invocation_previews() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(&["sketch.txt"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("2 directories, 2 files"));
}

#[test]
fn test_export_emits_parseable_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sketch.txt"), SAMPLE).unwrap();

    let output = run_dsk(&["export", "sketch.txt"], dir.path());
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["root_dir"], "app");
    assert_eq!(value["has_root_wrapper"], true);
    assert!(value["structure"].is_array());
    assert_eq!(value["files"]["app/src/main.py"], "print('hi')");
}

#[test]
fn test_empty_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_dsk_with_stdin(&["preview"], dir.path(), "   \n");
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Input cannot be empty"));
}

#[test]
fn test_templates_list_and_pipe_back_in() {
    let dir = tempfile::tempdir().unwrap();

    let listing = run_dsk(&["templates"], dir.path());
    assert!(listing.status.success());
    let out = stdout_of(&listing);
    assert!(out.contains("fastapi"));
    assert!(out.contains("Tauri desktop app"));

    let printed = run_dsk(&["templates", "fastapi"], dir.path());
    assert!(printed.status.success());
    let diagram = stdout_of(&printed);
    assert!(diagram.starts_with("my-api/\n"));

    let piped = run_dsk_with_stdin(&["generate", "-f", "node"], dir.path(), &diagram);
    assert!(piped.status.success(), "stderr: {}", stderr_of(&piped));
    assert!(stdout_of(&piped).contains("fs.mkdirSync('my-api', { recursive: true });"));
}

#[test]
fn test_unknown_template_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_dsk(&["templates", "rails"], dir.path());
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Unknown template 'rails'"));
}

#[test]
fn test_prompt_describes_the_tree() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_dsk_with_stdin(&["prompt"], dir.path(), SAMPLE);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let out = stdout_of(&output);
    assert!(out.contains("Create the following directory structure"));
    assert!(out.contains("[dir] app/"));
    assert!(out.contains("[file] readme.md"));
}
