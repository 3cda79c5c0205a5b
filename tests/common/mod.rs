// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

pub const BUILTIN_REASON: &str = "⚠️ BONZAI BURN FOUND ISSUES:\n• Issue 1\n• Issue 2";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_bonzai-burn-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn run_hook(stdin_input: &str) -> (String, String, i32) {
    run_args(stdin_input, &["hook"])
}

pub fn run_hook_with_config(stdin_input: &str, config_content: &str) -> (String, String, i32) {
    let tmpfile = write_config(config_content);
    let config_path = tmpfile.path().to_str().unwrap().to_string();
    run_args(stdin_input, &["hook", "--config", &config_path])
}

pub fn run_check_with_config(config_content: &str) -> (String, String, i32) {
    let tmpfile = write_config(config_content);
    let config_path = tmpfile.path().to_str().unwrap().to_string();
    run_args("", &["check", "--config", &config_path])
}

pub fn write_config(config_content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp config");
    tmpfile
        .write_all(config_content.as_bytes())
        .expect("failed to write config");
    tmpfile
}

/// Runs the binary with the given stdin and args.
/// Returns (stdout, stderr, exit_code).
pub fn run_args(stdin_input: &str, args: &[&str]) -> (String, String, i32) {
    run_args_with_env(stdin_input, args, &[])
}

/// Like [`run_args`], with extra environment variables set on the child.
/// `RUST_LOG` is cleared first so only `envs` can turn logging on.
pub fn run_args_with_env(
    stdin_input: &str,
    args: &[&str],
    envs: &[(&str, &str)],
) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.args(args).env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let output = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::ErrorKind;
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn stop_input_json(stop_hook_active: bool) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.jsonl",
        "cwd": "/tmp/test",
        "permission_mode": "default",
        "hook_event_name": "Stop",
        "stop_hook_active": stop_hook_active
    })
    .to_string()
}

/// Parses the hook's stdout as a single JSON value.
pub fn parse_stop_output(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}
