//! Narrow external-command seam for the `gh` CLI and git.
//!
//! Every ancillary subsystem (repo, workflow, backup) talks to GitHub
//! through this module and nothing else spawns processes. The module
//! compiler never calls into here. Each spawned command is appended as a
//! JSON line to `.maxstack/external.events.jsonl` under the invocation
//! directory; the audit write is best-effort and never fails the command.

use crate::core::error::MaxstackError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use ulid::Ulid;

/// The one organization this toolkit manages.
pub const ORG: &str = "ram133";

const AUDIT_DIR: &str = ".maxstack";
const AUDIT_LOG: &str = "external.events.jsonl";

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ExternalEvent {
    ts: String,
    event_id: String,
    command: String,
    args: Vec<String>,
    cwd: String,
    status: String,
    exit_code: Option<i32>,
}

/// Unix-epoch seconds with `Z` suffix (e.g. `1771220592Z`).
fn now_epoch_z() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}Z", secs)
}

fn audit_log_path(cwd: &Path) -> PathBuf {
    cwd.join(AUDIT_DIR).join(AUDIT_LOG)
}

fn log_event(cwd: &Path, event: &ExternalEvent) {
    let path = audit_log_path(cwd);
    let Some(parent) = path.parent() else {
        return;
    };
    if std::fs::create_dir_all(parent).is_err() {
        return;
    }
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    if let Ok(line) = serde_json::to_string(event) {
        let _ = writeln!(file, "{}", line);
    }
}

fn run(bin: &str, args: &[&str], cwd: &Path) -> Result<Output, MaxstackError> {
    let output = Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(MaxstackError::IoError)?;

    let event = ExternalEvent {
        ts: now_epoch_z(),
        event_id: Ulid::new().to_string(),
        command: bin.to_string(),
        args: args.iter().map(|s| s.to_string()).collect(),
        cwd: cwd.to_string_lossy().to_string(),
        status: if output.status.success() {
            "success".to_string()
        } else {
            "error".to_string()
        },
        exit_code: output.status.code(),
    };
    log_event(cwd, &event);

    Ok(output)
}

fn expect_success(bin: &str, args: &[&str], output: Output) -> Result<Output, MaxstackError> {
    if !output.status.success() {
        return Err(MaxstackError::CommandFailed(format!(
            "{} {} -> {}",
            bin,
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(output)
}

/// Run `gh` with `args`, failing on non-zero exit.
pub fn run_gh(args: &[&str], cwd: &Path) -> Result<Output, MaxstackError> {
    let output = run("gh", args, cwd)?;
    expect_success("gh", args, output)
}

/// Run `git` with `args`, failing on non-zero exit.
pub fn run_git(args: &[&str], cwd: &Path) -> Result<Output, MaxstackError> {
    let output = run("git", args, cwd)?;
    expect_success("git", args, output)
}

/// Run `git` with `args`, tolerating non-zero exit.
///
/// Used where the original sequence shrugged off failure (committing an
/// empty diff during workflow installation).
pub fn run_git_best_effort(args: &[&str], cwd: &Path) -> Result<Output, MaxstackError> {
    run("git", args, cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn failed_commands_still_append_an_audit_event() {
        let tmp = tempdir().expect("tempdir");
        let output = run("sh", &["-c", "exit 3"], tmp.path()).expect("spawn sh");
        assert_eq!(output.status.code(), Some(3));

        let log = std::fs::read_to_string(audit_log_path(tmp.path())).expect("audit log");
        let event: serde_json::Value =
            serde_json::from_str(log.lines().next().expect("one event")).expect("event json");
        assert_eq!(event["command"], "sh");
        assert_eq!(event["status"], "error");
        assert_eq!(event["exit_code"], 3);
    }

    #[test]
    fn successful_commands_record_success_status() {
        let tmp = tempdir().expect("tempdir");
        let output = run("sh", &["-c", "exit 0"], tmp.path()).expect("spawn sh");
        assert!(output.status.success());

        let log = std::fs::read_to_string(audit_log_path(tmp.path())).expect("audit log");
        let event: serde_json::Value =
            serde_json::from_str(log.lines().next().expect("one event")).expect("event json");
        assert_eq!(event["status"], "success");
        assert!(event["event_id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(
            event["ts"]
                .as_str()
                .is_some_and(|ts| ts.ends_with('Z'))
        );
    }
}
