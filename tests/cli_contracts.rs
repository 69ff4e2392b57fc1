use regex::Regex;
use std::process::Command;

fn run_maxstack(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_maxstack"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .output()
        .expect("failed to execute maxstack");
    assert!(
        output.status.success(),
        "maxstack {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn top_level_help_lists_all_command_groups() {
    let expected = ["godmode", "repo", "workflow", "backup", "version"];

    let help = run_maxstack(&["--help"]);
    for command in &expected {
        let re = Regex::new(&format!(r"(?m)^\s+{}\s+", regex::escape(command)))
            .expect("valid help regex");
        assert!(
            re.is_match(&help),
            "--help missing command: {}",
            command
        );
    }
}

#[test]
fn repo_help_lists_subcommands() {
    let help = run_maxstack(&["repo", "--help"]);
    for command in ["create", "default-branch"] {
        let re = Regex::new(&format!(r"(?m)^\s+{}\s+", regex::escape(command)))
            .expect("valid help regex");
        assert!(re.is_match(&help), "repo --help missing command: {}", command);
    }
}

#[test]
fn version_command_reports_the_package_version() {
    let out = run_maxstack(&["version"]);
    assert_eq!(out.trim(), format!("v{}", env!("CARGO_PKG_VERSION")));
}
