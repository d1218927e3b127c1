//! Integration tests for agent-dispatch
//!
//! These drive the real binary against a temp workspace containing a config
//! file, prompt templates, and a stub agent script, and verify exit codes
//! and reported statuses end to end.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write the stub agent script and return its path
fn write_agent_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("stub-agent.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write stub agent");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("Failed to chmod stub agent");
    path
}

/// Set up `.agent/config.yml` and the prompt templates in a temp workspace
fn setup_workspace(agent_body: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let agent_path = write_agent_script(temp.path(), agent_body);

    let prompts_dir = temp.path().join(".agent/prompts");
    fs::create_dir_all(&prompts_dir).expect("Failed to create prompts dir");
    fs::write(prompts_dir.join("implement.md"), "Task: {task_description} ({issue_number})\n").unwrap();
    fs::write(prompts_dir.join("review.md"), "Review criteria: correctness, tests, style.\n").unwrap();
    fs::write(prompts_dir.join("security.md"), "Check for injection, secrets, unsafe deps.\n").unwrap();

    let config = format!(
        "agent:\n  command: {}\nprompts:\n  dir: .agent/prompts\n",
        agent_path.display()
    );
    fs::write(temp.path().join(".agent/config.yml"), config).unwrap();

    temp
}

fn agent_cmd(workspace: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("agent").expect("Binary should build");
    cmd.current_dir(workspace.path());
    cmd
}

// =============================================================================
// Config loading
// =============================================================================

#[test]
fn test_missing_config_file_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("agent")
        .unwrap()
        .current_dir(temp.path())
        .args(["--config", "/nonexistent/agent/config.yml", "implement", "--issue", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config not found"));
}

// =============================================================================
// Provider gate
// =============================================================================

#[test]
fn test_unsupported_provider_rejected_for_every_subcommand() {
    let temp = setup_workspace("exit 0");

    let subcommands: &[&[&str]] = &[
        &["implement", "--issue", "1"],
        &["review", "--pr", "1"],
        &["security-review", "--pr", "1"],
        &["batch", "--issues", "1,2"],
    ];

    for args in subcommands {
        agent_cmd(&temp)
            .arg("--provider")
            .arg("ollama")
            .args(*args)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Provider 'ollama' not yet implemented."));
    }
}

// =============================================================================
// Prompt templates
// =============================================================================

#[test]
fn test_missing_prompt_template_is_fatal() {
    let temp = setup_workspace("exit 0");
    fs::remove_file(temp.path().join(".agent/prompts/review.md")).unwrap();

    agent_cmd(&temp)
        .args(["review", "--pr", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Prompt not found"));
}

// =============================================================================
// Single-task commands
// =============================================================================

#[test]
fn test_single_task_echoes_child_exit_code() {
    let temp = setup_workspace("exit 7");

    agent_cmd(&temp).args(["implement", "--issue", "42"]).assert().code(7);
}

#[test]
fn test_single_task_success() {
    let temp = setup_workspace("exit 0");

    agent_cmd(&temp)
        .args(["review", "--pr", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running:"));
}

#[test]
fn test_print_only_forwards_print_flag() {
    // Stub fails unless its first argument is the print flag
    let temp = setup_workspace("[ \"$1\" = \"--print\" ] || exit 9\nexit 0");

    agent_cmd(&temp)
        .args(["--print-only", "security-review", "--pr", "8"])
        .assert()
        .success();

    agent_cmd(&temp).args(["security-review", "--pr", "8"]).assert().code(9);
}

#[test]
fn test_prompt_reaches_agent() {
    // Stub fails unless the prompt argument mentions the issue
    let temp = setup_workspace("case \"$*\" in *\"agent/42\"*) exit 0;; esac\nexit 5");

    agent_cmd(&temp).args(["implement", "--issue", "42"]).assert().success();
    agent_cmd(&temp).args(["implement", "--issue", "43"]).assert().code(5);
}

// =============================================================================
// Batch mode
// =============================================================================

#[test]
fn test_batch_reports_per_item_status_and_exits_zero() {
    // Stub fails only for issue #2
    let temp = setup_workspace("case \"$*\" in *\"issue #2 \"*) exit 1;; esac\nexit 0");

    agent_cmd(&temp)
        .args(["batch", "--issues", "1,2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dispatching 3 tasks..."))
        .stdout(predicate::str::contains("Issue #1: done"))
        .stdout(predicate::str::contains("Issue #2: failed"))
        .stdout(predicate::str::contains("Issue #3: done"));
}

#[test]
fn test_batch_tolerates_whitespace_in_issue_list() {
    let temp = setup_workspace("exit 0");

    agent_cmd(&temp)
        .args(["batch", "--issues", "1, 2, 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue #2: done"));
}

#[test]
fn test_batch_spawn_failure_reported_not_fatal() {
    let temp = setup_workspace("exit 0");
    let config = "agent:\n  command: /nonexistent/agent-binary\nprompts:\n  dir: .agent/prompts\n";
    fs::write(temp.path().join(".agent/config.yml"), config).unwrap();

    agent_cmd(&temp)
        .args(["batch", "--issues", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue #1: failed"));
}

#[test]
fn test_batch_invalid_issue_number_is_fatal() {
    let temp = setup_workspace("exit 0");

    agent_cmd(&temp)
        .args(["batch", "--issues", "1,abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid issue number"));
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn test_unknown_subcommand_exits_nonzero() {
    let temp = setup_workspace("exit 0");

    agent_cmd(&temp).arg("frobnicate").assert().failure();
}

#[test]
fn test_no_subcommand_prints_usage() {
    let temp = setup_workspace("exit 0");

    agent_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
