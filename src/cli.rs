//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// The only provider currently wired up
pub const SUPPORTED_PROVIDER: &str = "claude-code";

/// Agent Dispatch - unified interface for agent operations
#[derive(Parser)]
#[command(
    name = "agent",
    about = "Dispatch developer tasks to an external AI coding agent",
    version,
)]
pub struct Cli {
    /// Agent provider
    #[arg(
        long,
        global = true,
        default_value = SUPPORTED_PROVIDER,
        help = "Agent provider (default: claude-code)"
    )]
    pub provider: String,

    /// Run the agent in non-interactive print mode
    #[arg(long = "print-only", global = true, help = "Run in print mode (non-interactive)")]
    pub print_only: bool,

    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Implement a GitHub issue
    Implement {
        /// Issue number
        #[arg(short, long)]
        issue: u64,
    },

    /// Review a pull request
    Review {
        /// PR number
        #[arg(short, long)]
        pr: u64,
    },

    /// Security review a PR
    SecurityReview {
        /// PR number
        #[arg(short, long)]
        pr: u64,
    },

    /// Process multiple issues in parallel
    Batch {
        /// Comma-separated issue numbers
        #[arg(long)]
        issues: String,
    },
}

/// Result of checking a required tool
pub struct ToolCheck {
    pub name: &'static str,
    pub available: bool,
    pub version: Option<String>,
}

impl ToolCheck {
    /// Check if a tool is available and get its version
    pub fn check(name: &'static str, version_args: &[&str]) -> Self {
        debug!(name, ?version_args, "ToolCheck::check: called");
        let result = std::process::Command::new(name).args(version_args).output();

        match result {
            Ok(output) if output.status.success() => {
                debug!(name, "ToolCheck::check: tool available");
                let version_str = String::from_utf8_lossy(&output.stdout);
                let version = parse_version(&version_str);
                Self {
                    name,
                    available: true,
                    version: Some(version),
                }
            }
            _ => {
                debug!(name, "ToolCheck::check: tool not available");
                Self {
                    name,
                    available: false,
                    version: None,
                }
            }
        }
    }
}

/// Parse version from command output (extracts first version-like string)
fn parse_version(output: &str) -> String {
    for word in output.split_whitespace() {
        let word = word.trim_start_matches('v');
        if word.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
            let version: String = word.chars().take_while(|c| c.is_ascii_digit() || *c == '.').collect();
            if !version.is_empty() {
                debug!(%version, "parse_version: found version");
                return version;
            }
        }
    }
    debug!("parse_version: no version found, returning unknown");
    "unknown".to_string()
}

/// Check the tools the agent commands shell out to
pub fn check_required_tools() -> Vec<ToolCheck> {
    debug!("check_required_tools: called");
    vec![
        ToolCheck::check("claude", &["--version"]),
        ToolCheck::check("git", &["--version"]),
    ]
}

/// Generate the after_help text with tool checks and usage examples
pub fn generate_after_help() -> String {
    debug!("generate_after_help: called");
    let tools = check_required_tools();

    let mut help = String::new();

    help.push_str("Required Tools:\n");
    for tool in &tools {
        let icon = if tool.available { "\u{2705}" } else { "\u{274C}" };
        let version = tool.version.as_deref().unwrap_or("not found");
        help.push_str(&format!("  {} {:<10} {}\n", icon, tool.name, version));
    }

    help.push('\n');
    help.push_str("Examples:\n");
    help.push_str("  agent implement --issue 42\n");
    help.push_str("  agent review --pr 42\n");
    help.push_str("  agent security-review --pr 42\n");
    help.push_str("  agent batch --issues \"42,43,44\"\n");
    help.push_str("  agent --provider ollama review --pr 42\n");

    help
}
