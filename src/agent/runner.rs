//! Agent process launcher
//!
//! Builds the command line for the external agent executable and launches it
//! as a child process. The agent is an opaque black box: it inherits stdio,
//! does all real work itself, and the only thing surfaced back is its exit
//! status. No timeout, no retry, no cancellation.

use eyre::{Context, Result};
use tokio::process::{Child, Command};
use tracing::debug;

use crate::config::AgentConfig;

/// Launches the external agent executable
pub struct AgentRunner {
    /// Agent executable name or path
    command: String,
    /// Non-interactive print-mode flag
    print_flag: String,
    /// Whether single-task runs pass the print flag through
    print_only: bool,
}

impl AgentRunner {
    /// Create a runner from the agent section of the config
    pub fn new(config: &AgentConfig, print_only: bool) -> Self {
        debug!(command = %config.command, print_only, "AgentRunner::new: called");
        Self {
            command: config.command.clone(),
            print_flag: config.print_flag.clone(),
            print_only,
        }
    }

    /// Run the agent with the given prompt and wait for completion
    ///
    /// Returns the child's exit code (-1 if killed by a signal).
    pub async fn run(&self, prompt: &str) -> Result<i32> {
        debug!(prompt_len = prompt.len(), "AgentRunner::run: called");

        println!(
            "Running: {} {}<prompt>",
            self.command,
            if self.print_only { format!("{} ", self.print_flag) } else { String::new() }
        );
        println!("{}", "-".repeat(50));

        let mut cmd = Command::new(&self.command);
        if self.print_only {
            cmd.arg(&self.print_flag);
        }
        cmd.arg(prompt);

        let status = cmd
            .status()
            .await
            .context(format!("Failed to run agent command '{}'", self.command))?;

        debug!(?status, "AgentRunner::run: agent finished");
        Ok(status.code().unwrap_or(-1))
    }

    /// Spawn the agent without waiting (batch mode)
    ///
    /// Batch children always run in print mode so they never block on an
    /// interactive session.
    pub fn spawn(&self, prompt: &str) -> Result<Child> {
        debug!(prompt_len = prompt.len(), "AgentRunner::spawn: called");
        Command::new(&self.command)
            .arg(&self.print_flag)
            .arg(prompt)
            .spawn()
            .context(format!("Failed to spawn agent command '{}'", self.command))
    }
}
