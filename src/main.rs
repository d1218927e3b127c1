//! agent-dispatch - AI coding agent front end
//!
//! CLI entry point: loads config and prompt templates, composes the final
//! prompt per command, and launches the external agent executable.

use clap::{CommandFactory, FromArgMatches};
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use agent_dispatch::agent::AgentRunner;
use agent_dispatch::cli::{Cli, Command, SUPPORTED_PROVIDER, generate_after_help};
use agent_dispatch::config::Config;
use agent_dispatch::prompts::{
    PromptLoader, batch_prompt, implement_prompt, review_prompt, security_review_prompt,
};
use agent_dispatch::repo::origin_repo;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level_str = cli_log_level.or(config_log_level);
    let level = match level_str.map(|s| s.to_uppercase()).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Build command with dynamic after_help that shows tool checks
    let cmd = Cli::command().after_help(generate_after_help());

    // Parse CLI arguments using the modified command
    let cli = Cli::from_arg_matches(&cmd.get_matches())?;

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    // Setup logging with priority: CLI > config > INFO default
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Loaded config: agent command '{}'", config.agent.command);

    // Only one provider is wired up; everything else is a hard stop
    if cli.provider != SUPPORTED_PROVIDER {
        debug!(provider = %cli.provider, "main: unsupported provider");
        println!("Provider '{}' not yet implemented.", cli.provider);
        println!("Currently only {} is supported.", SUPPORTED_PROVIDER);
        println!("Other providers can be added to the agent config as needed.");
        std::process::exit(1);
    }

    let runner = AgentRunner::new(&config.agent, cli.print_only);
    let loader = PromptLoader::from_config(&config.prompts);

    // Dispatch command
    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Implement { issue } => {
            debug!(issue, "main: matched Implement command");
            cmd_implement(&runner, &loader, issue).await
        }
        Command::Review { pr } => {
            debug!(pr, "main: matched Review command");
            cmd_review(&runner, &loader, pr).await
        }
        Command::SecurityReview { pr } => {
            debug!(pr, "main: matched SecurityReview command");
            cmd_security_review(&runner, &loader, pr).await
        }
        Command::Batch { issues } => {
            debug!(%issues, "main: matched Batch command");
            cmd_batch(&runner, &issues).await
        }
    }
}

/// Exit with the child's code when it failed; single-task commands echo it
fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        debug!(code, "exit_with: agent exited nonzero");
        std::process::exit(code);
    }
    Ok(())
}

/// Implement a GitHub issue
async fn cmd_implement(runner: &AgentRunner, loader: &PromptLoader, issue: u64) -> Result<()> {
    debug!(issue, "cmd_implement: called");
    let template = loader.load("implement")?;
    let repo = origin_repo();
    if repo.is_none() {
        debug!("cmd_implement: no GitHub origin remote, using generic issue phrasing");
    }

    let prompt = implement_prompt(&template, issue, repo.as_ref());
    exit_with(runner.run(&prompt).await?)
}

/// Review a pull request
async fn cmd_review(runner: &AgentRunner, loader: &PromptLoader, pr: u64) -> Result<()> {
    debug!(pr, "cmd_review: called");
    let template = loader.load("review")?;

    let prompt = review_prompt(&template, pr);
    exit_with(runner.run(&prompt).await?)
}

/// Security-focused review of a pull request
async fn cmd_security_review(runner: &AgentRunner, loader: &PromptLoader, pr: u64) -> Result<()> {
    debug!(pr, "cmd_security_review: called");
    let template = loader.load("security")?;

    let prompt = security_review_prompt(&template, pr);
    exit_with(runner.run(&prompt).await?)
}

/// Process multiple issues as independent, concurrently launched tasks
///
/// Waits for children in input order, reports done/failed per issue, and
/// always exits 0 once every child has been waited on.
async fn cmd_batch(runner: &AgentRunner, issues: &str) -> Result<()> {
    debug!(%issues, "cmd_batch: called");
    let issues: Vec<u64> = issues
        .split(',')
        .map(|s| s.trim().parse::<u64>().context(format!("Invalid issue number '{}'", s.trim())))
        .collect::<Result<_>>()?;

    println!("Dispatching {} tasks...", issues.len());

    let mut children = Vec::with_capacity(issues.len());
    for issue in issues {
        println!("  Starting issue #{}...", issue);
        match runner.spawn(&batch_prompt(issue)) {
            Ok(child) => children.push((issue, Some(child))),
            Err(e) => {
                warn!(issue, error = %e, "cmd_batch: failed to spawn agent");
                children.push((issue, None));
            }
        }
    }

    println!();
    println!("Waiting for all tasks to complete...");
    for (issue, child) in children {
        let success = match child {
            Some(mut child) => match child.wait().await {
                Ok(status) => status.success(),
                Err(e) => {
                    warn!(issue, error = %e, "cmd_batch: failed to wait on agent");
                    false
                }
            },
            None => false,
        };
        let status = if success { "done" } else { "failed" };
        println!("  Issue #{}: {}", issue, status);
    }

    Ok(())
}
