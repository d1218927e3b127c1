//! agent-dispatch - AI coding agent front end
//!
//! A command-line front end that dispatches developer tasks (implement an
//! issue, review a PR, security-review a PR, batch-implement) to an external
//! AI coding agent executable. The agent binary does all real work; this
//! tool loads configuration and prompt templates, composes the final prompt
//! per command, and launches the agent as a child process.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`config`] - Configuration types and loading
//! - [`prompts`] - Prompt template loading and composition
//! - [`agent`] - Agent process launcher
//! - [`repo`] - Git remote owner/repo lookup

pub mod agent;
pub mod cli;
pub mod config;
pub mod prompts;
pub mod repo;

// Re-export commonly used types
pub use agent::AgentRunner;
pub use cli::{Cli, Command, SUPPORTED_PROVIDER, generate_after_help};
pub use config::{AgentConfig, Config, PromptsConfig};
pub use prompts::{
    PromptError, PromptLoader, batch_prompt, implement_prompt, review_prompt, security_review_prompt,
};
pub use repo::{RepoInfo, origin_repo, parse_github_remote};
