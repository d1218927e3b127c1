//! Prompt Loader
//!
//! Loads markdown prompt templates from the configured directory. A missing
//! template is fatal to the whole run, so the error carries the full path.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::config::PromptsConfig;

/// Errors that can occur while loading a prompt template
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read prompt {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads prompt templates by name
pub struct PromptLoader {
    /// Directory containing `{name}.md` templates
    dir: PathBuf,
}

impl PromptLoader {
    /// Create a loader over the given template directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!(?dir, "PromptLoader::new: called");
        Self { dir }
    }

    /// Create a loader from the prompts section of the config
    pub fn from_config(config: &PromptsConfig) -> Self {
        Self::new(&config.dir)
    }

    /// Path a named template resolves to
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.md", name))
    }

    /// Load a template by name
    pub fn load(&self, name: &str) -> Result<String, PromptError> {
        debug!(%name, "PromptLoader::load: called");
        let path = self.template_path(name);
        if !path.exists() {
            debug!(?path, "PromptLoader::load: template not found");
            return Err(PromptError::NotFound(path));
        }

        std::fs::read_to_string(&path).map_err(|source| PromptError::Io { path, source })
    }
}
