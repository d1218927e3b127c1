//! Prompt template loading and composition

mod compose;
mod loader;

pub use compose::{batch_prompt, implement_prompt, review_prompt, security_review_prompt, substitute};
pub use loader::{PromptError, PromptLoader};
