//! Prompt composition
//!
//! Pure functions: template text plus task parameters in, final prompt out.
//! Placeholders are replaced by literal substring substitution, then each
//! command wraps the template in its fixed instructional boilerplate.

use tracing::debug;

use crate::repo::RepoInfo;

/// Replace `{key}` placeholders with their values, literally
pub fn substitute(template: &str, params: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in params {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

/// Issue reference phrasing: `#N` when the repo is known, `issue N` otherwise
fn issue_ref(issue: u64, repo: Option<&RepoInfo>) -> String {
    match repo {
        Some(_) => format!("#{}", issue),
        None => format!("issue {}", issue),
    }
}

/// Compose the prompt for implementing a GitHub issue
pub fn implement_prompt(template: &str, issue: u64, repo: Option<&RepoInfo>) -> String {
    debug!(issue, known_repo = repo.is_some(), "implement_prompt: called");
    let issue_ref = issue_ref(issue, repo);
    let body = substitute(
        template,
        &[
            ("task_description", format!("See issue {}", issue_ref)),
            ("issue_number", issue.to_string()),
        ],
    );

    format!(
        "Read GitHub issue {issue_ref} and implement it.\n\
         \n\
         {body}\n\
         \n\
         Steps:\n\
         1. Read the issue to understand requirements\n\
         2. Create branch: agent/{issue}\n\
         3. Implement the solution\n\
         4. Run tests if applicable\n\
         5. Commit with meaningful messages\n\
         6. Create a PR linking to the issue\n"
    )
}

/// Compose the prompt for reviewing a pull request
pub fn review_prompt(template: &str, pr: u64) -> String {
    debug!(pr, "review_prompt: called");
    let body = substitute(template, &[("pr_number", pr.to_string())]);

    format!(
        "Review PR #{pr} for this repository.\n\
         \n\
         {body}\n\
         \n\
         Steps:\n\
         1. Read the PR diff and description\n\
         2. Check against the review criteria\n\
         3. If issues found, post a review comment on the PR\n\
         4. If LGTM, approve the PR (or post approval comment)\n"
    )
}

/// Compose the prompt for a security-focused PR review
pub fn security_review_prompt(template: &str, pr: u64) -> String {
    debug!(pr, "security_review_prompt: called");
    let body = substitute(template, &[("pr_number", pr.to_string())]);

    format!(
        "Perform a security review of PR #{pr}.\n\
         \n\
         {body}\n\
         \n\
         This is a SECURITY review - be thorough and paranoid.\n\
         Post findings as a review comment on the PR.\n"
    )
}

/// Compose the short fire-and-forget prompt used for each batch issue
pub fn batch_prompt(issue: u64) -> String {
    format!(
        "Read GitHub issue #{issue} and implement it. Create branch agent/{issue}, implement, and create a PR."
    )
}
