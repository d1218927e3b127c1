//! Git remote owner/repo lookup
//!
//! Used only to phrase issue references as `#N` when the origin remote is a
//! GitHub URL. Every failure here degrades to `None`; prompts then fall back
//! to the generic `issue N` phrasing.

use tracing::debug;

/// Owner and repository name parsed from the origin remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
}

/// Parse a GitHub remote URL in SSH or HTTPS form
///
/// Accepts `git@github.com:owner/repo.git` and
/// `https://github.com/owner/repo.git` (the `.git` suffix is optional).
pub fn parse_github_remote(url: &str) -> Option<RepoInfo> {
    let url = url.trim();
    if !url.contains("github.com") {
        debug!(%url, "parse_github_remote: not a github.com URL");
        return None;
    }

    let path = if url.starts_with("git@") {
        url.split_once(':')?.1
    } else {
        url.split_once("github.com/")?.1
    };

    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, repo) = path.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        debug!(%path, "parse_github_remote: malformed owner/repo path");
        return None;
    }

    Some(RepoInfo {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// Get the current repo owner/name from the origin remote
pub fn origin_repo() -> Option<RepoInfo> {
    debug!("origin_repo: called");
    let output = std::process::Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()?;

    if !output.status.success() {
        debug!(status = ?output.status, "origin_repo: git remote get-url failed");
        return None;
    }

    let url = String::from_utf8_lossy(&output.stdout);
    parse_github_remote(&url)
}
