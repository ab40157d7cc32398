use crate::domain::release::Release;
use crate::error::{ReleaseGateError, Result};
use crate::host::{EditFlags, ReleaseHost};
use std::process::Command;

/// JSON fields requested from `gh release list`
const RELEASE_FIELDS: &str = "name,tagName,isDraft,isPrerelease,isLatest,createdAt,publishedAt";

/// Release host backed by the `gh` CLI.
///
/// Relies on `gh` being installed and already authenticated (the usual state
/// inside a CI job). Every invocation is a fresh process; nothing is cached
/// between calls.
pub struct GhCli;

impl GhCli {
    pub fn new() -> Self {
        GhCli
    }

    fn run(args: &[&str]) -> Result<String> {
        let output = Command::new("gh")
            .args(args)
            .output()
            .map_err(|e| ReleaseGateError::host(format!("Failed to execute gh: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseGateError::host(format!(
                "gh {} failed with exit code {}: {}",
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseHost for GhCli {
    fn list_releases(&self) -> Result<Vec<Release>> {
        let stdout = Self::run(&["release", "list", "--json", RELEASE_FIELDS])?;

        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let releases: Vec<Release> = serde_json::from_str(trimmed)?;
        Ok(releases)
    }

    fn create_release(&self, tag: &str, title: &str, notes: &str, draft: bool) -> Result<()> {
        let mut args = vec!["release", "create", tag, "--title", title, "--notes", notes];
        if draft {
            args.push("--draft");
        }

        Self::run(&args)?;
        Ok(())
    }

    fn edit_release(&self, tag: &str, flags: EditFlags) -> Result<()> {
        let draft = format!("--draft={}", flags.draft);
        let prerelease = format!("--prerelease={}", flags.prerelease);
        let latest = format!("--latest={}", flags.latest);

        Self::run(&[
            "release",
            "edit",
            tag,
            draft.as_str(),
            prerelease.as_str(),
            latest.as_str(),
        ])?;
        Ok(())
    }
}
