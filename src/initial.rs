//! Initial release creation.
//!
//! A repository with no releases at all gets a seed draft release so the
//! promotion cycle has something to start from. Running against a repository
//! that already has any release is a no-op.

use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::host::ReleaseHost;

/// Outcome of an initial-release attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialOutcome {
    /// The seed draft release was created with this tag.
    Created(String),
    /// The repository already has releases; nothing was done.
    AlreadyExists,
}

/// Create the initial draft release if the repository has none.
pub fn create_initial_release<H: ReleaseHost>(
    host: &H,
    release: &ReleaseConfig,
) -> Result<InitialOutcome> {
    if !host.list_releases()?.is_empty() {
        return Ok(InitialOutcome::AlreadyExists);
    }

    host.create_release(
        &release.initial_tag,
        &release.initial_title,
        &release.initial_notes,
        true,
    )?;

    Ok(InitialOutcome::Created(release.initial_tag.clone()))
}
