//! Release host abstraction layer
//!
//! The release host holds the draft/prerelease/latest releases this tool
//! reconciles and promotes. The [ReleaseHost] trait keeps the rest of the
//! crate independent of how those releases are fetched; concrete
//! implementations are:
//!
//! - [gh::GhCli]: shells out to the `gh` CLI
//! - [mock::MockHost]: an in-memory implementation for testing

pub mod gh;
pub mod mock;

pub use gh::GhCli;
pub use mock::MockHost;

use crate::domain::release::Release;
use crate::error::Result;

/// Lifecycle flags applied when editing a release.
///
/// Promotion flips these as a unit: a draft becomes a prerelease with
/// `{draft: false, prerelease: true, latest: false}`, a prerelease becomes
/// the full release with `{draft: false, prerelease: false, latest: true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditFlags {
    pub draft: bool,
    pub prerelease: bool,
    pub latest: bool,
}

/// Operations against the release host.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result]; implementations map transport failures to
/// [crate::error::ReleaseGateError::Host].
pub trait ReleaseHost: Send + Sync {
    /// Fetch every release, with its lifecycle flags.
    fn list_releases(&self) -> Result<Vec<Release>>;

    /// Create a release for `tag`, optionally as a draft.
    fn create_release(&self, tag: &str, title: &str, notes: &str, draft: bool) -> Result<()>;

    /// Rewrite the lifecycle flags of the release tagged `tag`.
    fn edit_release(&self, tag: &str, flags: EditFlags) -> Result<()>;
}
