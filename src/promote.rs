//! Release promotion: draft -> prerelease -> full release.
//!
//! Each promotion requires exactly one release in the source state; the
//! precondition layer in [ReleaseSet] rejects duplicates before any edit is
//! sent to the host.

use crate::domain::release::ReleaseSet;
use crate::error::{ReleaseGateError, Result};
use crate::host::{EditFlags, ReleaseHost};

/// Promote the current draft release to a prerelease.
///
/// Returns the tag that was promoted.
pub fn promote_to_prerelease<H: ReleaseHost>(host: &H) -> Result<String> {
    let releases = ReleaseSet::new(host.list_releases()?);
    let tag = releases
        .draft_tag()?
        .ok_or(ReleaseGateError::NoDraftFound)?
        .to_string();

    host.edit_release(
        &tag,
        EditFlags {
            draft: false,
            prerelease: true,
            latest: false,
        },
    )?;

    Ok(tag)
}

/// Promote the current prerelease to the full (latest) release.
///
/// Returns the tag that was promoted.
pub fn promote_to_release<H: ReleaseHost>(host: &H) -> Result<String> {
    let releases = ReleaseSet::new(host.list_releases()?);
    let tag = releases
        .prerelease_tag()?
        .ok_or(ReleaseGateError::NoPrereleaseFound)?
        .to_string();

    host.edit_release(
        &tag,
        EditFlags {
            draft: false,
            prerelease: false,
            latest: true,
        },
    )?;

    Ok(tag)
}
