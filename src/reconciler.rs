//! Cross-source version-consistency rules.
//!
//! The reconciler takes a snapshot of the versions visible to one CI run
//! (draft release, prerelease, latest release, and the project manifests) and
//! decides whether a new draft release may be cut, or whether an existing
//! draft is consistent with everything else. It performs no I/O; callers
//! fetch the sources once and pass them in by value.

use crate::domain::release::ReleaseSet;
use crate::domain::version::Version;
use crate::error::{ReleaseGateError, Result, SourceRole};

/// Read-only snapshot of the version strings for a single reconciliation pass.
///
/// `cargo` and `npm` hold the versions recorded in Cargo.toml and
/// package.json; at least one of them must be present. The release tags may
/// carry a leading "v", the manifest versions normally do not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionSources {
    pub draft: Option<String>,
    pub prerelease: Option<String>,
    pub latest: Option<String>,
    pub cargo: Option<String>,
    pub npm: Option<String>,
}

impl VersionSources {
    /// Build a snapshot from the fetched release set and manifest versions.
    ///
    /// Fails if the release set holds more than one release per flag
    /// category.
    pub fn from_releases(
        releases: &ReleaseSet,
        cargo: Option<String>,
        npm: Option<String>,
    ) -> Result<Self> {
        Ok(VersionSources {
            draft: releases.draft_tag()?.map(str::to_string),
            prerelease: releases.prerelease_tag()?.map(str::to_string),
            latest: releases.latest_tag()?.map(str::to_string),
            cargo,
            npm,
        })
    }

    fn manifests(&self) -> [(SourceRole, Option<&str>); 2] {
        [
            (SourceRole::CargoToml, self.cargo.as_deref()),
            (SourceRole::PackageJson, self.npm.as_deref()),
        ]
    }
}

/// Outcome of a successful reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// A draft release already exists and every invariant holds.
    NoDraftNeeded,
    /// No draft exists; this manifest version should become the new draft.
    ProposedDraft(Version),
}

/// Check the cross-source ordering invariants and decide on a draft release.
///
/// With no draft present, every present manifest version must be strictly
/// greater than the latest release and any prerelease, and the prerelease
/// must itself be greater than the latest release; the proposed draft version
/// is then drawn from Cargo.toml, falling back to package.json. With a draft
/// present, draft > prerelease > latest must hold (whichever of those exist)
/// and every present manifest version must equal the draft.
///
/// Pure function: deterministic, no retained state across calls.
pub fn reconcile(sources: &VersionSources) -> Result<Decision> {
    if sources.cargo.is_none() && sources.npm.is_none() {
        return Err(ReleaseGateError::NoManifestVersion);
    }

    match sources.draft.as_deref() {
        Some(draft) => validate_existing_draft(draft, sources),
        None => propose_draft(sources),
    }
}

fn propose_draft(sources: &VersionSources) -> Result<Decision> {
    if let Some(latest) = sources.latest.as_deref() {
        let latest_version = Version::parse(latest)?;

        for (role, manifest) in sources.manifests() {
            if let Some(raw) = manifest {
                require_greater(Version::parse(raw)?, role, latest_version, SourceRole::Latest)?;
            }
        }

        if let Some(pre) = sources.prerelease.as_deref() {
            let pre_version = Version::parse(pre)?;
            require_greater(
                pre_version,
                SourceRole::Prerelease,
                latest_version,
                SourceRole::Latest,
            )?;

            for (role, manifest) in sources.manifests() {
                if let Some(raw) = manifest {
                    require_greater(Version::parse(raw)?, role, pre_version, SourceRole::Prerelease)?;
                }
            }
        }
    } else if let Some(pre) = sources.prerelease.as_deref() {
        // First-ever release. The original automation compared raw
        // dot-separated components here, stripping a leading "v" from the
        // prerelease side only, so components >= 10 compare as strings
        // ("10" < "9"). Kept as-is until the intent is confirmed.
        let pre_parts: Vec<&str> = pre.trim_start_matches('v').split('.').collect();

        for (role, manifest) in sources.manifests() {
            if let Some(raw) = manifest {
                let manifest_parts: Vec<&str> = raw.split('.').collect();
                if manifest_parts <= pre_parts {
                    return Err(ReleaseGateError::OrderingViolation {
                        lhs: role,
                        rhs: SourceRole::Prerelease,
                    });
                }
            }
        }
    }

    // Cargo.toml takes precedence when both manifests record a version
    let proposed = sources
        .cargo
        .as_deref()
        .or(sources.npm.as_deref())
        .ok_or(ReleaseGateError::NoManifestVersion)?;

    Ok(Decision::ProposedDraft(Version::parse(proposed)?))
}

fn validate_existing_draft(draft: &str, sources: &VersionSources) -> Result<Decision> {
    let draft_version = Version::parse(draft)?;

    if let Some(latest) = sources.latest.as_deref() {
        let latest_version = Version::parse(latest)?;

        if let Some(pre) = sources.prerelease.as_deref() {
            let pre_version = Version::parse(pre)?;
            require_greater(
                draft_version,
                SourceRole::Draft,
                pre_version,
                SourceRole::Prerelease,
            )?;
            require_greater(
                pre_version,
                SourceRole::Prerelease,
                latest_version,
                SourceRole::Latest,
            )?;
        } else {
            require_greater(
                draft_version,
                SourceRole::Draft,
                latest_version,
                SourceRole::Latest,
            )?;
        }
    } else if let Some(pre) = sources.prerelease.as_deref() {
        require_greater(
            draft_version,
            SourceRole::Draft,
            Version::parse(pre)?,
            SourceRole::Prerelease,
        )?;
    }

    // An existing draft must agree with every manifest, componentwise
    for (role, manifest) in sources.manifests() {
        if let Some(raw) = manifest {
            if Version::parse(raw)? != draft_version {
                return Err(ReleaseGateError::MismatchedDraftVersion { manifest: role });
            }
        }
    }

    Ok(Decision::NoDraftNeeded)
}

fn require_greater(
    lhs: Version,
    lhs_role: SourceRole,
    rhs: Version,
    rhs_role: SourceRole,
) -> Result<()> {
    if lhs > rhs {
        Ok(())
    } else {
        Err(ReleaseGateError::OrderingViolation {
            lhs: lhs_role,
            rhs: rhs_role,
        })
    }
}
