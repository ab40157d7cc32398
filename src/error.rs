use std::fmt;
use thiserror::Error;

/// Identifies a version source by role, so a failing check can name both
/// sides of the comparison in its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    Draft,
    Prerelease,
    Latest,
    CargoToml,
    PackageJson,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRole::Draft => write!(f, "draft release"),
            SourceRole::Prerelease => write!(f, "prerelease"),
            SourceRole::Latest => write!(f, "latest release"),
            SourceRole::CargoToml => write!(f, "Cargo.toml"),
            SourceRole::PackageJson => write!(f, "package.json"),
        }
    }
}

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseGateError {
    #[error("Invalid version format: '{0}' - expected X.Y.Z")]
    MalformedVersion(String),

    #[error("More than one draft release found; there must be at most one")]
    MultipleDraftsFound,

    #[error("More than one prerelease found; there must be at most one")]
    MultiplePrereleasesFound,

    #[error("More than one latest release found; there must be at most one")]
    MultipleLatestFound,

    #[error("No version found in Cargo.toml or package.json to set the draft release")]
    NoManifestVersion,

    #[error("The {lhs} version must be greater than the {rhs} version")]
    OrderingViolation { lhs: SourceRole, rhs: SourceRole },

    #[error("The draft release version must be the same as the version in {manifest}")]
    MismatchedDraftVersion { manifest: SourceRole },

    #[error("No draft release found")]
    NoDraftFound,

    #[error("No prerelease found")]
    NoPrereleaseFound,

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Release host error: {0}")]
    Host(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseGateError>;

impl ReleaseGateError {
    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ReleaseGateError::Manifest(msg.into())
    }

    /// Create a release host error with context
    pub fn host(msg: impl Into<String>) -> Self {
        ReleaseGateError::Host(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGateError::Config(msg.into())
    }
}
