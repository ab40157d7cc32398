//! Domain logic - pure types independent of the release host and manifests

pub mod release;
pub mod version;

pub use release::{Release, ReleaseSet};
pub use version::Version;
