//! Project manifest readers.
//!
//! The intended release version can be recorded in Cargo.toml, package.json,
//! or both. Each reader returns `Ok(None)` when its file is absent so the
//! reconciler can treat the source as optional, but a file that exists with
//! a missing, empty, or malformed version is an error.

use crate::domain::version::Version;
use crate::error::{ReleaseGateError, Result};
use std::fs;
use std::path::Path;

/// Reads the version from `Cargo.toml` (`[package] version`).
///
/// # Returns
/// * `Ok(Some(version))` - The version string (#.#.#)
/// * `Ok(None)` - Cargo.toml does not exist in `dir`
/// * `Err` - The file exists but the version is missing, empty, or invalid
pub fn cargo_version(dir: &Path) -> Result<Option<String>> {
    let path = dir.join("Cargo.toml");
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)?;
    let doc: toml::Value = toml::from_str(&raw)?;

    let version = doc
        .get("package")
        .and_then(|pkg| pkg.get("version"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ReleaseGateError::manifest("Cargo.toml has no [package] version entry")
        })?;

    validate_manifest_version(version, "Cargo.toml")?;
    Ok(Some(version.to_string()))
}

/// Reads the version from `package.json` (top-level `"version"`).
///
/// Same contract as [cargo_version]: absent file is `Ok(None)`, an existing
/// file must carry a valid version.
pub fn npm_version(dir: &Path) -> Result<Option<String>> {
    let path = dir.join("package.json");
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)?;
    let doc: serde_json::Value = serde_json::from_str(&raw)?;

    let version = doc
        .get("version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ReleaseGateError::manifest("package.json has no version entry"))?;

    validate_manifest_version(version, "package.json")?;
    Ok(Some(version.to_string()))
}

/// Reads the toolchain requirement from `Cargo.toml` (`[package] rust-version`).
///
/// Unlike the release version readers this fails when the file is missing,
/// since the caller explicitly asked for the toolchain version.
pub fn rust_version(dir: &Path) -> Result<String> {
    let path = dir.join("Cargo.toml");
    if !path.exists() {
        return Err(ReleaseGateError::manifest(format!(
            "Cargo.toml not found in {}",
            dir.display()
        )));
    }

    let raw = fs::read_to_string(&path)?;
    let doc: toml::Value = toml::from_str(&raw)?;

    let version = doc
        .get("package")
        .and_then(|pkg| pkg.get("rust-version"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ReleaseGateError::manifest("Cargo.toml has no [package] rust-version entry")
        })?;

    if version.is_empty() {
        return Err(ReleaseGateError::manifest(
            "The rust-version in Cargo.toml must not be empty",
        ));
    }

    Ok(version.to_string())
}

fn validate_manifest_version(version: &str, file: &str) -> Result<()> {
    if version.is_empty() {
        return Err(ReleaseGateError::manifest(format!(
            "The version in {} must not be empty",
            file
        )));
    }

    if !Version::is_valid(version) {
        return Err(ReleaseGateError::MalformedVersion(version.to_string()));
    }

    Ok(())
}
