use crate::error::{ReleaseGateError, Result};
use serde::{Deserialize, Serialize};

/// A single release entry as reported by the release host.
///
/// Field names follow the JSON payload of
/// `gh release list --json name,tagName,isDraft,isPrerelease,isLatest,createdAt,publishedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    #[serde(default)]
    pub name: String,
    pub tag_name: String,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub is_prerelease: bool,
    #[serde(default)]
    pub is_latest: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Release {
    /// Create a release entry with the given tag and no flags set.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Release {
            name: String::new(),
            tag_name: tag_name.into(),
            is_draft: false,
            is_prerelease: false,
            is_latest: false,
            created_at: None,
            published_at: None,
        }
    }

    pub fn draft(tag_name: impl Into<String>) -> Self {
        Release {
            is_draft: true,
            ..Release::new(tag_name)
        }
    }

    pub fn prerelease(tag_name: impl Into<String>) -> Self {
        Release {
            is_prerelease: true,
            ..Release::new(tag_name)
        }
    }

    pub fn latest(tag_name: impl Into<String>) -> Self {
        Release {
            is_latest: true,
            ..Release::new(tag_name)
        }
    }
}

/// The set of releases fetched once from the release host.
///
/// This is the precondition layer in front of the reconciler: each flag
/// category (draft, prerelease, latest) must resolve to at most one release,
/// and the accessors fail loudly when the host violates that.
#[derive(Debug, Clone, Default)]
pub struct ReleaseSet {
    releases: Vec<Release>,
}

impl ReleaseSet {
    pub fn new(releases: Vec<Release>) -> Self {
        ReleaseSet { releases }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Tag of the release currently marked draft, if any.
    pub fn draft_tag(&self) -> Result<Option<&str>> {
        self.single_tag(|r| r.is_draft, ReleaseGateError::MultipleDraftsFound)
    }

    /// Tag of the release currently marked prerelease, if any.
    pub fn prerelease_tag(&self) -> Result<Option<&str>> {
        self.single_tag(
            |r| r.is_prerelease,
            ReleaseGateError::MultiplePrereleasesFound,
        )
    }

    /// Tag of the release currently marked latest, if any.
    pub fn latest_tag(&self) -> Result<Option<&str>> {
        self.single_tag(|r| r.is_latest, ReleaseGateError::MultipleLatestFound)
    }

    fn single_tag<F>(&self, flag: F, too_many: ReleaseGateError) -> Result<Option<&str>>
    where
        F: Fn(&Release) -> bool,
    {
        let mut tags = self
            .releases
            .iter()
            .filter(|r| flag(r))
            .map(|r| r.tag_name.as_str());

        let first = tags.next();
        if tags.next().is_some() {
            return Err(too_many);
        }

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserializes_from_host_json() {
        let json = r#"{
            "name": "Release 1.0.0",
            "tagName": "v1.0.0",
            "isDraft": false,
            "isPrerelease": false,
            "isLatest": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "publishedAt": "2024-01-02T00:00:00Z"
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v1.0.0");
        assert!(release.is_latest);
        assert!(!release.is_draft);
        assert_eq!(release.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_release_deserializes_with_missing_flags() {
        let json = r#"{"tagName": "v0.1.0"}"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name, "v0.1.0");
        assert!(!release.is_draft);
        assert!(!release.is_prerelease);
        assert!(!release.is_latest);
    }

    #[test]
    fn test_empty_set_has_no_tags() {
        let set = ReleaseSet::default();
        assert!(set.is_empty());
        assert_eq!(set.draft_tag().unwrap(), None);
        assert_eq!(set.prerelease_tag().unwrap(), None);
        assert_eq!(set.latest_tag().unwrap(), None);
    }

    #[test]
    fn test_single_tag_per_flag() {
        let set = ReleaseSet::new(vec![
            Release::draft("v2.0.0"),
            Release::prerelease("v1.5.0"),
            Release::latest("v1.0.0"),
        ]);

        assert_eq!(set.draft_tag().unwrap(), Some("v2.0.0"));
        assert_eq!(set.prerelease_tag().unwrap(), Some("v1.5.0"));
        assert_eq!(set.latest_tag().unwrap(), Some("v1.0.0"));
    }

    #[test]
    fn test_multiple_drafts_rejected() {
        let set = ReleaseSet::new(vec![Release::draft("v2.0.0"), Release::draft("v2.1.0")]);
        assert!(matches!(
            set.draft_tag(),
            Err(ReleaseGateError::MultipleDraftsFound)
        ));
    }

    #[test]
    fn test_multiple_prereleases_rejected() {
        let set = ReleaseSet::new(vec![
            Release::prerelease("v1.5.0"),
            Release::prerelease("v1.6.0"),
        ]);
        assert!(matches!(
            set.prerelease_tag(),
            Err(ReleaseGateError::MultiplePrereleasesFound)
        ));
    }

    #[test]
    fn test_multiple_latest_rejected() {
        let set = ReleaseSet::new(vec![Release::latest("v1.0.0"), Release::latest("v1.1.0")]);
        assert!(matches!(
            set.latest_tag(),
            Err(ReleaseGateError::MultipleLatestFound)
        ));
    }

    #[test]
    fn test_unflagged_releases_are_ignored() {
        let set = ReleaseSet::new(vec![
            Release::new("v0.1.0"),
            Release::new("v0.2.0"),
            Release::latest("v0.3.0"),
        ]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.draft_tag().unwrap(), None);
        assert_eq!(set.latest_tag().unwrap(), Some("v0.3.0"));
    }
}
