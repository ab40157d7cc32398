use crate::domain::release::Release;
use crate::error::{ReleaseGateError, Result};
use crate::host::{EditFlags, ReleaseHost};
use std::sync::Mutex;

/// Mock release host for testing without the `gh` CLI
///
/// Seeded with releases up front; edits are applied to the in-memory list and
/// recorded so tests can assert on the exact flags sent.
#[derive(Default)]
pub struct MockHost {
    releases: Mutex<Vec<Release>>,
    edits: Mutex<Vec<(String, EditFlags)>>,
    created: Mutex<Vec<String>>,
}

impl MockHost {
    /// Create a new empty mock host
    pub fn new() -> Self {
        MockHost::default()
    }

    /// Create a mock host seeded with the given releases
    pub fn with_releases(releases: Vec<Release>) -> Self {
        MockHost {
            releases: Mutex::new(releases),
            ..MockHost::default()
        }
    }

    /// Edits applied so far, in order
    pub fn edits(&self) -> Vec<(String, EditFlags)> {
        self.edits.lock().unwrap().clone()
    }

    /// Tags of releases created so far, in order
    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

impl ReleaseHost for MockHost {
    fn list_releases(&self) -> Result<Vec<Release>> {
        Ok(self.releases.lock().unwrap().clone())
    }

    fn create_release(&self, tag: &str, title: &str, _notes: &str, draft: bool) -> Result<()> {
        let mut release = Release::new(tag);
        release.name = title.to_string();
        release.is_draft = draft;

        self.releases.lock().unwrap().push(release);
        self.created.lock().unwrap().push(tag.to_string());
        Ok(())
    }

    fn edit_release(&self, tag: &str, flags: EditFlags) -> Result<()> {
        let mut releases = self.releases.lock().unwrap();
        let release = releases
            .iter_mut()
            .find(|r| r.tag_name == tag)
            .ok_or_else(|| ReleaseGateError::host(format!("No release tagged '{}'", tag)))?;

        release.is_draft = flags.draft;
        release.is_prerelease = flags.prerelease;
        release.is_latest = flags.latest;

        self.edits.lock().unwrap().push((tag.to_string(), flags));
        Ok(())
    }
}
