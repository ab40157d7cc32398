// tests/promotion_test.rs
//
// Full promotion lifecycle against the mock host: init -> draft ->
// prerelease -> full release.

use release_gate::config::ReleaseConfig;
use release_gate::domain::release::{Release, ReleaseSet};
use release_gate::host::{MockHost, ReleaseHost};
use release_gate::initial::{create_initial_release, InitialOutcome};
use release_gate::promote::{promote_to_prerelease, promote_to_release};

#[test]
fn test_full_promotion_lifecycle() {
    let host = MockHost::new();
    let release_config = ReleaseConfig::default();

    // Empty repository gets the seed draft
    let outcome = create_initial_release(&host, &release_config).unwrap();
    assert_eq!(outcome, InitialOutcome::Created("v0.0.1".to_string()));

    // Running init again is a no-op
    let outcome = create_initial_release(&host, &release_config).unwrap();
    assert_eq!(outcome, InitialOutcome::AlreadyExists);

    // Draft -> prerelease
    let tag = promote_to_prerelease(&host).unwrap();
    assert_eq!(tag, "v0.0.1");

    let releases = ReleaseSet::new(host.list_releases().unwrap());
    assert_eq!(releases.draft_tag().unwrap(), None);
    assert_eq!(releases.prerelease_tag().unwrap(), Some("v0.0.1"));

    // Prerelease -> full release
    let tag = promote_to_release(&host).unwrap();
    assert_eq!(tag, "v0.0.1");

    let releases = ReleaseSet::new(host.list_releases().unwrap());
    assert_eq!(releases.prerelease_tag().unwrap(), None);
    assert_eq!(releases.latest_tag().unwrap(), Some("v0.0.1"));
}

#[test]
fn test_promotions_require_their_source_state() {
    let host = MockHost::with_releases(vec![Release::latest("v1.0.0")]);

    assert!(promote_to_prerelease(&host).is_err());
    assert!(promote_to_release(&host).is_err());
    assert!(host.edits().is_empty());
}

#[test]
fn test_promotion_leaves_other_releases_untouched() {
    let host = MockHost::with_releases(vec![
        Release::draft("v2.0.0"),
        Release::latest("v1.0.0"),
    ]);

    promote_to_prerelease(&host).unwrap();

    let releases = ReleaseSet::new(host.list_releases().unwrap());
    assert_eq!(releases.latest_tag().unwrap(), Some("v1.0.0"));
    assert_eq!(releases.prerelease_tag().unwrap(), Some("v2.0.0"));
}
