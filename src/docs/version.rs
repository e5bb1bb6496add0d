// src/docs/version.rs

//! Version derivation from release tags

use crate::error::{Error, Result};
use glob::Pattern;

/// Pattern release tags follow
pub const RELEASE_TAG_PATTERN: &str = "amanzi-*";

/// Prefix stripped from a release tag to get the published version
pub const RELEASE_TAG_PREFIX: &str = "amanzi-";

/// Derive the published version string from a tag listing
///
/// Keeps the tags matching `amanzi-*`, takes the lexicographically
/// greatest, and strips the prefix. An empty or non-matching listing is
/// fatal: the build has no version to stamp and must not invent one.
pub fn derive_version(tags: &[String]) -> Result<String> {
    let pattern = Pattern::new(RELEASE_TAG_PATTERN)
        .map_err(|e| Error::ParseError(format!("Invalid tag pattern: {}", e)))?;

    let latest = tags.iter().filter(|tag| pattern.matches(tag)).max();

    match latest {
        Some(tag) => Ok(tag
            .strip_prefix(RELEASE_TAG_PREFIX)
            .unwrap_or(tag.as_str())
            .to_string()),
        None => Err(Error::VersionResolutionError(format!(
            "No tag matching '{}' found",
            RELEASE_TAG_PATTERN
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_latest_tag_wins() {
        let version = derive_version(&tags(&["amanzi-1.0.0", "amanzi-1.1-dev"])).unwrap();
        assert_eq!(version, "1.1-dev");
    }

    #[test]
    fn test_listing_order_does_not_matter() {
        let version = derive_version(&tags(&["amanzi-1.1-dev", "amanzi-1.0.0"])).unwrap();
        assert_eq!(version, "1.1-dev");
    }

    #[test]
    fn test_non_matching_tags_ignored() {
        let version = derive_version(&tags(&["v2.0", "amanzi-0.83", "amanzi-0.9", "nightly"]))
            .unwrap();
        assert_eq!(version, "0.9");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        // "1.10.0" sorts below "1.2.0" as a string; that is the contract
        let version = derive_version(&tags(&["amanzi-1.2.0", "amanzi-1.10.0"])).unwrap();
        assert_eq!(version, "1.2.0");
    }

    #[test]
    fn test_empty_listing_fails() {
        let err = derive_version(&[]).unwrap_err();
        assert!(matches!(err, Error::VersionResolutionError(_)));
    }

    #[test]
    fn test_no_matching_tag_fails() {
        let err = derive_version(&tags(&["v1.0", "release-2"])).unwrap_err();
        assert!(matches!(err, Error::VersionResolutionError(_)));
    }
}
