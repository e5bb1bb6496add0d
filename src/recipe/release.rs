// src/recipe/release.rs

//! Release declarations, version normalization, and `@` selectors
//!
//! Recipes pin their buildable releases to git refs. Patch declarations
//! pick releases out with Spack `@` notation: `@master`, `@1.0.0`,
//! `@1.0.0:`, `@:1.1`, `@1.0:1.1`. Named refs match only by label;
//! range bounds compare numerically.

use crate::error::{Error, Result};
use semver::Version;
use std::fmt;

/// Git ref a release builds from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRef {
    Branch(String),
    Tag(String),
}

impl GitRef {
    /// The ref name itself, without the kind
    pub fn name(&self) -> &str {
        match self {
            Self::Branch(name) | Self::Tag(name) => name,
        }
    }
}

impl fmt::Display for GitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(name) => write!(f, "branch '{}'", name),
            Self::Tag(name) => write!(f, "tag '{}'", name),
        }
    }
}

/// One buildable release a recipe declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecl {
    /// Label users select the release by, e.g. "1.1-dev"
    pub label: String,
    pub git_ref: GitRef,
    /// Whether submodules are checked out alongside
    pub submodules: bool,
    /// Marks the release picked when none is requested
    pub default: bool,
}

impl ReleaseDecl {
    /// Declare a release tracking a branch
    pub fn branch(label: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            git_ref: GitRef::Branch(branch.into()),
            submodules: false,
            default: false,
        }
    }

    /// Declare a release pinned to a tag
    pub fn tag(label: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            git_ref: GitRef::Tag(tag.into()),
            submodules: false,
            default: false,
        }
    }

    /// Check out submodules alongside the ref
    pub fn with_submodules(mut self) -> Self {
        self.submodules = true;
        self
    }

    /// Mark this release as the default selection
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// The release label as a comparable version
    pub fn version(&self) -> ReleaseVersion {
        ReleaseVersion::new(&self.label)
    }
}

/// A release label with numeric normalization for range comparison
///
/// Labels that lead with digits normalize to major.minor.patch the way
/// loose package versions usually do ("1.1-dev" compares as 1.1.0).
/// Labels that do not ("master") stay named and never satisfy a
/// numeric bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    pub label: String,
}

impl ReleaseVersion {
    /// Wrap a release label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Normalize to a semver::Version, when the label is numeric
    fn to_semver(&self) -> Option<Version> {
        if let Ok(v) = Version::parse(&self.label) {
            return Some(v);
        }

        // Strip a suffix like "-dev" and pad missing components
        let numeric = self
            .label
            .split(|c: char| c == '-' || c == '_' || c == '+')
            .next()
            .unwrap_or("");
        let parts: Vec<&str> = numeric.split('.').collect();
        let major = parts.first().and_then(|s| s.parse::<u64>().ok())?;
        let minor = parts.get(1).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
        let patch = parts.get(2).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);

        Some(Version::new(major, minor, patch))
    }

    /// True for labels with no leading numeric component
    pub fn is_named(&self) -> bool {
        self.to_semver().is_none()
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Release selector in Spack `@` notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelector {
    /// Matches every release (`@:`)
    Any,
    /// Matches one release by label (`@master`, `@1.0.0`)
    Exact(ReleaseVersion),
    /// Matches numeric releases at or above the bound (`@1.0:`)
    AtLeast(ReleaseVersion),
    /// Matches numeric releases at or below the bound (`@:1.1`)
    AtMost(ReleaseVersion),
    /// Matches numeric releases inside the inclusive range (`@1.0:1.1`)
    Between(ReleaseVersion, ReleaseVersion),
}

impl VersionSelector {
    /// Parse a selector, with or without the leading `@`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let body = s.strip_prefix('@').unwrap_or(s);
        if body.is_empty() {
            return Ok(Self::Any);
        }

        match body.split_once(':') {
            None => Ok(Self::Exact(ReleaseVersion::new(body))),
            Some(("", "")) => Ok(Self::Any),
            Some((lo, "")) => Ok(Self::AtLeast(ReleaseVersion::new(lo))),
            Some(("", hi)) => Ok(Self::AtMost(ReleaseVersion::new(hi))),
            Some((lo, hi)) => {
                if lo.contains(':') || hi.contains(':') {
                    return Err(Error::ParseError(format!(
                        "Malformed version selector '{}'",
                        s
                    )));
                }
                Ok(Self::Between(
                    ReleaseVersion::new(lo),
                    ReleaseVersion::new(hi),
                ))
            }
        }
    }

    /// Check whether a release version satisfies this selector
    pub fn matches(&self, version: &ReleaseVersion) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(v) => v.label == version.label,
            Self::AtLeast(bound) => match (version.to_semver(), bound.to_semver()) {
                (Some(v), Some(b)) => v >= b,
                _ => false,
            },
            Self::AtMost(bound) => match (version.to_semver(), bound.to_semver()) {
                (Some(v), Some(b)) => v <= b,
                _ => false,
            },
            Self::Between(lo, hi) => match (version.to_semver(), lo.to_semver(), hi.to_semver()) {
                (Some(v), Some(lo), Some(hi)) => v >= lo && v <= hi,
                _ => false,
            },
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "@:"),
            Self::Exact(v) => write!(f, "@{}", v),
            Self::AtLeast(v) => write!(f, "@{}:", v),
            Self::AtMost(v) => write!(f, "@:{}", v),
            Self::Between(lo, hi) => write!(f, "@{}:{}", lo, hi),
        }
    }
}

/// A patch file applied to matching releases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchDecl {
    /// Patch file name, relative to the recipe
    pub file: String,
    pub when: VersionSelector,
}

impl PatchDecl {
    /// Declare a patch gated by a version selector
    pub fn new(file: impl Into<String>, when: VersionSelector) -> Self {
        Self {
            file: file.into(),
            when,
        }
    }
}
