// src/recipe/depends.rs
//! Guarded dependency declarations
//!
//! Declarations are data for an external package manager: nothing here is
//! fetched or installed. Resolution only filters the list down to the
//! declarations whose guard holds for a given assignment, preserving
//! declaration order.

use crate::error::{Error, Result};
use crate::recipe::assignment::VariantAssignment;
use crate::recipe::predicate::Predicate;
use std::fmt;

/// How a dependency is consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyKind {
    /// Needed only while building
    Build,
    /// Linked into or used by the built artifacts
    #[default]
    Link,
}

impl DependencyKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Link => "link",
        }
    }

    /// Parse a kind from its string form
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "build" => Ok(Self::Build),
            "link" => Ok(Self::Link),
            other => Err(Error::ParseError(format!(
                "Unknown dependency kind '{}'",
                other
            ))),
        }
    }
}

/// One declared dependency, optionally guarded by a variant predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDecl {
    /// Package name the external manager resolves
    pub package: String,
    /// Version/feature constraint in Spack notation, e.g. `@3.15:` or
    /// `@1.59.0: cxxstd=11 +program_options`
    pub constraint: Option<String>,
    /// Guard deciding whether this declaration applies
    pub when: Predicate,
    pub kind: DependencyKind,
}

impl DependencyDecl {
    /// Declare an unguarded link-time dependency
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            constraint: None,
            when: Predicate::Always,
            kind: DependencyKind::Link,
        }
    }

    /// Parse a declaration from a Spack-style spec string
    ///
    /// The package name runs up to the first `@` or whitespace; everything
    /// after it is kept verbatim as the constraint.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(Error::ParseError("Empty dependency spec".to_string()));
        }

        let split_at = spec
            .find(|c: char| c == '@' || c.is_whitespace())
            .unwrap_or(spec.len());
        let (name, rest) = spec.split_at(split_at);
        if name.is_empty() {
            return Err(Error::ParseError(format!(
                "Dependency spec '{}' has no package name",
                spec
            )));
        }

        let constraint = rest.trim_start();
        Ok(Self {
            package: name.to_string(),
            constraint: if constraint.is_empty() {
                None
            } else {
                Some(constraint.to_string())
            },
            when: Predicate::Always,
            kind: DependencyKind::Link,
        })
    }

    /// Set the constraint string
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// Set the guard predicate
    pub fn with_guard(mut self, when: Predicate) -> Self {
        self.when = when;
        self
    }

    /// Set the dependency kind
    pub fn with_kind(mut self, kind: DependencyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Full spec string, name and constraint recombined
    pub fn spec_string(&self) -> String {
        match &self.constraint {
            None => self.package.clone(),
            Some(c) if c.starts_with('@') => format!("{}{}", self.package, c),
            Some(c) => format!("{} {}", self.package, c),
        }
    }
}

impl fmt::Display for DependencyDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec_string())
    }
}

/// Filter declarations down to those whose guard holds
pub fn dependencies_for<'a>(
    decls: &'a [DependencyDecl],
    assignment: &VariantAssignment,
) -> Vec<&'a DependencyDecl> {
    decls.iter().filter(|d| d.when.holds(assignment)).collect()
}
