// src/recipe/options.rs
//! Build-option derivation
//!
//! Options form an ordered decision table. Each row evaluates its guard
//! against the resolved assignment and selects one of two flag-template
//! arms; the table is walked top to bottom and the selected arms are
//! concatenated. Output order is contractual: the build system lets a
//! later flag override an earlier one.
//!
//! Flag templates may contain `%(cc)s`, `%(cxx)s`, `%(fc)s`, and
//! `%(prefix:<package>)s` placeholders, filled in from the build context
//! at derivation time.

use crate::error::{Error, Result};
use crate::recipe::assignment::VariantAssignment;
use crate::recipe::predicate::Predicate;
use crate::recipe::toolchain::Toolchain;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One row of the decision table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDecision {
    /// Short label naming the switch this row covers
    pub label: String,
    pub when: Predicate,
    /// Flag templates appended when the guard holds
    pub then_flags: Vec<String>,
    /// Flag templates appended otherwise
    pub else_flags: Vec<String>,
}

impl OptionDecision {
    /// Create a guarded row with empty arms
    pub fn new(label: impl Into<String>, when: Predicate) -> Self {
        Self {
            label: label.into(),
            when,
            then_flags: Vec::new(),
            else_flags: Vec::new(),
        }
    }

    /// Create an unguarded row; only its `then` arm is ever selected
    pub fn always(label: impl Into<String>) -> Self {
        Self::new(label, Predicate::Always)
    }

    /// Set the flags emitted when the guard holds
    pub fn then(mut self, flags: &[&str]) -> Self {
        self.then_flags = flags.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the flags emitted when the guard does not hold
    pub fn otherwise(mut self, flags: &[&str]) -> Self {
        self.else_flags = flags.iter().map(|f| f.to_string()).collect();
        self
    }
}

/// Resolved paths flag templates substitute from
///
/// Supplied by the external build orchestrator: the MPI toolchain plus an
/// install prefix per dependency package.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub toolchain: Option<Toolchain>,
    prefixes: BTreeMap<String, PathBuf>,
}

impl BuildContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the MPI toolchain
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = Some(toolchain);
        self
    }

    /// Record the install prefix for a dependency package
    pub fn with_prefix(mut self, package: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.prefixes.insert(package.into(), path.into());
        self
    }

    /// Look up a recorded prefix
    pub fn prefix(&self, package: &str) -> Option<&Path> {
        self.prefixes.get(package).map(|p| p.as_path())
    }

    /// Substitute every placeholder in a flag template
    ///
    /// A placeholder with no value behind it is an error, never an empty
    /// string: a half-rendered flag would silently misconfigure the build.
    pub fn substitute(&self, template: &str) -> Result<String> {
        let mut result = template.to_string();

        if let Some(tc) = &self.toolchain {
            result = result.replace("%(cc)s", &tc.cc.display().to_string());
            result = result.replace("%(cxx)s", &tc.cxx.display().to_string());
            result = result.replace("%(fc)s", &tc.fc.display().to_string());
        }

        for (package, path) in &self.prefixes {
            result = result.replace(
                &format!("%(prefix:{})s", package),
                &path.display().to_string(),
            );
        }

        if let Some(start) = result.find("%(") {
            let tail = &result[start + 2..];
            let key = tail.split(")s").next().unwrap_or(tail);
            return Err(if let Some(package) = key.strip_prefix("prefix:") {
                Error::DependencyResolutionError(format!(
                    "No resolved prefix for '{}' (needed by '{}')",
                    package, template
                ))
            } else if matches!(key, "cc" | "cxx" | "fc") {
                Error::ToolchainError(format!(
                    "No toolchain supplied for '%({})s' (needed by '{}')",
                    key, template
                ))
            } else {
                Error::ParseError(format!(
                    "Unknown placeholder '%({})s' in '{}'",
                    key, template
                ))
            });
        }

        Ok(result)
    }
}

/// Walk the decision table in order and render the selected flags
///
/// The same table, assignment, and context always produce the identical
/// flag list.
pub fn derive_flags(
    table: &[OptionDecision],
    assignment: &VariantAssignment,
    ctx: &BuildContext,
) -> Result<Vec<String>> {
    let mut flags = Vec::new();
    for decision in table {
        let arm = if decision.when.holds(assignment) {
            &decision.then_flags
        } else {
            &decision.else_flags
        };
        for template in arm {
            flags.push(ctx.substitute(template)?);
        }
    }
    Ok(flags)
}
