// src/recipe/mod.rs

//! Package recipe resolution
//!
//! A recipe declares everything the external package manager and build
//! orchestrator need to know about building a package from source:
//! - Buildable releases, pinned to git refs
//! - Variants (build-time switches and selectors) with defaults
//! - Guarded dependency declarations
//! - Conflict rules between variant settings
//! - Patches gated by version selectors
//! - An ordered decision table deriving the CMake flag list
//!
//! Resolution is pure bookkeeping: requested variant tokens are layered
//! over declared defaults, validated against domains and conflict rules,
//! and only then used to filter dependencies and derive build flags.
//! Nothing is fetched, installed, or executed here.
//!
//! # Example Recipe
//!
//! ```toml
//! [package]
//! name = "amanzi"
//! description = "Parallel flow and reactive transport simulator"
//! homepage = "http://www.amanzi.github.io"
//!
//! [[releases]]
//! label = "master"
//! branch = "master"
//! submodules = true
//! default = true
//!
//! [[variants]]
//! name = "alquimia"
//! description = "Enable geochemistry through Alquimia"
//! default = false
//!
//! [[depends]]
//! spec = "petsc@3.10.2"
//! when = "+alquimia"
//!
//! [[conflicts]]
//! spec = "+crunchtope"
//! when = "~alquimia"
//! message = "+crunchtope needs +alquimia"
//!
//! [[options]]
//! label = "alquimia"
//! when = "+alquimia"
//! then = ["-DENABLE_ALQUIMIA=ON"]
//! else = ["-DENABLE_ALQUIMIA=OFF"]
//! ```

mod assignment;
mod builtin;
mod conflicts;
mod depends;
mod format;
mod options;
pub mod parser;
mod predicate;
mod release;
mod toolchain;
mod variant;

pub use assignment::VariantAssignment;
pub use builtin::amanzi;
pub use conflicts::{ConflictRule, validate_conflicts};
pub use depends::{DependencyDecl, DependencyKind, dependencies_for};
pub use format::RecipeFile;
pub use options::{BuildContext, OptionDecision, derive_flags};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe};
pub use predicate::Predicate;
pub use release::{GitRef, PatchDecl, ReleaseDecl, ReleaseVersion, VersionSelector};
pub use toolchain::Toolchain;
pub use variant::{VariantDecl, VariantDomain, VariantRequest, VariantValue};

use crate::error::Result;

/// A fully assembled package recipe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub homepage: Option<String>,
    /// Upstream git URL releases are fetched from
    pub git: Option<String>,
    pub maintainers: Vec<String>,
    pub releases: Vec<ReleaseDecl>,
    pub variants: Vec<VariantDecl>,
    pub dependencies: Vec<DependencyDecl>,
    pub conflicts: Vec<ConflictRule>,
    pub patches: Vec<PatchDecl>,
    /// Ordered decision table the CMake flag list is derived from
    pub options: Vec<OptionDecision>,
}

impl Recipe {
    /// Create an empty recipe with a name and description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Look up a declared variant by name
    pub fn variant(&self, name: &str) -> Option<&VariantDecl> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Look up a declared release by label
    pub fn release(&self, label: &str) -> Option<&ReleaseDecl> {
        self.releases.iter().find(|r| r.label == label)
    }

    /// The release selected when none is requested
    ///
    /// The first declaration marked default wins; without a marker the
    /// first declaration is it.
    pub fn default_release(&self) -> Option<&ReleaseDecl> {
        self.releases
            .iter()
            .find(|r| r.default)
            .or_else(|| self.releases.first())
    }

    /// Resolve requested variant tokens into a validated assignment
    ///
    /// Defaults are filled in first, then overrides applied, then conflict
    /// rules checked. This is the only path commands take to an
    /// assignment, so validation always precedes dependency resolution
    /// and flag derivation.
    pub fn resolve(&self, requests: &[VariantRequest]) -> Result<VariantAssignment> {
        let assignment = VariantAssignment::resolve(&self.variants, requests)?;
        validate_conflicts(&self.conflicts, &assignment)?;
        Ok(assignment)
    }

    /// Dependencies that apply under the given assignment, in declaration order
    pub fn dependencies_for(&self, assignment: &VariantAssignment) -> Vec<&DependencyDecl> {
        dependencies_for(&self.dependencies, assignment)
    }

    /// Derive the ordered CMake flag list for the given assignment
    pub fn cmake_args(
        &self,
        assignment: &VariantAssignment,
        ctx: &BuildContext,
    ) -> Result<Vec<String>> {
        derive_flags(&self.options, assignment, ctx)
    }

    /// Patch files that apply to a release, deduplicated in declaration order
    pub fn patches_for(&self, label: &str) -> Vec<&str> {
        let version = ReleaseVersion::new(label);
        let mut files: Vec<&str> = Vec::new();
        for patch in &self.patches {
            if patch.when.matches(&version) && !files.contains(&patch.file.as_str()) {
                files.push(&patch.file);
            }
        }
        files
    }
}
