// src/recipe/format.rs
//! On-disk recipe format
//!
//! The TOML layer is kept separate from the runtime types: everything in
//! here is plain data with serde derives, and `into_recipe` /
//! `from_recipe` do the translation. Guard strings stay strings until
//! conversion so a recipe file round-trips byte-for-byte through serde.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::recipe::{
    ConflictRule, DependencyDecl, DependencyKind, GitRef, OptionDecision, PatchDecl, Predicate,
    Recipe, ReleaseDecl, VariantDecl, VariantDomain, VersionSelector,
};

/// A recipe file as written on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeFile {
    pub package: PackageSection,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub releases: Vec<ReleaseEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<DependEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<ConflictEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<PatchEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageSection {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<String>,
}

/// One `[[releases]]` entry; exactly one of `branch` / `tag` must be set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub submodules: bool,
    #[serde(default)]
    pub default: bool,
}

/// One `[[variants]]` entry
///
/// A `values` list makes the variant a selector; without one it is an
/// on/off switch and `default` must be a boolean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    pub default: DefaultEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultEntry {
    Switch(bool),
    Choice(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependEntry {
    pub spec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub spec: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchEntry {
    pub file: String,
    #[serde(default)]
    pub when: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub then: Vec<String>,
    #[serde(default, rename = "else", skip_serializing_if = "Vec::is_empty")]
    pub r#else: Vec<String>,
}

impl RecipeFile {
    /// Translate the raw file into runtime declarations
    pub fn into_recipe(self) -> Result<Recipe> {
        let mut recipe = Recipe::new(self.package.name, self.package.description);
        recipe.homepage = self.package.homepage;
        recipe.git = self.package.git;
        recipe.maintainers = self.package.maintainers;

        for entry in self.releases {
            let git_ref = match (entry.branch, entry.tag) {
                (Some(branch), None) => GitRef::Branch(branch),
                (None, Some(tag)) => GitRef::Tag(tag),
                (Some(_), Some(_)) => {
                    return Err(Error::ParseError(format!(
                        "Release '{}' sets both branch and tag",
                        entry.label
                    )));
                }
                (None, None) => {
                    return Err(Error::ParseError(format!(
                        "Release '{}' sets neither branch nor tag",
                        entry.label
                    )));
                }
            };
            recipe.releases.push(ReleaseDecl {
                label: entry.label,
                git_ref,
                submodules: entry.submodules,
                default: entry.default,
            });
        }

        for entry in self.variants {
            let domain = match (entry.values, entry.default) {
                (Some(values), DefaultEntry::Choice(default)) => {
                    VariantDomain::Selector { values, default }
                }
                (Some(_), DefaultEntry::Switch(_)) => {
                    return Err(Error::ParseError(format!(
                        "Variant '{}' lists values but has a boolean default",
                        entry.name
                    )));
                }
                (None, DefaultEntry::Switch(default)) => VariantDomain::Switch { default },
                (None, DefaultEntry::Choice(_)) => {
                    return Err(Error::ParseError(format!(
                        "Variant '{}' has a string default but no values list",
                        entry.name
                    )));
                }
            };
            recipe.variants.push(VariantDecl {
                name: entry.name,
                description: entry.description,
                domain,
            });
        }

        for entry in self.depends {
            let mut decl = DependencyDecl::parse(&entry.spec)?;
            decl.when = parse_guard(entry.when.as_deref())?;
            if let Some(kind) = entry.kind.as_deref() {
                decl.kind = DependencyKind::parse(kind)?;
            }
            recipe.dependencies.push(decl);
        }

        for entry in self.conflicts {
            recipe.conflicts.push(ConflictRule::new(
                Predicate::parse(&entry.spec)?,
                parse_guard(entry.when.as_deref())?,
                entry.message,
            ));
        }

        for entry in self.patches {
            recipe.patches.push(PatchDecl::new(
                entry.file,
                VersionSelector::parse(&entry.when)?,
            ));
        }

        for (index, entry) in self.options.into_iter().enumerate() {
            let label = entry
                .label
                .unwrap_or_else(|| format!("option-{}", index + 1));
            let mut decision = OptionDecision::new(label, parse_guard(entry.when.as_deref())?);
            decision.then_flags = entry.then;
            decision.else_flags = entry.r#else;
            recipe.options.push(decision);
        }

        Ok(recipe)
    }

    /// Build the on-disk form of a recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        RecipeFile {
            package: PackageSection {
                name: recipe.name.clone(),
                description: recipe.description.clone(),
                homepage: recipe.homepage.clone(),
                git: recipe.git.clone(),
                maintainers: recipe.maintainers.clone(),
            },
            releases: recipe
                .releases
                .iter()
                .map(|release| {
                    let (branch, tag) = match &release.git_ref {
                        GitRef::Branch(name) => (Some(name.clone()), None),
                        GitRef::Tag(name) => (None, Some(name.clone())),
                    };
                    ReleaseEntry {
                        label: release.label.clone(),
                        branch,
                        tag,
                        submodules: release.submodules,
                        default: release.default,
                    }
                })
                .collect(),
            variants: recipe
                .variants
                .iter()
                .map(|variant| {
                    let (values, default) = match &variant.domain {
                        VariantDomain::Switch { default } => (None, DefaultEntry::Switch(*default)),
                        VariantDomain::Selector { values, default } => {
                            (Some(values.clone()), DefaultEntry::Choice(default.clone()))
                        }
                    };
                    VariantEntry {
                        name: variant.name.clone(),
                        description: variant.description.clone(),
                        values,
                        default,
                    }
                })
                .collect(),
            depends: recipe
                .dependencies
                .iter()
                .map(|dep| DependEntry {
                    spec: dep.spec_string(),
                    when: serialize_guard(&dep.when),
                    kind: match dep.kind {
                        DependencyKind::Link => None,
                        kind => Some(kind.as_str().to_string()),
                    },
                })
                .collect(),
            conflicts: recipe
                .conflicts
                .iter()
                .map(|rule| ConflictEntry {
                    spec: rule.spec.to_string(),
                    when: serialize_guard(&rule.when),
                    message: rule.message.clone(),
                })
                .collect(),
            patches: recipe
                .patches
                .iter()
                .map(|patch| PatchEntry {
                    file: patch.file.clone(),
                    when: patch.when.to_string(),
                })
                .collect(),
            options: recipe
                .options
                .iter()
                .map(|decision| OptionEntry {
                    label: Some(decision.label.clone()),
                    when: serialize_guard(&decision.when),
                    then: decision.then_flags.clone(),
                    r#else: decision.else_flags.clone(),
                })
                .collect(),
        }
    }
}

fn parse_guard(when: Option<&str>) -> Result<Predicate> {
    match when {
        Some(text) => Predicate::parse(text),
        None => Ok(Predicate::Always),
    }
}

fn serialize_guard(predicate: &Predicate) -> Option<String> {
    match predicate {
        Predicate::Always => None,
        other => Some(other.to_string()),
    }
}
