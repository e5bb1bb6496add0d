// src/recipe/parser.rs

//! Recipe file parsing

use crate::error::{Error, Result};
use crate::recipe::format::RecipeFile;
use crate::recipe::{Predicate, Recipe, VariantDomain};
use std::collections::HashSet;
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<Recipe> {
    let file: RecipeFile = toml::from_str(content)
        .map_err(|e| Error::ParseError(format!("Invalid recipe: {}", e)))?;
    file.into_recipe()
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read recipe file: {}", e)))?;

    parse_recipe(&content)
}

/// Validate a recipe for completeness and correctness
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    // Check for empty name
    if recipe.name.is_empty() {
        return Err(Error::ParseError(
            "Recipe package name cannot be empty".to_string(),
        ));
    }

    // Variant declarations must be coherent before anything can resolve
    let mut seen = HashSet::new();
    for variant in &recipe.variants {
        if !seen.insert(variant.name.as_str()) {
            return Err(Error::ParseError(format!(
                "Variant '{}' is declared twice",
                variant.name
            )));
        }
        if let VariantDomain::Selector { values, default } = &variant.domain {
            if values.is_empty() {
                return Err(Error::ParseError(format!(
                    "Variant '{}' has an empty values list",
                    variant.name
                )));
            }
            if !values.contains(default) {
                return Err(Error::ParseError(format!(
                    "Variant '{}' defaults to '{}' which is not among its values",
                    variant.name, default
                )));
            }
        }
    }

    // Warn about missing fields
    if recipe.description.is_empty() {
        warnings.push("Missing package description".to_string());
    }
    if recipe.releases.is_empty() {
        warnings.push("No releases declared".to_string());
    }
    if recipe.releases.iter().filter(|r| r.default).count() > 1 {
        warnings.push("More than one release is marked default".to_string());
    }

    // Guards naming unknown variants never fire; almost always a typo
    for (context, predicate) in guard_sites(recipe) {
        for name in predicate.variant_names() {
            if !seen.contains(name) {
                warnings.push(format!(
                    "{} references undeclared variant '{}'",
                    context, name
                ));
            }
        }
    }

    // A conflict with no condition on either side fires unconditionally
    for rule in &recipe.conflicts {
        if rule.spec == Predicate::Always && rule.when == Predicate::Always {
            warnings.push(format!("Conflict '{}' always fires", rule.message));
        }
    }

    Ok(warnings)
}

fn guard_sites(recipe: &Recipe) -> Vec<(String, &Predicate)> {
    let mut sites = Vec::new();
    for dep in &recipe.dependencies {
        sites.push((format!("Dependency '{}'", dep.package), &dep.when));
    }
    for rule in &recipe.conflicts {
        sites.push((format!("Conflict '{}'", rule.message), &rule.spec));
        sites.push((format!("Conflict '{}'", rule.message), &rule.when));
    }
    for decision in &recipe.options {
        sites.push((format!("Option '{}'", decision.label), &decision.when));
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_recipe() {
        let content = r#"
[package]
name = "amanzi"
description = "Flow and reactive transport simulator"

[[releases]]
label = "master"
branch = "master"
default = true

[[variants]]
name = "hypre"
default = true
"#;

        let recipe = parse_recipe(content).unwrap();
        assert_eq!(recipe.name, "amanzi");
        assert_eq!(recipe.releases.len(), 1);
    }

    #[test]
    fn test_parse_invalid_recipe() {
        let content = "this is not valid toml at all {}";
        assert!(parse_recipe(content).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let recipe = parse_recipe("[package]\nname = \"\"\n").unwrap();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_duplicate_variant() {
        let content = r#"
[package]
name = "amanzi"

[[variants]]
name = "hypre"
default = true

[[variants]]
name = "hypre"
default = false
"#;
        let recipe = parse_recipe(content).unwrap();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_default_outside_domain() {
        let content = r#"
[package]
name = "amanzi"

[[variants]]
name = "mesh_type"
values = ["unstructured", "structured"]
default = "cartesian"
"#;
        let recipe = parse_recipe(content).unwrap();
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_warnings() {
        let content = r#"
[package]
name = "amanzi"

[[depends]]
spec = "superlu"
when = "+hypre"
"#;
        let recipe = parse_recipe(content).unwrap();
        let warnings = validate_recipe(&recipe).unwrap();
        assert!(warnings.iter().any(|w| w.contains("description")));
        assert!(warnings.iter().any(|w| w.contains("No releases")));
        assert!(warnings.iter().any(|w| w.contains("undeclared variant 'hypre'")));
    }

    #[test]
    fn test_builtin_recipe_validates_clean() {
        let recipe = crate::recipe::amanzi();
        let warnings = validate_recipe(&recipe).unwrap();
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    }
}
