// src/commands/recipe.rs

//! Recipe inspection CLI commands
//!
//! Commands for showing recipes, validating variant assignments, and
//! deriving dependency sets and CMake flag lists.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use amanzi_forge::recipe::{
    amanzi, parse_recipe_file, validate_recipe, BuildContext, DependencyKind, Predicate, Recipe,
    Toolchain, VariantRequest,
};

fn load_recipe(path: Option<&str>) -> Result<Recipe> {
    match path {
        Some(file) => parse_recipe_file(Path::new(file))
            .with_context(|| format!("Failed to load recipe {}", file)),
        None => Ok(amanzi()),
    }
}

fn parse_requests(tokens: &[String]) -> Result<Vec<VariantRequest>> {
    let mut requests = Vec::new();
    for token in tokens {
        requests.push(VariantRequest::parse(token)?);
    }
    Ok(requests)
}

/// Show a recipe's declarations
pub fn cmd_recipe_show(recipe_path: Option<&str>) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    println!("{} - {}", recipe.name, recipe.description);
    if let Some(homepage) = &recipe.homepage {
        println!("  Homepage: {}", homepage);
    }
    if let Some(git) = &recipe.git {
        println!("  Git: {}", git);
    }
    if !recipe.maintainers.is_empty() {
        println!("  Maintainers: {}", recipe.maintainers.join(", "));
    }

    if !recipe.releases.is_empty() {
        println!();
        println!("Releases ({}):", recipe.releases.len());
        for release in &recipe.releases {
            let marker = if release.default { "*" } else { " " };
            let submodules = if release.submodules { ", submodules" } else { "" };
            println!(
                "  {} {} ({}{})",
                marker, release.label, release.git_ref, submodules
            );
        }
    }

    println!();
    println!("Variants ({}):", recipe.variants.len());
    for variant in &recipe.variants {
        println!(
            "  {:<14} default {:<14} {}",
            variant.name,
            variant.domain.default_value().to_string(),
            variant.description
        );
    }

    println!();
    println!("Dependencies ({}):", recipe.dependencies.len());
    for dep in &recipe.dependencies {
        let mut line = format!("  {}", dep.spec_string());
        if dep.kind == DependencyKind::Build {
            line.push_str(" [build]");
        }
        if dep.when != Predicate::Always {
            line.push_str(&format!("  when {}", dep.when));
        }
        println!("{}", line);
    }

    if !recipe.conflicts.is_empty() {
        println!();
        println!("Conflicts:");
        for rule in &recipe.conflicts {
            println!("  {}", rule);
        }
    }

    Ok(())
}

/// Validate a recipe and resolve a variant assignment against it
pub fn cmd_recipe_validate(recipe_path: Option<&str>, variants: &[String]) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    let warnings = validate_recipe(&recipe)?;
    for warning in &warnings {
        println!("warning: {}", warning);
    }

    let requests = parse_requests(variants)?;
    let assignment = recipe.resolve(&requests)?;

    println!("{} {}", recipe.name, assignment.spec_string());
    if warnings.is_empty() {
        println!("Recipe and assignment are valid.");
    } else {
        println!("Assignment is valid; {} warning(s) above.", warnings.len());
    }
    Ok(())
}

/// List the dependencies selected by a variant assignment
pub fn cmd_recipe_deps(
    recipe_path: Option<&str>,
    variants: &[String],
    build_only: bool,
) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;
    let requests = parse_requests(variants)?;
    let assignment = recipe.resolve(&requests)?;

    info!("Resolved assignment: {}", assignment.spec_string());

    let mut selected = recipe.dependencies_for(&assignment);
    if build_only {
        selected.retain(|dep| dep.kind == DependencyKind::Build);
    }

    println!(
        "Dependencies for {} {} ({}):",
        recipe.name,
        assignment.spec_string(),
        selected.len()
    );
    for dep in selected {
        let kind = if dep.kind == DependencyKind::Build {
            " [build]"
        } else {
            ""
        };
        println!("  {}{}", dep.spec_string(), kind);
    }
    Ok(())
}

fn resolve_toolchain(
    cc: Option<&str>,
    cxx: Option<&str>,
    fc: Option<&str>,
    mpi_prefix: Option<&str>,
    detect: bool,
) -> Result<Toolchain> {
    if let (Some(cc), Some(cxx), Some(fc)) = (cc, cxx, fc) {
        return Ok(Toolchain::new(cc, cxx, fc));
    }
    if let Some(prefix) = mpi_prefix {
        return Ok(Toolchain::from_mpi_prefix(Path::new(prefix)));
    }
    if detect {
        return Ok(Toolchain::detect()?);
    }
    Err(anyhow::anyhow!(
        "No toolchain given. Use --cc/--cxx/--fc together, --mpi-prefix, or --detect"
    ))
}

fn apply_prefixes(mut context: BuildContext, prefixes: &[String]) -> Result<BuildContext> {
    for entry in prefixes {
        let (package, dir) = entry
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Invalid --prefix '{}'. Expected PKG=DIR", entry))?;
        context = context.with_prefix(package, dir);
    }
    Ok(context)
}

/// Derive the ordered CMake flag list for a variant assignment
#[allow(clippy::too_many_arguments)]
pub fn cmd_recipe_flags(
    recipe_path: Option<&str>,
    variants: &[String],
    cc: Option<&str>,
    cxx: Option<&str>,
    fc: Option<&str>,
    mpi_prefix: Option<&str>,
    detect: bool,
    prefixes: &[String],
) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;
    let requests = parse_requests(variants)?;
    let assignment = recipe.resolve(&requests)?;

    let toolchain = resolve_toolchain(cc, cxx, fc, mpi_prefix, detect)?;
    info!("Deriving flags for {}", assignment.spec_string());

    let context = apply_prefixes(BuildContext::new().with_toolchain(toolchain), prefixes)?;

    let flags = recipe.cmake_args(&assignment, &context)?;
    for flag in flags {
        println!("{}", flag);
    }
    Ok(())
}
