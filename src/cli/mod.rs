// src/cli/mod.rs
//! CLI definitions for the amanzi-forge tool
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Contexts:
//! - `docs` - Documentation build configuration (config, version)
//! - `recipe` - Recipe inspection and build-flag derivation
//!   (show, validate, deps, flags)
//! - `completions` - Shell completion generation

use clap::{Parser, Subcommand};

mod docs;
mod recipe;

pub use docs::DocsCommands;
pub use recipe::RecipeCommands;

#[derive(Parser)]
#[command(name = "amanzi-forge")]
#[command(author = "Amanzi Development Team")]
#[command(version)]
#[command(about = "Doc-build configuration and build recipes for the Amanzi simulator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Documentation build configuration
    #[command(subcommand)]
    Docs(DocsCommands),

    /// Recipe inspection and build-flag derivation
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
