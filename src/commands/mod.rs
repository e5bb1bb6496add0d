// src/commands/mod.rs
//! Command handlers for the amanzi-forge CLI

mod docs;
mod recipe;

// Re-export all command handlers
pub use docs::{cmd_docs_config, cmd_docs_version};
pub use recipe::{cmd_recipe_deps, cmd_recipe_flags, cmd_recipe_show, cmd_recipe_validate};
