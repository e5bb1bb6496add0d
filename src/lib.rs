// src/lib.rs

//! Amanzi build scaffolding
//!
//! Tooling around the build of the Amanzi subsurface-flow simulator: a
//! documentation-build configurator and a package-recipe resolver.
//!
//! # Architecture
//!
//! - Declarative recipes: variants, guarded dependencies, conflict rules
//! - Ordered decision tables: CMake flags derive in a fixed, auditable order
//! - One-shot assembly: the doc configuration is rebuilt from git state and
//!   environment toggles on every run, never persisted

pub mod docs;
mod error;
pub mod recipe;

pub use error::{Error, Result};
pub use recipe::{Recipe, VariantAssignment, VariantRequest};
