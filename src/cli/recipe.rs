// src/cli/recipe.rs
//! Recipe inspection and build-flag derivation commands

use clap::Subcommand;

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Show a recipe: releases, variants, dependencies, conflicts
    Show {
        /// Recipe file (default: the built-in Amanzi recipe)
        #[arg(short, long)]
        recipe: Option<String>,
    },

    /// Validate a recipe and resolve a variant assignment against it
    Validate {
        /// Recipe file (default: the built-in Amanzi recipe)
        #[arg(short, long)]
        recipe: Option<String>,

        /// Variant requests, e.g. +alquimia ~mstk mesh_type=structured
        variants: Vec<String>,
    },

    /// List the dependencies selected by a variant assignment
    Deps {
        /// Recipe file (default: the built-in Amanzi recipe)
        #[arg(short, long)]
        recipe: Option<String>,

        /// Only show build-time dependencies
        #[arg(long)]
        build_only: bool,

        /// Variant requests, e.g. +alquimia ~mstk mesh_type=structured
        variants: Vec<String>,
    },

    /// Derive the ordered CMake flag list for a variant assignment
    Flags {
        /// Recipe file (default: the built-in Amanzi recipe)
        #[arg(short, long)]
        recipe: Option<String>,

        /// C compiler path
        #[arg(long)]
        cc: Option<String>,

        /// C++ compiler path
        #[arg(long)]
        cxx: Option<String>,

        /// Fortran compiler path
        #[arg(long)]
        fc: Option<String>,

        /// MPI installation prefix supplying bin/mpicc and friends
        #[arg(long)]
        mpi_prefix: Option<String>,

        /// Look up MPI compiler wrappers on PATH
        #[arg(long)]
        detect: bool,

        /// Resolved install prefix for a dependency (repeatable)
        #[arg(long = "prefix", value_name = "PKG=DIR")]
        prefixes: Vec<String>,

        /// Variant requests, e.g. +alquimia ~mstk mesh_type=structured
        variants: Vec<String>,
    },
}
