// src/docs/mod.rs

//! Documentation build configuration
//!
//! Everything the Amanzi manual build needs, assembled from
//! version-control state and a pair of environment toggles into one
//! serializable record: the extension list, the derived version stamp,
//! and the per-format output descriptors.
//!
//! Assembly is one-shot and deterministic given fixed external inputs.
//! The only side effects are the git queries and the environment reads;
//! nothing is cached or persisted between runs.

mod config;
mod extensions;
mod gitinfo;
mod output;
mod version;

pub use config::{
    mathjax_path, todos_enabled, DocConfig, EnvSettings, INCLUDE_TODOS_VAR, MATHJAX_SSL_URL,
    MATHJAX_SSL_VAR,
};
pub use extensions::{
    assemble_extensions, CORE_EXTENSIONS, NOTEBOOK_EXTENSIONS, PLOTTING_EXTENSIONS,
    PROJECT_EXTENSIONS,
};
pub use gitinfo::{is_git_available, GitQuery, RepoInfo};
pub use output::{HtmlOptions, LatexDocument, LatexOptions, ManPage, TexinfoDocument, AUTHORS};
pub use version::{derive_version, RELEASE_TAG_PATTERN, RELEASE_TAG_PREFIX};
