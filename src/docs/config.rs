// src/docs/config.rs

//! Assembled documentation configuration
//!
//! Pulls the extension lists, repository state, environment toggles and
//! output descriptors together into one serializable record. The record
//! is rebuilt from scratch on every invocation and never persisted.

use serde::Serialize;

use crate::docs::extensions::assemble_extensions;
use crate::docs::gitinfo::RepoInfo;
use crate::docs::output::{HtmlOptions, LatexOptions, ManPage, TexinfoDocument};
use crate::docs::version::derive_version;
use crate::error::Result;

/// Environment variable controlling todo-note inclusion
pub const INCLUDE_TODOS_VAR: &str = "AMANZI_INCLUDE_TODOS";

/// Environment variable selecting https MathJax delivery
pub const MATHJAX_SSL_VAR: &str = "MATHJAX_SSL";

/// The LANL-hosted MathJax used when https delivery is requested
pub const MATHJAX_SSL_URL: &str =
    "https://software.lanl.gov/ascem/tpls/mathjax/latest/MathJax.js?config=TeX-AMS-MML_HTMLorMML";

/// Raw environment toggles, captured once per invocation
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub include_todos: Option<String>,
    pub mathjax_ssl: Option<String>,
}

impl EnvSettings {
    /// Capture the relevant variables from the process environment
    pub fn from_env() -> Self {
        EnvSettings {
            include_todos: std::env::var(INCLUDE_TODOS_VAR).ok(),
            mathjax_ssl: std::env::var(MATHJAX_SSL_VAR).ok(),
        }
    }

    pub fn todos_enabled(&self) -> bool {
        todos_enabled(self.include_todos.as_deref())
    }

    pub fn mathjax_path(&self) -> Option<String> {
        mathjax_path(self.mathjax_ssl.as_deref()).map(|s| s.to_string())
    }
}

/// Whether todo notes are rendered
///
/// Off only for the exact strings `"0"` and `"False"`; anything else,
/// including an unset variable, leaves them on. No trimming or case
/// folding happens on the way in.
pub fn todos_enabled(value: Option<&str>) -> bool {
    !matches!(value, Some("0") | Some("False"))
}

/// The MathJax path override, if https delivery was requested
pub fn mathjax_path(value: Option<&str>) -> Option<&'static str> {
    match value {
        Some("1") => Some(MATHJAX_SSL_URL),
        _ => None,
    }
}

/// The complete configuration handed to the documentation generator
#[derive(Debug, Clone, Serialize)]
pub struct DocConfig {
    pub project: String,
    pub copyright: String,
    pub master_doc: String,
    pub source_suffix: String,
    pub templates_path: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub pygments_style: String,
    pub extensions: Vec<String>,
    pub branch: String,
    pub commit: String,
    pub version: String,
    pub release: String,
    pub include_todos: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mathjax_path: Option<String>,
    pub html: HtmlOptions,
    pub latex: LatexOptions,
    pub man: ManPage,
    pub texinfo: TexinfoDocument,
}

impl DocConfig {
    /// Assemble the configuration from repository state and environment
    /// toggles
    ///
    /// Fails when no release tag exists; no default version is ever
    /// substituted.
    pub fn assemble(repo: &RepoInfo, env: &EnvSettings) -> Result<Self> {
        let version = derive_version(&repo.tags)?;

        Ok(DocConfig {
            project: "Amanzi".to_string(),
            copyright: "2016, Amanzi Development Team".to_string(),
            master_doc: "index".to_string(),
            source_suffix: ".rst".to_string(),
            templates_path: vec!["_templates".to_string()],
            exclude_patterns: ["_build", "testing", "prototype", "viz"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pygments_style: "sphinx".to_string(),
            extensions: assemble_extensions(),
            branch: repo.branch.clone(),
            commit: repo.commit.clone(),
            version: version.clone(),
            release: version,
            include_todos: env.todos_enabled(),
            mathjax_path: env.mathjax_path(),
            html: HtmlOptions::default(),
            latex: LatexOptions::default(),
            man: ManPage::default(),
            texinfo: TexinfoDocument::default(),
        })
    }
}
