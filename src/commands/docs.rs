// src/commands/docs.rs

//! Documentation configuration CLI commands
//!
//! Commands for assembling and emitting the documentation build
//! configuration from repository state.

use anyhow::{Context, Result};
use tracing::info;

use amanzi_forge::docs::{derive_version, DocConfig, EnvSettings, GitQuery};

fn query_for(repo: Option<&str>) -> GitQuery {
    match repo {
        Some(dir) => GitQuery::in_dir(dir),
        None => GitQuery::new(),
    }
}

/// Assemble the documentation configuration and emit it
pub fn cmd_docs_config(repo: Option<&str>, format: &str, output: Option<&str>) -> Result<()> {
    let repo_info = query_for(repo).gather()?;
    info!(
        "Repository state: branch {} at {}",
        repo_info.branch, repo_info.commit
    );

    let config = DocConfig::assemble(&repo_info, &EnvSettings::from_env())?;

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&config)?,
        "toml" => toml::to_string_pretty(&config)?,
        other => {
            return Err(anyhow::anyhow!(
                "Unknown output format '{}'. Use json or toml",
                other
            ));
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote documentation configuration to {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Print the version string derived from release tags
pub fn cmd_docs_version(repo: Option<&str>) -> Result<()> {
    let repo_info = query_for(repo).gather()?;
    let version = derive_version(&repo_info.tags)?;
    println!("{}", version);
    Ok(())
}
