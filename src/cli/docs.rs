// src/cli/docs.rs
//! Documentation build configuration commands

use clap::Subcommand;

#[derive(Subcommand)]
pub enum DocsCommands {
    /// Assemble and emit the full documentation configuration
    Config {
        /// Repository directory to query (default: current directory)
        #[arg(long)]
        repo: Option<String>,

        /// Output format: json or toml
        #[arg(long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the version string derived from release tags
    Version {
        /// Repository directory to query (default: current directory)
        #[arg(long)]
        repo: Option<String>,
    },
}
