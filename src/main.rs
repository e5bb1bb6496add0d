// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

mod cli;
mod commands;

use cli::{Cli, Commands, DocsCommands, RecipeCommands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Docs(command)) => match command {
            DocsCommands::Config {
                repo,
                format,
                output,
            } => commands::cmd_docs_config(repo.as_deref(), &format, output.as_deref()),
            DocsCommands::Version { repo } => commands::cmd_docs_version(repo.as_deref()),
        },
        Some(Commands::Recipe(command)) => match command {
            RecipeCommands::Show { recipe } => commands::cmd_recipe_show(recipe.as_deref()),
            RecipeCommands::Validate { recipe, variants } => {
                commands::cmd_recipe_validate(recipe.as_deref(), &variants)
            }
            RecipeCommands::Deps {
                recipe,
                build_only,
                variants,
            } => commands::cmd_recipe_deps(recipe.as_deref(), &variants, build_only),
            RecipeCommands::Flags {
                recipe,
                cc,
                cxx,
                fc,
                mpi_prefix,
                detect,
                prefixes,
                variants,
            } => commands::cmd_recipe_flags(
                recipe.as_deref(),
                &variants,
                cc.as_deref(),
                cxx.as_deref(),
                fc.as_deref(),
                mpi_prefix.as_deref(),
                detect,
                &prefixes,
            ),
        },
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("amanzi-forge v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'amanzi-forge --help' for usage information");
            Ok(())
        }
    }
}
