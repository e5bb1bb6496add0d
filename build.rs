// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: recipe file
fn recipe_arg() -> Arg {
    Arg::new("recipe")
        .short('r')
        .long("recipe")
        .value_name("PATH")
        .help("Recipe file (default: the built-in Amanzi recipe)")
}

/// Common argument: repository directory
fn repo_arg() -> Arg {
    Arg::new("repo")
        .long("repo")
        .value_name("PATH")
        .help("Repository directory to query (default: current directory)")
}

/// Common argument: trailing variant requests
fn variants_arg() -> Arg {
    Arg::new("variants")
        .num_args(0..)
        .help("Variant requests, e.g. +alquimia ~mstk mesh_type=structured")
}

fn build_cli() -> Command {
    Command::new("amanzi-forge")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Amanzi Development Team")
        .about("Doc-build configuration and build recipes for the Amanzi simulator")
        .subcommand_required(false)
        .subcommand(
            Command::new("docs")
                .about("Documentation build configuration")
                .subcommand(
                    Command::new("config")
                        .about("Assemble and emit the full documentation configuration")
                        .arg(repo_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("json")
                                .help("Output format: json or toml"),
                        )
                        .arg(
                            Arg::new("output")
                                .short('o')
                                .long("output")
                                .value_name("PATH")
                                .help("Write to a file instead of stdout"),
                        ),
                )
                .subcommand(
                    Command::new("version")
                        .about("Print the version string derived from release tags")
                        .arg(repo_arg()),
                ),
        )
        .subcommand(
            Command::new("recipe")
                .about("Recipe inspection and build-flag derivation")
                .subcommand(
                    Command::new("show")
                        .about("Show a recipe: releases, variants, dependencies, conflicts")
                        .arg(recipe_arg()),
                )
                .subcommand(
                    Command::new("validate")
                        .about("Validate a recipe and resolve a variant assignment against it")
                        .arg(recipe_arg())
                        .arg(variants_arg()),
                )
                .subcommand(
                    Command::new("deps")
                        .about("List the dependencies selected by a variant assignment")
                        .arg(recipe_arg())
                        .arg(
                            Arg::new("build_only")
                                .long("build-only")
                                .action(clap::ArgAction::SetTrue)
                                .help("Only show build-time dependencies"),
                        )
                        .arg(variants_arg()),
                )
                .subcommand(
                    Command::new("flags")
                        .about("Derive the ordered CMake flag list for a variant assignment")
                        .arg(recipe_arg())
                        .arg(
                            Arg::new("cc")
                                .long("cc")
                                .value_name("PATH")
                                .help("C compiler path"),
                        )
                        .arg(
                            Arg::new("cxx")
                                .long("cxx")
                                .value_name("PATH")
                                .help("C++ compiler path"),
                        )
                        .arg(
                            Arg::new("fc")
                                .long("fc")
                                .value_name("PATH")
                                .help("Fortran compiler path"),
                        )
                        .arg(
                            Arg::new("mpi_prefix")
                                .long("mpi-prefix")
                                .value_name("PATH")
                                .help("MPI installation prefix supplying bin/mpicc and friends"),
                        )
                        .arg(
                            Arg::new("detect")
                                .long("detect")
                                .action(clap::ArgAction::SetTrue)
                                .help("Look up MPI compiler wrappers on PATH"),
                        )
                        .arg(
                            Arg::new("prefixes")
                                .long("prefix")
                                .value_name("PKG=DIR")
                                .action(clap::ArgAction::Append)
                                .help("Resolved install prefix for a dependency (repeatable)"),
                        )
                        .arg(variants_arg()),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell to generate completions for"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("amanzi-forge.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
