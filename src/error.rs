// src/error.rs
//! Central error type shared across the library.

use thiserror::Error;

/// Errors that can occur while resolving recipes or assembling doc configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Recipe, token, or selector parsing failed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// I/O failure while reading or writing files
    #[error("I/O error: {0}")]
    IoError(String),

    /// A version-control query failed
    #[error("Git query failed: {0}")]
    GitError(String),

    /// No release tag matched, so no version string can be derived
    #[error("Version resolution failed: {0}")]
    VersionResolutionError(String),

    /// An assignment referenced a variant the recipe does not declare
    #[error("Unknown variant '{0}'")]
    UnknownVariantError(String),

    /// A variant was set to a value outside its declared domain
    #[error("Invalid value '{value}' for variant '{variant}' (allowed: {allowed})")]
    InvalidVariantValue {
        variant: String,
        value: String,
        allowed: String,
    },

    /// A conflict rule rejected the variant assignment
    #[error("Conflicting variants: {0}")]
    ConflictError(String),

    /// A build-flag template referenced a dependency with no resolved prefix
    #[error("Dependency resolution failed: {0}")]
    DependencyResolutionError(String),

    /// MPI compiler wrappers could not be located
    #[error("Toolchain error: {0}")]
    ToolchainError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
