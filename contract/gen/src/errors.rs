//! Error types for the contract generator.

use thiserror::Error;

/// Errors that can occur while generating the contract module.
///
/// Configuration variants are fatal: the CLI refuses to synthesize
/// anything without a project root, a config block, and a scope.
/// Acquisition and write errors are surfaced to the caller; the core
/// never exits the process itself.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No project manifest found walking up from the invocation directory
    #[error("no Cargo.toml found in '{start}' or any parent directory")]
    ProjectRootNotFound {
        /// Directory the ancestor walk started from.
        start: String,
    },

    /// Failed to read the project manifest
    #[error("failed to read project manifest '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest exists but is not valid TOML, or the api-types block is malformed
    #[error("invalid config in '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// Manifest has no `[package.metadata.api-types]` block
    #[error(
        "missing [package.metadata.api-types] block in '{path}'; expected api_prefix, assets_prefix, base_url, client_path, secret and an optional scope"
    )]
    MissingConfigBlock { path: String },

    /// No scope from the CLI and none configured
    #[error("no scope given: pass --scope or set `scope` in [package.metadata.api-types]")]
    MissingScope,

    /// Descriptor or support-bundle acquisition failed.
    ///
    /// The message is derived from the server's error payload via
    /// [`crate::acquire::extract_api_error`], falling back to the
    /// transport error text.
    #[error("acquisition failed: {0}")]
    Acquire(String),

    /// Generated artifact failed the opt-in syntax check
    #[error("generated contract is invalid: {0}")]
    CodeGen(String),

    /// Failed to write an output file
    #[error("failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
