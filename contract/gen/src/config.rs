//! Project configuration discovery.
//!
//! The generator is configured from the consuming project's
//! `Cargo.toml`: an ancestor walk from the invocation directory finds
//! the nearest manifest, and its `[package.metadata.api-types]` block
//! supplies the endpoints, secret, and output location:
//!
//! ```toml
//! [package.metadata.api-types]
//! base_url = "https://api.example.com"
//! api_prefix = "api"
//! assets_prefix = "assets"
//! scope = "users"
//! client_path = "src/generated/contract.rs"
//! secret = "dev-secret"
//! ```
//!
//! The resulting [`ProjectConfig`] is immutable, built once at startup
//! and passed by reference into the pipeline; nothing in the core
//! consults ambient global state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::GeneratorError;

/// The `[package.metadata.api-types]` block.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiTypesConfig {
    /// Prefix (under `base_url`) of the description API endpoints.
    pub api_prefix: String,
    /// Prefix (under `base_url`) of the static descriptor maps.
    pub assets_prefix: String,
    /// Server base URL.
    pub base_url: String,
    /// Default scope when none is passed on the command line.
    #[serde(default)]
    pub scope: Option<String>,
    /// Output path of the generated contract, relative to the project root.
    pub client_path: String,
    /// Shared secret sent when requesting the support bundle.
    pub secret: String,
}

/// Immutable per-invocation configuration.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Directory containing the discovered manifest.
    pub root: PathBuf,
    /// Path of the discovered manifest.
    pub manifest_path: PathBuf,
    /// The parsed `api-types` block.
    pub api_types: ApiTypesConfig,
}

impl ProjectConfig {
    /// Discovers and loads configuration starting from `start`.
    ///
    /// Walks ancestor directories for a `Cargo.toml`; fails fast when
    /// the walk tops out or the manifest lacks the
    /// `[package.metadata.api-types]` block.
    pub fn discover(start: &Path) -> Result<Self, GeneratorError> {
        let root = find_project_root(start).ok_or_else(|| GeneratorError::ProjectRootNotFound {
            start: start.display().to_string(),
        })?;
        let manifest_path = root.join("Cargo.toml");

        let raw = fs::read_to_string(&manifest_path).map_err(|e| GeneratorError::ConfigRead {
            path: manifest_path.display().to_string(),
            source: e,
        })?;
        let manifest: toml::Value =
            toml::from_str(&raw).map_err(|e| GeneratorError::ConfigParse {
                path: manifest_path.display().to_string(),
                message: e.to_string(),
            })?;

        let block = manifest
            .get("package")
            .and_then(|p| p.get("metadata"))
            .and_then(|m| m.get("api-types"))
            .cloned()
            .ok_or_else(|| GeneratorError::MissingConfigBlock {
                path: manifest_path.display().to_string(),
            })?;

        let api_types: ApiTypesConfig =
            block.try_into().map_err(|e: toml::de::Error| GeneratorError::ConfigParse {
                path: manifest_path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            root,
            manifest_path,
            api_types,
        })
    }

    /// Resolves the effective scope: an explicit CLI value wins over
    /// the configured default; with neither, synthesis refuses to run.
    ///
    /// An unscoped run would key every literal union on the full,
    /// unbounded path space, so this is fatal rather than best-effort.
    pub fn resolve_scope(&self, cli_scope: Option<String>) -> Result<String, GeneratorError> {
        cli_scope
            .filter(|s| !s.is_empty())
            .or_else(|| self.api_types.scope.clone())
            .filter(|s| !s.is_empty())
            .ok_or(GeneratorError::MissingScope)
    }

    /// Absolute path of the generated contract file.
    pub fn client_path(&self) -> PathBuf {
        self.root.join(&self.api_types.client_path)
    }

    /// Directory the support bundle is extracted into.
    pub fn support_dir(&self) -> PathBuf {
        self.root.join("api-types")
    }
}

/// Searches `start` and its ancestors for a directory containing `Cargo.toml`.
fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = if start.is_file() {
        start.parent()?.to_path_buf()
    } else {
        start.to_path_buf()
    };

    loop {
        if current.join("Cargo.toml").exists() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => break,
        }
    }

    None
}

/// Computes the relative path from `from` (a directory) to `to`.
///
/// Used to emit the `#[path]` import that links the generated contract
/// to the extracted support module, wherever the two land relative to
/// each other.
///
/// ## Examples
///
/// ```
/// use std::path::Path;
/// use contract_gen::config::relative_to;
///
/// let rel = relative_to(Path::new("/proj/src/generated"), Path::new("/proj/api-types"));
/// assert_eq!(rel, Path::new("../../api-types"));
/// ```
/// Computes the `#[path]` value linking the generated contract to the
/// extracted support module. Always uses forward slashes so the
/// artifact stays portable.
pub fn support_import_path(client_path: &Path, extracted: &Path) -> String {
    let from = client_path.parent().unwrap_or(Path::new("."));
    relative_to(from, extracted)
        .to_string_lossy()
        .replace('\\', "/")
}

pub fn relative_to(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}
