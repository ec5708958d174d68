//! Runtime configuration for folio.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FOLIO_ORIGIN, FOLIO_CONTENT_ROOT,
//!    FOLIO_CATALOG_INDEX, FOLIO_PROFILE)
//! 2. Config file (folio.yaml, searched in the current directory and parents)
//! 3. Defaults (content root "blog-entries", catalog index
//!    "catalog-index.json", profile ~/.folio/profile.yaml when present)
//!
//! Relative paths in the config file resolve against the file's directory.
//! The origin has no default; commands that touch the network fail with a
//! clear error when it is unresolved.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{DEFAULT_CATALOG_INDEX, DEFAULT_CONTENT_ROOT};

/// Raw config file schema (matches the YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Base origin of the static store, e.g. https://name.github.io
    pub origin: Option<String>,

    /// Directory under the origin holding the catalog and body files
    pub content_root: Option<String>,

    /// File name of the catalog index under the content root
    pub catalog_index: Option<String>,

    /// Path to the profile YAML (relative to the config file)
    pub profile: Option<String>,
}

/// Resolved configuration, immutable after loading
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Base origin of the static store, if configured anywhere
    pub origin: Option<String>,

    /// Directory under the origin holding the catalog and body files
    pub content_root: String,

    /// File name of the catalog index under the content root
    pub catalog_index: String,

    /// Absolute or caller-relative path of the profile YAML
    pub profile: Option<PathBuf>,

    /// Path to the config file, if one was found
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Load configuration from all sources
    pub fn load() -> Result<Self> {
        let config_file = find_config_file();
        let file = match &config_file {
            Some(path) => load_config_file(path)?,
            None => ConfigFile::default(),
        };
        let base_dir = config_file
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        Ok(Self::resolve(file, base_dir, config_file))
    }

    fn resolve(
        file: ConfigFile,
        base_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
    ) -> Self {
        let origin = env_var("FOLIO_ORIGIN").or(file.origin);

        let content_root = env_var("FOLIO_CONTENT_ROOT")
            .or(file.content_root)
            .unwrap_or_else(|| DEFAULT_CONTENT_ROOT.to_string());

        let catalog_index = env_var("FOLIO_CATALOG_INDEX")
            .or(file.catalog_index)
            .unwrap_or_else(|| DEFAULT_CATALOG_INDEX.to_string());

        let profile = env_var("FOLIO_PROFILE")
            .map(PathBuf::from)
            .or_else(|| {
                file.profile
                    .map(|p| resolve_path(base_dir.as_deref(), &p))
            })
            .or_else(default_profile_path);

        Self {
            origin,
            content_root,
            catalog_index,
            profile,
            config_file,
        }
    }

    /// Origin is required for any command that touches the network
    pub fn require_origin(&self) -> Result<&str> {
        self.origin.as_deref().context(
            "No origin configured. Set FOLIO_ORIGIN or add `origin:` to folio.yaml",
        )
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Find folio.yaml by searching the current directory and its parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let candidate = current.join("folio.yaml");
        if candidate.exists() {
            return Some(candidate);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse a config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's directory
fn resolve_path(base: Option<&Path>, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        return path;
    }

    match base {
        Some(base) => base.join(path),
        None => path,
    }
}

/// ~/.folio/profile.yaml, only when it exists
fn default_profile_path() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".folio").join("profile.yaml");
    path.exists().then_some(path)
}
