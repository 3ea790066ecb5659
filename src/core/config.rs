//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shoplist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::providers::firestore::DEFAULT_FIRESTORE_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub firestore: FirestoreConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FirestoreConfig {
    pub project_id: Option<String>,
    pub collection: Option<String>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub user: Option<String>,
    pub id_token: Option<String>,
}

/// CLI flag overrides. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub project_id: Option<String>,
    pub collection: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COLLECTION: &str = "buyItems";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub project_id: String,
    pub collection: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub user: Option<String>,
    pub id_token: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.shoplist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shoplist").join("config.toml"))
}

/// Load config from `~/.shoplist/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShopConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShopConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShopConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ShopConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ShopConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ShopConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // id_token and api_key are secrets; log only which sections are set
    debug!(
        "Config: project_id={:?}, collection={:?}, base_url={:?}, user={:?}",
        config.firestore.project_id,
        config.firestore.collection,
        config.firestore.base_url,
        config.session.user
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# shoplist Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [firestore]
# project_id = "my-project"          # Or set SHOPLIST_PROJECT_ID env var
# collection = "buyItems"
# base_url = "https://firestore.googleapis.com/v1"
# api_key = "AIza..."                # Or set SHOPLIST_API_KEY env var
# timeout_secs = 15

# [session]
# user = "ada@example.com"           # Or set SHOPLIST_USER env var
# id_token = "eyJ..."                # Or set SHOPLIST_ID_TOKEN env var
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ShopConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Project: CLI → env → config → empty (reported by the store at fetch time)
    let project_id = cli
        .project_id
        .clone()
        .or_else(|| env_var("SHOPLIST_PROJECT_ID"))
        .or_else(|| config.firestore.project_id.clone())
        .unwrap_or_default();

    let collection = cli
        .collection
        .clone()
        .or_else(|| env_var("SHOPLIST_COLLECTION"))
        .or_else(|| config.firestore.collection.clone())
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env_var("SHOPLIST_BASE_URL"))
        .or_else(|| config.firestore.base_url.clone())
        .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string());

    // Secrets: env → config
    let api_key = env_var("SHOPLIST_API_KEY").or_else(|| config.firestore.api_key.clone());
    let id_token = env_var("SHOPLIST_ID_TOKEN").or_else(|| config.session.id_token.clone());
    let user = env_var("SHOPLIST_USER").or_else(|| config.session.user.clone());

    let timeout_secs = match env_var("SHOPLIST_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            warn!("Ignoring invalid SHOPLIST_TIMEOUT_SECS: {}", e);
            config.firestore.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
        }
        None => config.firestore.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
    };
    // A zero timeout would fail every request immediately
    let timeout_secs = if timeout_secs == 0 {
        warn!("Ignoring timeout_secs = 0, using {}s", DEFAULT_TIMEOUT_SECS);
        DEFAULT_TIMEOUT_SECS
    } else {
        timeout_secs
    };

    ResolvedConfig {
        project_id,
        collection,
        base_url,
        api_key,
        timeout_secs,
        user,
        id_token,
    }
}
