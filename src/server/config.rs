//! Configuration loading for colormixd.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.colormix/config.toml` (user)
//! 3. `/etc/colormix/config.toml` (system)
//!
//! With no file at all the daemon still starts on defaults; handlers whose
//! upstream is unconfigured answer with a configuration error.
//!
//! Secrets are loaded separately with mandatory permission checks:
//! 1. `~/.colormix/secrets.toml` (user, must be 0600)
//! 2. `/etc/colormix/secrets.toml` (system, must be 0600)
//!
//! Environment variables override both: `COLORMIX_CATALOG_URL` and
//! `COLORMIX_RECIPE_URL` for base URLs, `COLORMIX_CATALOG_KEY` and
//! `COLORMIX_RECIPE_KEY` for keys.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::providers::{DEFAULT_CATALOG_PATH, DEFAULT_TIMEOUT_SECS};
use crate::{CacheConfig, ColormixError, Result};

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recipe: RecipeConfig,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5171).
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            limits: LimitsConfig::default(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:5171".to_string()
}

/// Resource limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum concurrent requests (default: 100).
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_requests: usize,
    /// Upstream transport timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: default_max_concurrent(),
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_max_concurrent() -> usize {
    100
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Catalog store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the store, e.g. `https://project.supabase.co`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Paint table path under the base URL (default: `/rest/v1/paints`).
    #[serde(default = "default_catalog_path")]
    pub path: String,
    /// Absolute lifetime of the cached catalog in seconds (default: 86400).
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            path: default_catalog_path(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl CatalogConfig {
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::new().ttl(Duration::from_secs(self.cache_ttl_secs))
    }
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

fn default_cache_ttl() -> u64 {
    24 * 3600
}

/// Recipe microservice configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeConfig {
    /// Base URL of the service, e.g. `http://localhost:8000`.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Secrets configuration (access keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub catalog: Option<ApiKeySecret>,
    #[serde(default)]
    pub recipe: Option<ApiKeySecret>,
}

/// A single access key secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySecret {
    pub api_key: String,
}

const CATALOG_URL_ENV: &str = "COLORMIX_CATALOG_URL";
const RECIPE_URL_ENV: &str = "COLORMIX_RECIPE_URL";
const CATALOG_KEY_ENV: &str = "COLORMIX_CATALOG_KEY";
const RECIPE_KEY_ENV: &str = "COLORMIX_RECIPE_KEY";

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from the standard locations, then apply
    /// environment overrides.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; missing file is an error)
    /// 2. `~/.colormix/config.toml`
    /// 3. `/etc/colormix/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                warn!("no config file found, using defaults");
                Config::default()
            }
        };
        config.apply_overrides(env_var);
        Ok(config)
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ColormixError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ColormixError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Override base URLs from `lookup` (normally the process environment).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(CATALOG_URL_ENV) {
            self.catalog.base_url = Some(url);
        }
        if let Some(url) = lookup(RECIPE_URL_ENV) {
            self.recipe.base_url = Some(url);
        }
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ColormixError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".colormix").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/colormix/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

impl Secrets {
    /// Load secrets from the standard locations with permission checks.
    ///
    /// Resolution order:
    /// 1. `~/.colormix/secrets.toml` (if exists, must be 0600)
    /// 2. `/etc/colormix/secrets.toml` (if exists, must be 0600)
    ///
    /// Returns empty secrets if no file exists (keys may come from env vars).
    pub fn load() -> Result<Self> {
        // Try user secrets first
        if let Some(home) = dirs::home_dir() {
            let user_secrets = home.join(".colormix").join("secrets.toml");
            if user_secrets.exists() {
                return Self::load_from_file(&user_secrets);
            }
        }

        // Try system secrets
        let system_secrets = PathBuf::from("/etc/colormix/secrets.toml");
        if system_secrets.exists() {
            return Self::load_from_file(&system_secrets);
        }

        Ok(Secrets::default())
    }

    /// Parse a secrets file after checking its permissions.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_permissions(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            ColormixError::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ColormixError::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    /// Check that the secrets file has secure permissions (0600 or 0400).
    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            ColormixError::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        // Reject if group or other bits are set
        if mode & 0o077 != 0 {
            return Err(ColormixError::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        Ok(())
    }

    /// Catalog store access key; the environment wins over the file.
    pub fn catalog_key(&self) -> Option<String> {
        self.catalog_key_with(env_var)
    }

    /// Recipe service key; the environment wins over the file.
    pub fn recipe_key(&self) -> Option<String> {
        self.recipe_key_with(env_var)
    }

    fn catalog_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(CATALOG_KEY_ENV).or_else(|| self.catalog.as_ref().map(|s| s.api_key.clone()))
    }

    fn recipe_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        lookup(RECIPE_KEY_ENV).or_else(|| self.recipe.as_ref().map(|s| s.api_key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.address, "127.0.0.1:5171");
        assert_eq!(config.server.limits.max_concurrent_requests, 100);
        assert_eq!(config.server.limits.request_timeout_secs, 30);
        assert_eq!(config.catalog.path, "/rest/v1/paints");
        assert_eq!(config.catalog.cache_ttl_secs, 86_400);
        assert!(config.catalog.base_url.is_none());
        assert!(config.recipe.base_url.is_none());
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [server]
            address = "0.0.0.0:5171"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.address, "0.0.0.0:5171");
        // Defaults preserved
        assert_eq!(config.server.limits.max_concurrent_requests, 100);
        assert_eq!(config.catalog.cache_ttl_secs, 86_400);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [server]
            address = "127.0.0.1:8080"

            [server.limits]
            max_concurrent_requests = 50
            request_timeout_secs = 10

            [catalog]
            base_url = "https://project.supabase.co"
            path = "/rest/v1/items"
            cache_ttl_secs = 600

            [recipe]
            base_url = "http://localhost:8000"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.limits.max_concurrent_requests, 50);
        assert_eq!(config.server.limits.request_timeout_secs, 10);
        assert_eq!(
            config.catalog.base_url.as_deref(),
            Some("https://project.supabase.co")
        );
        assert_eq!(config.catalog.path, "/rest/v1/items");
        assert_eq!(
            config.catalog.cache_config().ttl,
            Duration::from_secs(600)
        );
        assert_eq!(
            config.recipe.base_url.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn env_overrides_base_urls() {
        let mut config = Config::default();
        config.catalog.base_url = Some("https://from-file".into());

        config.apply_overrides(lookup_from(&[("COLORMIX_RECIPE_URL", "http://from-env")]));

        assert_eq!(config.catalog.base_url.as_deref(), Some("https://from-file"));
        assert_eq!(config.recipe.base_url.as_deref(), Some("http://from-env"));
    }

    #[test]
    fn parse_secrets() {
        let toml = r#"
            [catalog]
            api_key = "store-key"
        "#;
        let secrets: Secrets = toml::from_str(toml).unwrap();
        assert_eq!(secrets.catalog.as_ref().unwrap().api_key, "store-key");
        assert!(secrets.recipe.is_none());
    }

    #[test]
    fn env_key_wins_over_file() {
        let secrets = Secrets {
            catalog: Some(ApiKeySecret {
                api_key: "from-file".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(
            secrets.catalog_key_with(lookup_from(&[])),
            Some("from-file".to_string())
        );
        assert_eq!(
            secrets.catalog_key_with(lookup_from(&[("COLORMIX_CATALOG_KEY", "from-env")])),
            Some("from-env".to_string())
        );
        assert_eq!(secrets.recipe_key_with(lookup_from(&[])), None);
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[recipe]\nbase_url = \"http://mixer\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.recipe.base_url.as_deref(), Some("http://mixer"));
    }

    #[cfg(unix)]
    #[test]
    fn world_readable_secrets_are_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "[catalog]\napi_key = \"k\"\n").unwrap();

        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        let err = Secrets::load_from_file(&path).unwrap_err().to_string();
        assert!(err.contains("insecure permissions"));

        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();
        let secrets = Secrets::load_from_file(&path).unwrap();
        assert_eq!(secrets.catalog.unwrap().api_key, "k");
    }
}
