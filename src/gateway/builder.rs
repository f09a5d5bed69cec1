//! Builder for configuring gateway instances

use std::sync::Arc;
use std::time::Duration;

use super::EmbeddedGateway;
use crate::Result;
use crate::cache::{CacheConfig, CatalogCache};
use crate::providers::{
    CatalogSource, CatalogStoreClient, DEFAULT_TIMEOUT_SECS, RecipeProvider, RecipeServiceClient,
    http_client,
};

/// Main entry point for creating gateway instances.
pub struct Colormix;

impl Colormix {
    /// Create a new builder for configuring the gateway.
    pub fn builder() -> ColormixBuilder {
        ColormixBuilder::new()
    }
}

/// Builder for configuring gateway instances.
///
/// Missing upstream settings are not a build error: the gateway still
/// serves, and the affected operation fails per request with
/// `Configuration`. Empty strings count as missing.
pub struct ColormixBuilder {
    catalog_url: Option<String>,
    catalog_key: Option<String>,
    catalog_path: Option<String>,
    recipe_url: Option<String>,
    recipe_key: Option<String>,
    catalog_source: Option<Arc<dyn CatalogSource>>,
    recipe_provider: Option<Arc<dyn RecipeProvider>>,
    cache_config: CacheConfig,
    timeout_secs: u64,
}

impl ColormixBuilder {
    pub fn new() -> Self {
        Self {
            catalog_url: None,
            catalog_key: None,
            catalog_path: None,
            recipe_url: None,
            recipe_key: None,
            catalog_source: None,
            recipe_provider: None,
            cache_config: CacheConfig::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configure the catalog store's base URL and access key.
    pub fn catalog_store(mut self, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.catalog_url = non_empty(base_url.into());
        self.catalog_key = non_empty(api_key.into());
        self
    }

    /// Configure only the catalog store's base URL (key supplied separately).
    pub fn catalog_url(mut self, base_url: impl Into<String>) -> Self {
        self.catalog_url = non_empty(base_url.into());
        self
    }

    /// Configure only the catalog store's access key.
    pub fn catalog_key(mut self, api_key: impl Into<String>) -> Self {
        self.catalog_key = non_empty(api_key.into());
        self
    }

    /// Override the paint table path under the store's base URL.
    pub fn catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = non_empty(path.into());
        self
    }

    /// Configure the recipe microservice's base URL.
    pub fn recipe_service(mut self, base_url: impl Into<String>) -> Self {
        self.recipe_url = non_empty(base_url.into());
        self
    }

    /// Bearer token for the recipe microservice, if it wants one.
    pub fn recipe_key(mut self, api_key: impl Into<String>) -> Self {
        self.recipe_key = non_empty(api_key.into());
        self
    }

    /// Use a custom catalog source instead of the HTTP store client.
    pub fn catalog_source(mut self, source: Arc<dyn CatalogSource>) -> Self {
        self.catalog_source = Some(source);
        self
    }

    /// Use a custom recipe provider instead of the HTTP service client.
    pub fn recipe_provider(mut self, provider: Arc<dyn RecipeProvider>) -> Self {
        self.recipe_provider = Some(provider);
        self
    }

    /// Configure the catalog cache (default: 24h absolute lifetime).
    pub fn cache(mut self, config: CacheConfig) -> Self {
        self.cache_config = config;
        self
    }

    /// Set the transport timeout for upstream calls (seconds).
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Build the gateway.
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<EmbeddedGateway> {
        let http = http_client(Duration::from_secs(self.timeout_secs))?;

        let catalog = match (self.catalog_source, self.catalog_url, self.catalog_key) {
            (Some(source), _, _) => Some(source),
            (None, Some(url), Some(key)) => {
                let mut client = CatalogStoreClient::new(http.clone(), url, key);
                if let Some(path) = self.catalog_path {
                    client = client.with_catalog_path(path);
                }
                Some(Arc::new(client) as Arc<dyn CatalogSource>)
            }
            _ => None,
        };

        let recipes = match (self.recipe_provider, self.recipe_url) {
            (Some(provider), _) => Some(provider),
            (None, Some(url)) => {
                let mut client = RecipeServiceClient::new(http, url);
                if let Some(key) = self.recipe_key {
                    client = client.with_api_key(key);
                }
                Some(Arc::new(client) as Arc<dyn RecipeProvider>)
            }
            (None, None) => None,
        };

        Ok(EmbeddedGateway::new(
            catalog,
            recipes,
            CatalogCache::new(&self.cache_config),
        ))
    }
}

impl Default for ColormixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
