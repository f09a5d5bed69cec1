//! EmbeddedGateway - in-process catalog and recipe handling

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::cache::CatalogCache;
use crate::providers::{CatalogSource, RecipeProvider};
use crate::{ColormixError, Paint, PaintGateway, RecipeRequest, RecipeResult, Result};

/// Gateway that talks to the upstream services directly.
///
/// Owns the catalog cache; every clone of the cache handle it was built
/// with observes the same entry.
pub struct EmbeddedGateway {
    catalog: Option<Arc<dyn CatalogSource>>,
    recipes: Option<Arc<dyn RecipeProvider>>,
    cache: CatalogCache,
}

impl EmbeddedGateway {
    pub(crate) fn new(
        catalog: Option<Arc<dyn CatalogSource>>,
        recipes: Option<Arc<dyn RecipeProvider>>,
        cache: CatalogCache,
    ) -> Self {
        Self {
            catalog,
            recipes,
            cache,
        }
    }

    /// Whether the catalog store is configured.
    pub fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }

    /// Whether the recipe service is configured.
    pub fn has_recipes(&self) -> bool {
        self.recipes.is_some()
    }

    /// The catalog cache this gateway reads through.
    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// Return the catalog, from cache when possible.
    ///
    /// On a miss the store is queried once and a successful result is
    /// cached; failures leave the cache exactly as it was.
    pub async fn catalog(&self) -> Result<Arc<Vec<Paint>>> {
        if let Some(paints) = self.cache.get().await {
            info!(count = paints.len(), "serving paints from cache");
            return Ok(paints);
        }

        info!("no cached catalog, fetching from store");

        let source = self.catalog.as_ref().ok_or_else(|| {
            error!("catalog store configuration is missing");
            ColormixError::Configuration(
                "catalog store configuration is missing (base URL and access key)".to_string(),
            )
        })?;

        let paints = Arc::new(source.fetch_paints().await?);
        info!(count = paints.len(), source = source.name(), "fetched paints");

        self.cache.insert(paints.clone()).await;
        Ok(paints)
    }

    /// Validate and forward a recipe request. Never cached.
    pub async fn recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>> {
        request.validate()?;

        let provider = self.recipes.as_ref().ok_or_else(|| {
            error!("recipe service URL is not configured");
            ColormixError::Configuration("recipe service URL is not configured".to_string())
        })?;

        let results = provider.generate_recipes(request).await?;
        info!(
            count = results.len(),
            provider = provider.name(),
            "generated recipes"
        );
        Ok(results)
    }
}

#[async_trait]
impl PaintGateway for EmbeddedGateway {
    async fn paints(&self) -> Result<Arc<Vec<Paint>>> {
        self.catalog().await
    }

    async fn generate_recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>> {
        self.recipes(request).await
    }
}
