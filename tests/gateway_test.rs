//! Gateway behavior over in-process mock upstreams.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use colormix::providers::{CatalogSource, RecipeProvider};
use colormix::{
    CacheConfig, Colormix, ColormixError, Paint, PaintGateway, RecipeRequest, RecipeResult,
    Result,
};

// ============================================================================
// Mock upstreams
// ============================================================================

/// Catalog source that counts fetches and can be switched to fail.
#[derive(Default)]
struct CountingCatalog {
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl CountingCatalog {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogSource for CountingCatalog {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch_paints(&self) -> Result<Vec<Paint>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(ColormixError::Upstream {
                status: 502,
                message: "store down".into(),
            });
        }
        Ok(vec![Paint::new(format!("P{n}"), "#FF0000")])
    }
}

#[derive(Default)]
struct CountingRecipes {
    calls: AtomicUsize,
}

#[async_trait]
impl RecipeProvider for CountingRecipes {
    fn name(&self) -> &str {
        "counting"
    }

    async fn generate_recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let recipe: BTreeMap<String, u32> = request
            .available_paints
            .iter()
            .map(|p| (p.id().to_string(), 1))
            .collect();
        Ok(vec![RecipeResult {
            recipe,
            accuracy: 1.0,
            mixed_hex: request.target_hex.clone(),
        }])
    }
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn builder_without_upstreams_still_builds() {
    let gateway = Colormix::builder().build().unwrap();
    assert!(!gateway.has_catalog());
    assert!(!gateway.has_recipes());
}

#[test]
fn catalog_needs_both_url_and_key() {
    let url_only = Colormix::builder()
        .catalog_url("https://store.example")
        .build()
        .unwrap();
    assert!(!url_only.has_catalog());

    let empty_key = Colormix::builder()
        .catalog_store("https://store.example", "")
        .build()
        .unwrap();
    assert!(!empty_key.has_catalog());

    let both = Colormix::builder()
        .catalog_store("https://store.example", "key")
        .build()
        .unwrap();
    assert!(both.has_catalog());
}

#[test]
fn recipe_service_needs_only_url() {
    let gateway = Colormix::builder()
        .recipe_service("https://mixer.example")
        .build()
        .unwrap();
    assert!(gateway.has_recipes());
}

// ============================================================================
// Catalog caching
// ============================================================================

#[tokio::test]
async fn cache_hit_skips_source() {
    let source = Arc::new(CountingCatalog::default());
    let gateway = Colormix::builder()
        .catalog_source(source.clone())
        .build()
        .unwrap();

    let first = gateway.paints().await.unwrap();
    let second = gateway.paints().await.unwrap();

    assert_eq!(source.calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn refetch_after_expiry_replaces_entry() {
    let source = Arc::new(CountingCatalog::default());
    let gateway = Colormix::builder()
        .catalog_source(source.clone())
        .cache(CacheConfig::new().ttl(Duration::from_millis(50)))
        .build()
        .unwrap();

    assert_eq!(gateway.paints().await.unwrap()[0].id(), "P1");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(gateway.paints().await.unwrap()[0].id(), "P2");
    assert_eq!(gateway.paints().await.unwrap()[0].id(), "P2");
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn failure_on_empty_cache_leaves_it_empty() {
    let source = Arc::new(CountingCatalog::default());
    source.fail(true);
    let gateway = Colormix::builder()
        .catalog_source(source.clone())
        .build()
        .unwrap();

    let err = gateway.paints().await.unwrap_err();
    assert_eq!(err.status_code(), 502);
    assert!(gateway.cache().get().await.is_none());

    source.fail(false);
    assert_eq!(gateway.paints().await.unwrap()[0].id(), "P2");
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn failure_after_expiry_does_not_write() {
    let source = Arc::new(CountingCatalog::default());
    let gateway = Colormix::builder()
        .catalog_source(source.clone())
        .cache(CacheConfig::new().ttl(Duration::from_millis(50)))
        .build()
        .unwrap();

    gateway.paints().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    source.fail(true);
    assert!(gateway.paints().await.is_err());
    assert!(gateway.cache().get().await.is_none());
}

#[tokio::test]
async fn cancelled_fetch_does_not_write() {
    struct SlowCatalog;

    #[async_trait]
    impl CatalogSource for SlowCatalog {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch_paints(&self) -> Result<Vec<Paint>> {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(vec![Paint::new("P1", "#FF0000")])
        }
    }

    let gateway = Colormix::builder()
        .catalog_source(Arc::new(SlowCatalog))
        .build()
        .unwrap();

    let outcome = tokio::time::timeout(Duration::from_millis(20), gateway.paints()).await;
    assert!(outcome.is_err(), "fetch should have been cancelled");
    assert!(gateway.cache().get().await.is_none());
}

#[tokio::test]
async fn empty_catalog_is_cached() {
    struct EmptyCatalog(AtomicUsize);

    #[async_trait]
    impl CatalogSource for EmptyCatalog {
        fn name(&self) -> &str {
            "empty"
        }

        async fn fetch_paints(&self) -> Result<Vec<Paint>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    let source = Arc::new(EmptyCatalog(AtomicUsize::new(0)));
    let gateway = Colormix::builder()
        .catalog_source(source.clone())
        .build()
        .unwrap();

    assert!(gateway.paints().await.unwrap().is_empty());
    assert!(gateway.paints().await.unwrap().is_empty());
    assert_eq!(source.0.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Recipes
// ============================================================================

#[tokio::test]
async fn recipes_are_never_cached() {
    let provider = Arc::new(CountingRecipes::default());
    let gateway = Colormix::builder()
        .recipe_provider(provider.clone())
        .build()
        .unwrap();

    let request = RecipeRequest::new("#ABCDEF", vec![Paint::new("P1", "#FF0000")]);
    gateway.generate_recipes(&request).await.unwrap();
    let results = gateway.generate_recipes(&request).await.unwrap();

    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    assert_eq!(results[0].recipe.get("P1"), Some(&1));
}

#[tokio::test]
async fn invalid_requests_never_reach_provider() {
    let provider = Arc::new(CountingRecipes::default());
    let gateway = Colormix::builder()
        .recipe_provider(provider.clone())
        .build()
        .unwrap();

    let no_palette = RecipeRequest::new("#ABCDEF", vec![]);
    let no_target = RecipeRequest::new("", vec![Paint::new("P1", "#FF0000")]);

    assert!(matches!(
        gateway.generate_recipes(&no_palette).await,
        Err(ColormixError::Validation(_))
    ));
    assert!(matches!(
        gateway.generate_recipes(&no_target).await,
        Err(ColormixError::Validation(_))
    ));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}
