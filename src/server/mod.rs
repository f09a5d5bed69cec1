//! HTTP server for the frontend.
//!
//! This module provides:
//! - The axum router with the catalog, recipe and health routes (`routes`)
//! - Configuration types (`config`)
//! - Gateway construction from configuration and the serve loop
//!
//! | Route | Method | Success |
//! |---|---|---|
//! | `/catalog` | GET | JSON array of paints |
//! | `/recipe/generate` | POST | JSON array of recipes |
//! | `/health` | GET | status and build info |

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{Colormix, EmbeddedGateway, PaintGateway, Result};
use config::{Config, Secrets};
pub use routes::AppState;
use routes::{catalog_handler, health_handler, recipe_handler};

/// Build the router over any gateway.
pub fn router(gateway: Arc<dyn PaintGateway>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/catalog", get(catalog_handler))
        .route("/recipe/generate", post(recipe_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(gateway))
}

/// Build an [`EmbeddedGateway`] from configuration and secrets.
///
/// Upstreams whose URL or key is missing are left unconfigured; the
/// matching route then answers 500 until the configuration is fixed.
pub fn build_gateway(config: &Config, secrets: &Secrets) -> Result<EmbeddedGateway> {
    let mut builder = Colormix::builder()
        .timeout(config.server.limits.request_timeout_secs)
        .cache(config.catalog.cache_config())
        .catalog_path(config.catalog.path.clone());

    if let Some(url) = &config.catalog.base_url {
        builder = builder.catalog_url(url.clone());
    }
    if let Some(key) = secrets.catalog_key() {
        builder = builder.catalog_key(key);
    }
    if let Some(url) = &config.recipe.base_url {
        builder = builder.recipe_service(url.clone());
    }
    if let Some(key) = secrets.recipe_key() {
        builder = builder.recipe_key(key);
    }

    let gateway = builder.build()?;
    if !gateway.has_catalog() {
        error!("catalog store URL or access key missing; /catalog will fail");
    }
    if !gateway.has_recipes() {
        error!("recipe service URL missing; /recipe/generate will fail");
    }
    Ok(gateway)
}

/// Bind `config.server.address` and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config, gateway: Arc<dyn PaintGateway>) -> std::io::Result<()> {
    let app = router(gateway).layer(GlobalConcurrencyLimitLayer::new(
        config.server.limits.max_concurrent_requests,
    ));

    let listener = TcpListener::bind(&config.server.address).await?;
    info!(address = %config.server.address, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
