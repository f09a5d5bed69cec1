//! Clients for the upstream services.
//!
//! - [`CatalogStoreClient`] reads the paint catalog from the managed data
//!   store's REST interface.
//! - [`RecipeServiceClient`] forwards recipe requests to the color-mixing
//!   microservice.
//!
//! Both share one [`reqwest::Client`] built by [`http_client`].

pub mod catalog_store;
pub mod recipe_service;
pub mod traits;

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::warn;

pub use catalog_store::{CATALOG_ROW_LIMIT, CatalogStoreClient, DEFAULT_CATALOG_PATH};
pub use recipe_service::RecipeServiceClient;
pub use traits::{CatalogSource, RecipeProvider};

use crate::{ColormixError, Result};

/// Default transport timeout for upstream calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the outbound HTTP client shared by all upstream clients.
///
/// The client pools connections internally and is safe to clone and use
/// from many tasks at once.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ColormixError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Map a non-success upstream status to [`ColormixError::Upstream`].
fn ensure_success(response: &Response, upstream: &str, message: &str) -> Result<()> {
    let status = response.status();

    if status.is_success() {
        return Ok(());
    }

    warn!(upstream, status = status.as_u16(), "upstream returned an error status");
    Err(ColormixError::Upstream {
        status: status.as_u16(),
        message: message.to_string(),
    })
}

/// Join a base URL and a path without doubling or dropping the slash.
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
