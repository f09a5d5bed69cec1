//! Catalog store client (PostgREST-style REST interface).
//!
//! Reads the whole paint table in one request:
//!
//! ```text
//! GET {base}{path}?select=*&is_deleted=eq.false&limit=7000
//! apikey: <key>
//! Authorization: Bearer <key>
//! ```
//!
//! Rows come back in snake_case and are translated through
//! [`crate::convert::PaintRecord`].

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, error, warn};

use super::traits::CatalogSource;
use super::{ensure_success, join_url};
use crate::convert::PaintRecord;
use crate::telemetry;
use crate::{ColormixError, Paint, Result};

/// Default path of the paint table under the store's base URL.
pub const DEFAULT_CATALOG_PATH: &str = "/rest/v1/paints";

/// Row ceiling sent with every catalog request.
///
/// There is no pagination: a catalog larger than this is silently
/// truncated by the store. [`CatalogStoreClient::fetch_paints`] logs a
/// warning when a response hits the ceiling.
pub const CATALOG_ROW_LIMIT: usize = 7000;

const UPSTREAM: &str = "catalog";

/// Client for the managed catalog store.
#[derive(Clone)]
pub struct CatalogStoreClient {
    api_key: String,
    http: Client,
    base_url: String,
    catalog_path: String,
}

impl CatalogStoreClient {
    /// Create a client for the store at `base_url`, authenticating with `api_key`.
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base_url: base_url.into(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
        }
    }

    /// Read paints from a different table path (default: [`DEFAULT_CATALOG_PATH`]).
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Full URL of the paint table, without the query string.
    pub fn catalog_url(&self) -> String {
        join_url(&self.base_url, &self.catalog_path)
    }

    async fn fetch(&self) -> Result<Vec<Paint>> {
        let url = self.catalog_url();
        debug!(%url, "fetching catalog from store");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("select", "*".to_string()),
                ("is_deleted", "eq.false".to_string()),
                ("limit", CATALOG_ROW_LIMIT.to_string()),
            ])
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "error contacting catalog store");
                ColormixError::UpstreamUnavailable(e.to_string())
            })?;

        ensure_success(&response, UPSTREAM, "Error fetching paints from catalog store.")?;

        let body = response
            .text()
            .await
            .map_err(|e| ColormixError::UpstreamUnavailable(e.to_string()))?;

        let records = parse_catalog(&body)?;
        if records.len() >= CATALOG_ROW_LIMIT {
            warn!(
                rows = records.len(),
                limit = CATALOG_ROW_LIMIT,
                "catalog hit the row ceiling; results may be truncated"
            );
        }

        Ok(records.into_iter().map(Paint::from).collect())
    }
}

/// Parse a catalog response body. `null` counts as a failure, `[]` does not.
fn parse_catalog(body: &str) -> Result<Vec<PaintRecord>> {
    let parsed: Option<Vec<PaintRecord>> =
        serde_json::from_str(body).map_err(|e| ColormixError::Deserialization {
            source_name: "catalog store".to_string(),
            reason: e.to_string(),
        })?;

    parsed.ok_or_else(|| {
        error!("catalog store returned a null body");
        ColormixError::Deserialization {
            source_name: "catalog store".to_string(),
            reason: "response was empty".to_string(),
        }
    })
}

#[async_trait]
impl CatalogSource for CatalogStoreClient {
    fn name(&self) -> &str {
        "catalog-store"
    }

    async fn fetch_paints(&self) -> Result<Vec<Paint>> {
        let started = Instant::now();
        let result = self.fetch().await;
        telemetry::record_upstream(UPSTREAM, started, &result);
        result
    }
}
