//! [`ServiceClient`]: a [`PaintGateway`] implementation that connects to a
//! colormix server over HTTP.
//!
//! Both directions use the UI (camelCase) field names; the server does the
//! translation to the upstream convention.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::providers::{DEFAULT_TIMEOUT_SECS, http_client};
use crate::{ColormixError, Paint, PaintGateway, RecipeRequest, RecipeResult, Result};

/// Default address of a local colormix server.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5171";

/// A [`PaintGateway`] client that talks to a remote colormix server.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Check that the server is up. Returns the raw health document.
    pub async fn health(&self) -> Result<serde_json::Value> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(server_unreachable)?;
        decode(response).await
    }
}

#[async_trait]
impl PaintGateway for ServiceClient {
    async fn paints(&self) -> Result<Arc<Vec<Paint>>> {
        let response = self
            .http
            .get(format!("{}/catalog", self.base_url))
            .send()
            .await
            .map_err(server_unreachable)?;
        decode(response).await.map(Arc::new)
    }

    async fn generate_recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>> {
        request.validate()?;

        let response = self
            .http
            .post(format!("{}/recipe/generate", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(server_unreachable)?;
        decode(response).await
    }
}

fn server_unreachable(err: reqwest::Error) -> ColormixError {
    ColormixError::UpstreamUnavailable(format!("colormix server unreachable: {err}"))
}

/// Turn a server response into `T`, or into the error the server reported.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ColormixError::Http(e.to_string()))?;

    if !status.is_success() {
        return Err(match status.as_u16() {
            400 => ColormixError::Validation(body),
            code => ColormixError::Upstream {
                status: code,
                message: body,
            },
        });
    }

    serde_json::from_str(&body).map_err(|e| ColormixError::Deserialization {
        source_name: "colormix server".to_string(),
        reason: e.to_string(),
    })
}
