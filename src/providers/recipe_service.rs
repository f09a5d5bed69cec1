//! Recipe microservice client.
//!
//! `POST {base}/generate-recipe` with a snake_case body; the response is a
//! snake_case array of recipes. The service does all of the color work.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, error};

use super::traits::RecipeProvider;
use super::{ensure_success, join_url};
use crate::convert::{RecipeRecord, RecipeRequestRecord};
use crate::telemetry;
use crate::{ColormixError, RecipeRequest, RecipeResult, Result};

const UPSTREAM: &str = "recipe";

/// Client for the color-mixing microservice.
#[derive(Clone)]
pub struct RecipeServiceClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RecipeServiceClient {
    /// Create a client for the service at `base_url`.
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Send `Authorization: Bearer <key>` with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    async fn generate(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>> {
        let url = join_url(&self.base_url, "generate-recipe");
        debug!(
            %url,
            target = %request.target_hex,
            paints = request.available_paints.len(),
            "forwarding recipe request"
        );

        let mut builder = self
            .http
            .post(&url)
            .json(&RecipeRequestRecord::from(request));
        if let Some(key) = &self.api_key {
            builder = builder.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        let response = builder.send().await.map_err(|e| {
            error!(error = %e, "error contacting recipe service");
            ColormixError::UpstreamUnavailable(e.to_string())
        })?;

        ensure_success(&response, UPSTREAM, "Error fetching recipe from color service.")?;

        let body = response
            .text()
            .await
            .map_err(|e| ColormixError::UpstreamUnavailable(e.to_string()))?;

        Ok(parse_recipes(&body)?
            .into_iter()
            .map(RecipeResult::from)
            .collect())
    }
}

fn parse_recipes(body: &str) -> Result<Vec<RecipeRecord>> {
    let parsed: Option<Vec<RecipeRecord>> =
        serde_json::from_str(body).map_err(|e| ColormixError::Deserialization {
            source_name: "recipe service".to_string(),
            reason: e.to_string(),
        })?;

    parsed.ok_or_else(|| ColormixError::Deserialization {
        source_name: "recipe service".to_string(),
        reason: "response was empty".to_string(),
    })
}

#[async_trait]
impl RecipeProvider for RecipeServiceClient {
    fn name(&self) -> &str {
        "recipe-service"
    }

    async fn generate_recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>> {
        let started = Instant::now();
        let result = self.generate(request).await;
        telemetry::record_upstream(UPSTREAM, started, &result);
        result
    }
}
