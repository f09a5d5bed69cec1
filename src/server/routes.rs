//! HTTP handlers.
//!
//! Every failure is turned into a status and a plain-text message here,
//! at the handler boundary, through `ColormixError`'s `IntoResponse`.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use tracing::warn;

use crate::version::BuildInfo;
use crate::{ColormixError, Paint, PaintGateway, RecipeRequest, RecipeResult, Result};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn PaintGateway>,
    pub started: Instant,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PaintGateway>) -> Self {
        Self {
            gateway,
            started: Instant::now(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub build: BuildInfo,
    pub uptime_seconds: u64,
}

/// `GET /catalog`
pub async fn catalog_handler(State(state): State<AppState>) -> Result<Json<Arc<Vec<Paint>>>> {
    state
        .gateway
        .paints()
        .await
        .map(Json)
        .inspect_err(|e| warn!(error = %e, status = e.status_code(), "catalog request failed"))
}

/// `POST /recipe/generate`
pub async fn recipe_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<Vec<RecipeResult>>> {
    let Json(request) = payload.map_err(|rejection| {
        ColormixError::Validation(format!("Invalid request data: {}", rejection.body_text()))
    })?;

    state
        .gateway
        .generate_recipes(&request)
        .await
        .map(Json)
        .inspect_err(|e| warn!(error = %e, status = e.status_code(), "recipe request failed"))
}

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        build: BuildInfo::current(),
        uptime_seconds: state.started.elapsed().as_secs(),
    })
}
