//! Provider traits for the two upstream services.
//!
//! The gateway talks to upstreams only through these traits, so tests can
//! substitute in-process fakes and the HTTP clients stay interchangeable.
//!
//! # Error contract
//!
//! Implementations report:
//! - `UpstreamUnavailable` when the service could not be reached
//! - `Upstream { status, .. }` when it answered with a non-success status
//! - `Deserialization` when the body was null or malformed
//!
//! They never retry; a failed call surfaces immediately.

use async_trait::async_trait;

use crate::Result;
use crate::types::{Paint, RecipeRequest, RecipeResult};

// ============================================================================
// Catalog Source
// ============================================================================

/// Source of the full, non-deleted paint catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Fetch every non-deleted paint in one round trip.
    async fn fetch_paints(&self) -> Result<Vec<Paint>>;
}

// ============================================================================
// Recipe Provider
// ============================================================================

/// Service that turns a target color and a palette into mixing recipes.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Compute recipes for an already-validated request.
    async fn generate_recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>>;
}
