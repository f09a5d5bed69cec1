//! Core PaintGateway trait

use std::sync::Arc;

use async_trait::async_trait;

use crate::{Paint, RecipeRequest, RecipeResult, Result};

/// The two operations the frontend needs.
///
/// Implemented in-process by [`EmbeddedGateway`](crate::EmbeddedGateway)
/// and over HTTP by [`ServiceClient`](crate::client::ServiceClient), so
/// callers can hold either one behind `Arc<dyn PaintGateway>`.
#[async_trait]
pub trait PaintGateway: Send + Sync {
    /// The full catalog of non-deleted paints.
    async fn paints(&self) -> Result<Arc<Vec<Paint>>>;

    /// Mixing recipes for `request.target_hex` from `request.available_paints`.
    ///
    /// Fails with `Validation` before any network call when the target is
    /// blank or the palette is empty.
    async fn generate_recipes(&self, request: &RecipeRequest) -> Result<Vec<RecipeResult>>;
}
