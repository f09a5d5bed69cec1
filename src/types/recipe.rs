//! Recipe request and result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Paint;
use crate::{ColormixError, Result};

/// A request to mix `target_hex` out of the paints in `available_paints`.
///
/// Accepts both `{targetHex, availablePaints}` and the shorter
/// `{target, palette}` on input; always serializes the long form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[serde(default, alias = "target")]
    pub target_hex: String,
    #[serde(default, alias = "palette")]
    pub available_paints: Vec<Paint>,
}

impl RecipeRequest {
    pub fn new(target_hex: impl Into<String>, available_paints: Vec<Paint>) -> Self {
        Self {
            target_hex: target_hex.into(),
            available_paints,
        }
    }

    /// Reject requests that cannot produce a recipe.
    ///
    /// Runs before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.target_hex.trim().is_empty() {
            return Err(ColormixError::Validation(
                "target color is required".to_string(),
            ));
        }
        if self.available_paints.is_empty() {
            return Err(ColormixError::Validation(
                "at least one available paint is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// One mixing recipe produced by the recipe service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    /// Product id → number of parts.
    pub recipe: BTreeMap<String, u32>,
    /// How close the mix gets to the target (service-defined scale).
    pub accuracy: f64,
    pub mixed_hex: String,
}
