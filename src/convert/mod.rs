//! Field-name translation between the UI and the upstream services.
//!
//! The UI speaks camelCase (`productId`); the catalog store and the recipe
//! service both speak snake_case (`product_id`). Each public type in
//! [`crate::types`] has a wire twin here, and [`FIELD_NAMES`] is the
//! single table pairing every UI name with its external name. Tests keep
//! the table, the public types and the wire types in lockstep.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Paint, RecipeRequest, RecipeResult};

/// `(ui_name, external_name)` pairs for every field that crosses a boundary.
pub const FIELD_NAMES: &[(&str, &str)] = &[
    // Paint
    ("productId", "product_id"),
    ("name", "name"),
    ("brand", "brand"),
    ("paintType", "paint_type"),
    ("grade", "grade"),
    ("hexCode", "hex_code"),
    ("cielabL", "cielab_l"),
    ("cielabA", "cielab_a"),
    ("cielabB", "cielab_b"),
    ("isDeleted", "is_deleted"),
    // RecipeRequest
    ("targetHex", "target_hex"),
    ("availablePaints", "available_paints"),
    // RecipeResult
    ("recipe", "recipe"),
    ("accuracy", "accuracy"),
    ("mixedHex", "mixed_hex"),
];

/// External name for a UI field name.
pub fn to_external(ui_name: &str) -> Option<&'static str> {
    FIELD_NAMES
        .iter()
        .find(|(ui, _)| *ui == ui_name)
        .map(|(_, external)| *external)
}

/// UI name for an external field name.
pub fn to_ui(external_name: &str) -> Option<&'static str> {
    FIELD_NAMES
        .iter()
        .find(|(_, external)| *external == external_name)
        .map(|(ui, _)| *ui)
}

// =============================================================================
// Wire types (snake_case)
// =============================================================================

/// A paint row as stored by the catalog store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaintRecord {
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub paint_type: Option<String>,
    pub grade: Option<String>,
    pub hex_code: Option<String>,
    #[serde(default)]
    pub cielab_l: f64,
    #[serde(default)]
    pub cielab_a: f64,
    #[serde(default)]
    pub cielab_b: f64,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Body of `POST /generate-recipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequestRecord {
    pub target_hex: String,
    pub available_paints: Vec<PaintRecord>,
}

/// One element of the `/generate-recipe` response array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub recipe: BTreeMap<String, u32>,
    pub accuracy: f64,
    pub mixed_hex: String,
}

// =============================================================================
// External → UI
// =============================================================================

impl From<PaintRecord> for Paint {
    fn from(r: PaintRecord) -> Self {
        Paint {
            product_id: r.product_id,
            name: r.name,
            brand: r.brand,
            paint_type: r.paint_type,
            grade: r.grade,
            hex_code: r.hex_code,
            cielab_l: r.cielab_l,
            cielab_a: r.cielab_a,
            cielab_b: r.cielab_b,
            is_deleted: r.is_deleted,
        }
    }
}

impl From<RecipeRecord> for RecipeResult {
    fn from(r: RecipeRecord) -> Self {
        RecipeResult {
            recipe: r.recipe,
            accuracy: r.accuracy,
            mixed_hex: r.mixed_hex,
        }
    }
}

// =============================================================================
// UI → External
// =============================================================================

impl From<&Paint> for PaintRecord {
    fn from(p: &Paint) -> Self {
        PaintRecord {
            product_id: p.product_id.clone(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            paint_type: p.paint_type.clone(),
            grade: p.grade.clone(),
            hex_code: p.hex_code.clone(),
            cielab_l: p.cielab_l,
            cielab_a: p.cielab_a,
            cielab_b: p.cielab_b,
            is_deleted: p.is_deleted,
        }
    }
}

impl From<&RecipeRequest> for RecipeRequestRecord {
    fn from(r: &RecipeRequest) -> Self {
        RecipeRequestRecord {
            target_hex: r.target_hex.clone(),
            available_paints: r.available_paints.iter().map(Into::into).collect(),
        }
    }
}

impl From<&RecipeResult> for RecipeRecord {
    fn from(r: &RecipeResult) -> Self {
        RecipeRecord {
            recipe: r.recipe.clone(),
            accuracy: r.accuracy,
            mixed_hex: r.mixed_hex.clone(),
        }
    }
}
