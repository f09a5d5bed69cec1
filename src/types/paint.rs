//! Catalog item type.

use serde::{Deserialize, Serialize};

/// A single paint product from the catalog.
///
/// Identified by `product_id`, which the catalog store assigns. Paints are
/// never edited in place; the catalog is always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub paint_type: Option<String>,
    pub grade: Option<String>,
    pub hex_code: Option<String>,
    /// CIELAB lightness.
    #[serde(default)]
    pub cielab_l: f64,
    /// CIELAB green–red axis.
    #[serde(default)]
    pub cielab_a: f64,
    /// CIELAB blue–yellow axis.
    #[serde(default)]
    pub cielab_b: f64,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Paint {
    /// Create a paint with the given id and hex color; everything else empty.
    pub fn new(product_id: impl Into<String>, hex_code: impl Into<String>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            hex_code: Some(hex_code.into()),
            ..Default::default()
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Set the paint type (oil, acrylic, ...) and grade (artist, student, ...).
    pub fn kind(mut self, paint_type: impl Into<String>, grade: impl Into<String>) -> Self {
        self.paint_type = Some(paint_type.into());
        self.grade = Some(grade.into());
        self
    }

    /// Set the CIELAB coordinates.
    pub fn lab(mut self, l: f64, a: f64, b: f64) -> Self {
        self.cielab_l = l;
        self.cielab_a = a;
        self.cielab_b = b;
        self
    }

    /// Product id, or the empty string when the store left it null.
    pub fn id(&self) -> &str {
        self.product_id.as_deref().unwrap_or_default()
    }
}
