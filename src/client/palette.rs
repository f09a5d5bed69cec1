//! The user's current paint selection.

use crate::{Paint, RecipeRequest};

/// Paints picked by the user, keyed by product id, in pick order.
///
/// Toggling a paint that is already selected removes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteSelection {
    paints: Vec<Paint>,
}

impl PaletteSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `paint`, or deselect it if a paint with the same id is selected.
    ///
    /// Returns `true` if the paint is selected afterwards.
    pub fn toggle(&mut self, paint: Paint) -> bool {
        match self.position(paint.id()) {
            Some(index) => {
                self.paints.remove(index);
                false
            }
            None => {
                self.paints.push(paint);
                true
            }
        }
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.position(product_id).is_some()
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        self.paints.clear();
    }

    pub fn len(&self) -> usize {
        self.paints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paints.is_empty()
    }

    pub fn paints(&self) -> &[Paint] {
        &self.paints
    }

    /// A recipe request for `target_hex` using the selected paints.
    pub fn recipe_request(&self, target_hex: impl Into<String>) -> RecipeRequest {
        RecipeRequest::new(target_hex, self.paints.clone())
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.paints.iter().position(|p| p.id() == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut palette = PaletteSelection::new();
        assert!(palette.toggle(Paint::new("P1", "#FF0000")));
        assert!(palette.contains("P1"));

        assert!(!palette.toggle(Paint::new("P1", "#FF0000")));
        assert!(palette.is_empty());
    }

    #[test]
    fn keeps_pick_order() {
        let mut palette = PaletteSelection::new();
        palette.toggle(Paint::new("P2", "#00FF00"));
        palette.toggle(Paint::new("P1", "#FF0000"));
        palette.toggle(Paint::new("P3", "#0000FF"));
        palette.toggle(Paint::new("P1", "#FF0000"));

        let ids: Vec<_> = palette.paints().iter().map(Paint::id).collect();
        assert_eq!(ids, ["P2", "P3"]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut palette = PaletteSelection::new();
        palette.toggle(Paint::new("P1", "#FF0000"));
        palette.toggle(Paint::new("P2", "#00FF00"));
        palette.reset();
        assert_eq!(palette.len(), 0);
    }

    #[test]
    fn builds_recipe_request() {
        let mut palette = PaletteSelection::new();
        palette.toggle(Paint::new("P1", "#FF0000"));

        let request = palette.recipe_request("#ABCDEF");
        assert_eq!(request.target_hex, "#ABCDEF");
        assert_eq!(request.available_paints.len(), 1);
        assert!(request.validate().is_ok());

        assert!(PaletteSelection::new().recipe_request("#ABCDEF").validate().is_err());
    }
}
