//! Public types for the colormix API.
//!
//! These are the UI-facing shapes and serialize with camelCase field
//! names. The snake_case shapes spoken by the upstream services live in
//! [`crate::convert`].

mod paint;
mod recipe;

pub use paint::Paint;
pub use recipe::{RecipeRequest, RecipeResult};
