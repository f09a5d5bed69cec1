//! Colormix - backend-for-frontend for a paint mixing app
//!
//! This crate sits between the UI and two external services:
//!
//! - a managed data store holding the paint catalog, read through a
//!   single-entry in-memory cache with a 24-hour absolute lifetime, and
//! - a color-mixing microservice that turns a target color and a palette
//!   into recipes.
//!
//! It does no color math itself. Its work is HTTP plumbing, translation
//! between the UI's camelCase field names and the services' snake_case
//! ones, and the catalog cache.
//!
//! # Example
//!
//! ```rust,no_run
//! use colormix::{Colormix, PaintGateway, RecipeRequest};
//!
//! #[tokio::main]
//! async fn main() -> colormix::Result<()> {
//!     let gateway = Colormix::builder()
//!         .catalog_store("https://project.supabase.co", "store-key")
//!         .recipe_service("http://localhost:8000")
//!         .build()?;
//!
//!     let paints = gateway.paints().await?;
//!     let palette = paints.iter().take(3).cloned().collect();
//!
//!     let recipes = gateway
//!         .generate_recipes(&RecipeRequest::new("#87CEEB", palette))
//!         .await?;
//!
//!     for recipe in recipes {
//!         println!("{:?} -> {} ({:.2})", recipe.recipe, recipe.mixed_hex, recipe.accuracy);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
#[cfg(feature = "client")]
pub mod client;
pub mod convert;
pub mod error;
pub mod gateway;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use cache::{CacheConfig, CatalogCache};
pub use error::{ColormixError, Result};
pub use gateway::{Colormix, ColormixBuilder, EmbeddedGateway};
pub use traits::PaintGateway;
pub use types::{Paint, RecipeRequest, RecipeResult};
pub use version::{PKG_VERSION, version_string};
