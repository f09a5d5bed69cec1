//! Caching subsystem.
//!
//! A single cache lives here: [`CatalogCache`], the read-through store for
//! the full paint catalog. Recipes are never cached; their key space
//! (target × arbitrary palette) makes hits vanishingly rare.

pub mod catalog;

pub use catalog::{CATALOG_CACHE_KEY, CacheConfig, CatalogCache};
