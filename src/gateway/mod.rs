//! Gateway implementations

mod builder;
mod embedded;

pub use builder::{Colormix, ColormixBuilder};
pub use embedded::EmbeddedGateway;
