//! Client side of the colormix API.
//!
//! - [`ServiceClient`] calls a running colormix server over HTTP and
//!   implements [`PaintGateway`](crate::PaintGateway).
//! - [`PaletteSelection`] tracks which paints the user has picked; its
//!   contents become a recipe request's `available_paints`.

pub mod palette;
pub mod service_client;

pub use palette::PaletteSelection;
pub use service_client::ServiceClient;
