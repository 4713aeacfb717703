//! canvasplot turns user-drawn canvas data into grayscale images and keeps
//! the raw payloads in flat files.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: serialized grid text (`"[v0,v1,...]"`) -> [`PixelGrid`] (exactly 200×200 values)
//! 2. **Rasterize**: [`PixelGrid`] -> 8-bit grayscale image ([`render_grid`])
//! 3. **Encode**: grayscale image -> PNG bytes ([`encode_png`])
//!
//! [`reconstruct`] runs all three steps. The [`server`] module exposes the
//! pipeline, the [`PayloadStore`] and ticker intake over HTTP.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;
mod grid;
mod render;
mod store;

/// Service configuration loaded from JSON.
pub mod config;
/// HTTP routes and server entry point.
pub mod server;
/// Ticker symbol validation.
pub mod ticker;

pub use config::{RouteToggles, ServiceConfig};
pub use foundation::error::{CanvasError, CanvasResult};
pub use grid::model::{GRID_LEN, GRID_SIDE, PixelGrid};
pub use grid::parse::{parse_grid, parse_tokens, strip_brackets};
pub use render::png::{PngImage, encode_png, reconstruct, render_png};
pub use render::raster::render_grid;
pub use render::settings::{MAX_SCALE, RenderSettings, Scaling};
pub use store::payload::{PayloadId, PayloadStore, StoredPayload};
pub use ticker::TickerSymbol;
