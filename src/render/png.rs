use std::io::Cursor;

use anyhow::Context as _;
use image::{GrayImage, ImageFormat};

use crate::{
    foundation::error::CanvasResult,
    grid::{model::PixelGrid, parse::parse_grid},
    render::{raster::render_grid, settings::RenderSettings},
};

/// Encoded PNG bytes plus their pixel dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PngImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// PNG file bytes.
    pub bytes: Vec<u8>,
}

impl PngImage {
    /// MIME type of [`PngImage::bytes`].
    pub const CONTENT_TYPE: &'static str = "image/png";
}

/// Encode a grayscale image as an L8 PNG.
pub fn encode_png(img: &GrayImage) -> CanvasResult<PngImage> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("encode grayscale png")?;
    Ok(PngImage {
        width: img.width(),
        height: img.height(),
        bytes,
    })
}

/// Rasterize an already parsed grid and encode it.
pub fn render_png(grid: &PixelGrid, settings: &RenderSettings) -> CanvasResult<PngImage> {
    let img = render_grid(grid, settings)?;
    let png = encode_png(&img)?;
    tracing::debug!(bytes = png.bytes.len(), "rendered grid");
    Ok(png)
}

/// Full reconstruction: serialized grid text to PNG bytes.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn reconstruct(text: &str, settings: &RenderSettings) -> CanvasResult<PngImage> {
    let grid = parse_grid(text)?;
    render_png(&grid, settings)
}
