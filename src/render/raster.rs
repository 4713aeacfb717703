use image::{GrayImage, Luma};

use crate::{
    foundation::error::CanvasResult,
    grid::model::PixelGrid,
    render::settings::{RenderSettings, Scaling},
};

fn clamp_level(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Rasterize `grid` as an 8-bit single-channel image with no decoration.
///
/// Output is `200 * scale` pixels on each side; upscaling replicates pixels
/// (nearest-neighbour), so every output pixel is one of the grid's levels.
pub fn render_grid(grid: &PixelGrid, settings: &RenderSettings) -> CanvasResult<GrayImage> {
    settings.validate()?;

    let levels: Vec<u8> = match settings.scaling {
        Scaling::Clamp => grid.values().iter().map(|&v| clamp_level(v)).collect(),
        Scaling::Auto => {
            // Halved so extreme finite ranges cannot overflow to infinity.
            let (lo, hi) = grid.min_max();
            let span = hi * 0.5 - lo * 0.5;
            if span > 0.0 {
                grid.values()
                    .iter()
                    .map(|&v| clamp_level((v * 0.5 - lo * 0.5) / span * 255.0))
                    .collect()
            } else {
                vec![0; grid.values().len()]
            }
        }
    };

    let (w, h) = (grid.width() as u32, grid.height() as u32);
    let mut img = GrayImage::new(w, h);
    for (px, level) in img.pixels_mut().zip(levels) {
        *px = Luma([level]);
    }

    if settings.scale == 1 {
        return Ok(img);
    }
    let s = settings.scale;
    Ok(GrayImage::from_fn(w * s, h * s, |x, y| {
        *img.get_pixel(x / s, y / s)
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
