use super::*;
use crate::grid::model::GRID_SIDE;

#[test]
fn clamp_maps_values_directly() {
    let grid = PixelGrid::from_fn(|r, c| match (r, c) {
        (0, 0) => -5.0,
        (0, 1) => 300.0,
        (0, 2) => 127.4,
        (0, 3) => 127.6,
        _ => 64.0,
    });
    let img = render_grid(&grid, &RenderSettings::default()).unwrap();
    assert_eq!(img.dimensions(), (GRID_SIDE as u32, GRID_SIDE as u32));
    assert_eq!(img.get_pixel(0, 0).0, [0]);
    assert_eq!(img.get_pixel(1, 0).0, [255]);
    assert_eq!(img.get_pixel(2, 0).0, [127]);
    assert_eq!(img.get_pixel(3, 0).0, [128]);
    assert_eq!(img.get_pixel(199, 199).0, [64]);
}

#[test]
fn rows_map_to_image_y() {
    let grid = PixelGrid::from_fn(|r, _| r as f64);
    let img = render_grid(&grid, &RenderSettings::default()).unwrap();
    assert_eq!(img.get_pixel(50, 10).0, [10]);
    assert_eq!(img.get_pixel(10, 50).0, [50]);
}

#[test]
fn auto_stretches_range() {
    let grid = PixelGrid::from_fn(|r, _| if r < 100 { 0.25 } else { 0.75 });
    let settings = RenderSettings {
        scaling: Scaling::Auto,
        scale: 1,
    };
    let img = render_grid(&grid, &settings).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0]);
    assert_eq!(img.get_pixel(0, 199).0, [255]);
}

#[test]
fn auto_on_uniform_grid_is_black() {
    let settings = RenderSettings {
        scaling: Scaling::Auto,
        scale: 1,
    };
    let img = render_grid(&PixelGrid::filled(42.0), &settings).unwrap();
    assert!(img.pixels().all(|p| p.0 == [0]));
}

#[test]
fn upscale_replicates_pixels() {
    let grid = PixelGrid::from_fn(|r, c| ((r + c) % 2) as f64 * 255.0);
    let settings = RenderSettings {
        scaling: Scaling::Clamp,
        scale: 3,
    };
    let img = render_grid(&grid, &settings).unwrap();
    assert_eq!(img.dimensions(), (600, 600));
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(img.get_pixel(x, y).0, [0]);
            assert_eq!(img.get_pixel(x + 3, y).0, [255]);
        }
    }
}

#[test]
fn invalid_scale_is_rejected() {
    for scale in [0, MAX_SCALE_PLUS_ONE] {
        let settings = RenderSettings {
            scaling: Scaling::Clamp,
            scale,
        };
        assert!(matches!(
            render_grid(&PixelGrid::filled(0.0), &settings).unwrap_err(),
            crate::CanvasError::Validation(_)
        ));
    }
}

const MAX_SCALE_PLUS_ONE: u32 = crate::render::settings::MAX_SCALE + 1;

#[test]
fn auto_handles_extreme_finite_range() {
    let grid = PixelGrid::from_fn(|r, _| if r == 0 { -f64::MAX } else { f64::MAX });
    let settings = RenderSettings {
        scaling: Scaling::Auto,
        scale: 1,
    };
    let img = render_grid(&grid, &settings).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0]);
    assert_eq!(img.get_pixel(0, 1).0, [255]);
}
