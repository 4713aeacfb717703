use crate::foundation::error::{CanvasError, CanvasResult};

/// Side length of the square pixel grid.
pub const GRID_SIDE: usize = 200;
/// Number of values in a pixel grid.
pub const GRID_LEN: usize = GRID_SIDE * GRID_SIDE;

/// Fixed 200×200 grid of floating-point intensities in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    values: Vec<f64>,
}

impl PixelGrid {
    /// Build a grid from a flat row-major sequence of exactly [`GRID_LEN`] values.
    pub fn from_values(values: Vec<f64>) -> CanvasResult<Self> {
        if values.len() != GRID_LEN {
            return Err(CanvasError::shape(GRID_LEN, values.len()));
        }
        Ok(Self { values })
    }

    /// Grid filled with one intensity.
    pub fn filled(value: f64) -> Self {
        Self {
            values: vec![value; GRID_LEN],
        }
    }

    /// Build a grid by sampling `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(GRID_LEN);
        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                values.push(f(row, col));
            }
        }
        Self { values }
    }

    /// Number of rows (always [`GRID_SIDE`]).
    pub fn height(&self) -> usize {
        GRID_SIDE
    }

    /// Number of columns (always [`GRID_SIDE`]).
    pub fn width(&self) -> usize {
        GRID_SIDE
    }

    #[inline]
    /// Intensity at (`row`, `col`). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < GRID_SIDE && col < GRID_SIDE, "grid index out of range");
        self.values[row * GRID_SIDE + col]
    }

    /// Row slices in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(GRID_SIDE)
    }

    /// Flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest intensity.
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Comma-separated encoding without brackets, accepted back by
    /// [`crate::parse_grid`].
    pub fn to_serialized(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
