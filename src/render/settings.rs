use serde::{Deserialize, Serialize};

use crate::foundation::error::{CanvasError, CanvasResult};

/// Largest accepted nearest-neighbour upscale factor.
pub const MAX_SCALE: u32 = 16;

/// How grid intensities map onto 8-bit gray levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    /// Round and clamp each value into `0..=255`.
    #[default]
    Clamp,
    /// Stretch the grid's own min..max range onto `0..=255`.
    Auto,
}

/// Options controlling how a grid is rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Intensity mapping.
    pub scaling: Scaling,
    /// Integer nearest-neighbour upscale factor; 1 keeps the native 200×200 size.
    pub scale: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scaling: Scaling::Clamp,
            scale: 1,
        }
    }
}

impl RenderSettings {
    /// Reject settings the rasterizer cannot honour.
    pub fn validate(&self) -> CanvasResult<()> {
        if self.scale == 0 {
            return Err(CanvasError::validation("render scale must be non-zero"));
        }
        if self.scale > MAX_SCALE {
            return Err(CanvasError::validation(format!(
                "render scale must be at most {MAX_SCALE}, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
