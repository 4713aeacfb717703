use std::{
    fs::File,
    io::BufReader,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{CanvasError, CanvasResult},
    render::settings::RenderSettings,
};

/// Which route groups the service mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteToggles {
    /// Canvas intake, payload results and grid plotting.
    pub canvas: bool,
    /// Ticker symbol intake.
    pub ticker: bool,
}

impl Default for RouteToggles {
    fn default() -> Self {
        Self {
            canvas: true,
            ticker: true,
        }
    }
}

/// Service configuration. Every field has a default, so an empty JSON object
/// is a valid config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Socket address to listen on.
    pub bind: SocketAddr,
    /// Directory holding stored canvas payloads.
    pub data_dir: PathBuf,
    /// Upper bound on request body size in bytes.
    pub max_body_bytes: usize,
    /// Rasterization options for plotted grids.
    pub render: RenderSettings,
    /// Enabled route groups.
    pub routes: RouteToggles,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            data_dir: PathBuf::from("images"),
            max_body_bytes: 4 * 1024 * 1024,
            render: RenderSettings::default(),
            routes: RouteToggles::default(),
        }
    }
}

impl ServiceConfig {
    /// Read a config from a JSON file.
    pub fn from_json_file(path: &Path) -> CanvasResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Check the config before the service starts.
    pub fn validate(&self) -> CanvasResult<()> {
        if self.max_body_bytes == 0 {
            return Err(CanvasError::validation("max_body_bytes must be non-zero"));
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(CanvasError::validation("data_dir must be non-empty"));
        }
        if !self.routes.canvas && !self.routes.ticker {
            return Err(CanvasError::validation(
                "at least one route group must be enabled",
            ));
        }
        self.render.validate()
    }
}
