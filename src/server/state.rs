use crate::{
    config::{RouteToggles, ServiceConfig},
    foundation::error::CanvasResult,
    render::settings::RenderSettings,
    store::payload::PayloadStore,
};

/// Shared per-service state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub(crate) render: RenderSettings,
    pub(crate) routes: RouteToggles,
    pub(crate) max_body_bytes: usize,
    pub(crate) store: PayloadStore,
}

impl AppState {
    /// Build state from a config, opening the payload store.
    pub fn new(config: &ServiceConfig) -> CanvasResult<Self> {
        Ok(Self {
            render: config.render,
            routes: config.routes,
            max_body_bytes: config.max_body_bytes,
            store: PayloadStore::open(&config.data_dir)?,
        })
    }
}
