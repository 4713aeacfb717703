pub mod png;
pub mod raster;
pub mod settings;
