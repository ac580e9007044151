//! Source-over compositing, per pixel and per raster.

pub(crate) mod over;
pub(crate) mod raster;
