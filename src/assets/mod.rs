//! Image decode/encode between files and [`RasterBuffer`](crate::RasterBuffer).

pub(crate) mod decode;
