//! blendfunc composites one straight-alpha RGBA8 raster over another with the Porter-Duff
//! source-over operator.
//!
//! # Pipeline overview
//!
//! 1. **Load** (optional): decode two images into [`RasterBuffer`]s, directly or through a
//!    caller-owned [`Gallery`].
//! 2. **Composite**: [`composite_over`] converts every pixel pair to normalized color,
//!    applies [`blend_over`], and quantizes back to RGBA8 in a fresh raster.
//! 3. **Save** (optional): [`save_png`].
//!
//! The compositor is a pure function: inputs are borrowed immutably, the output is newly
//! allocated, and no state survives between calls. Mismatched rasters are rejected with
//! [`BlendError::Precondition`] before any pixel is processed.
//!
//! ```
//! use blendfunc::{Rgba8, RasterBuffer, composite_over};
//!
//! let top = RasterBuffer::filled(2, 2, 8, Rgba8::new(255, 0, 0, 255))?;
//! let bottom = RasterBuffer::filled(2, 2, 8, Rgba8::new(0, 255, 0, 255))?;
//! let out = composite_over(&top, &bottom)?;
//! assert_eq!(out.pixel(1, 1), Some(Rgba8::new(255, 0, 0, 255)));
//! # Ok::<(), blendfunc::BlendError>(())
//! ```
#![forbid(unsafe_code)]

mod assets;
mod color;
mod composite;
mod foundation;
mod gallery;
mod raster;

pub use assets::decode::{decode_image, load_image, save_png};
pub use color::convert::{to_normalized, to_packed};
pub use composite::over::blend_over;
pub use composite::raster::{CompositeThreading, composite_over, composite_over_with};
pub use foundation::core::{BITS_PER_COMPONENT, BITS_PER_PIXEL, BYTES_PER_PIXEL, Rgba8, RgbaF32};
pub use foundation::error::{BlendError, BlendResult};
pub use gallery::table::{Gallery, GalleryEntry, GallerySelection};
pub use raster::buffer::RasterBuffer;
