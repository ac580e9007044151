use std::path::Path;

use anyhow::Context;

use crate::{BlendResult, raster::buffer::RasterBuffer};

/// Decode encoded image bytes into a tightly packed straight-alpha RGBA8 raster.
pub fn decode_image(bytes: &[u8]) -> BlendResult<RasterBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    from_dynamic(dyn_img)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> BlendResult<RasterBuffer> {
    let dyn_img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        width = dyn_img.width(),
        height = dyn_img.height(),
        "loaded image"
    );
    from_dynamic(dyn_img)
}

/// Write a raster as PNG, dropping any row padding. Parent directories are created.
pub fn save_png(raster: &RasterBuffer, path: &Path) -> BlendResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &raster.to_packed_rgba8(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn from_dynamic(dyn_img: image::DynamicImage) -> BlendResult<RasterBuffer> {
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterBuffer::from_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
