use crate::foundation::{
    core::{BITS_PER_COMPONENT, BITS_PER_PIXEL, BYTES_PER_PIXEL, Rgba8},
    error::{BlendError, BlendResult},
};

/// Owned row-major raster of packed pixels.
///
/// Pixel `(x, y)` lives at byte offset `y * stride + x * 4` with channels in R,G,B,A order.
/// `stride` may exceed `width * 4`; trailing row bytes are padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    stride: usize,
    bits_per_component: u32,
    bits_per_pixel: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Wrap existing bytes with explicit geometry and bit depth.
    ///
    /// Only geometry is validated here; the bit depth is recorded as given so that the
    /// compositor can reject unsupported formats with a precondition error.
    pub fn new(
        width: u32,
        height: u32,
        stride: usize,
        bits_per_component: u32,
        bits_per_pixel: u32,
        data: Vec<u8>,
    ) -> BlendResult<Self> {
        let min_stride = packed_row_bytes(width)?;
        if stride < min_stride {
            return Err(BlendError::validation(format!(
                "raster stride {stride} is smaller than width * 4 ({min_stride})"
            )));
        }
        let expected = stride
            .checked_mul(height as usize)
            .ok_or_else(|| BlendError::validation("raster byte size overflows usize"))?;
        if data.len() != expected {
            return Err(BlendError::validation(format!(
                "raster data length {} does not match stride * height ({expected})",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            bits_per_component,
            bits_per_pixel,
            data,
        })
    }

    /// Tightly packed RGBA8 bytes (`stride == width * 4`).
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> BlendResult<Self> {
        let stride = packed_row_bytes(width)?;
        Self::new(width, height, stride, BITS_PER_COMPONENT, BITS_PER_PIXEL, data)
    }

    /// Zero-filled RGBA8 raster with the given stride.
    pub fn zeroed(width: u32, height: u32, stride: usize) -> BlendResult<Self> {
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| BlendError::validation("raster byte size overflows usize"))?;
        Self::new(
            width,
            height,
            stride,
            BITS_PER_COMPONENT,
            BITS_PER_PIXEL,
            vec![0u8; len],
        )
    }

    /// RGBA8 raster filled with a single color (padding bytes stay zero).
    pub fn filled(width: u32, height: u32, stride: usize, color: Rgba8) -> BlendResult<Self> {
        let mut out = Self::zeroed(width, height, stride)?;
        let row_bytes = out.row_bytes();
        if stride == 0 {
            return Ok(out);
        }
        for row in out.data.chunks_exact_mut(stride) {
            for px in row[..row_bytes].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&color.to_array());
            }
        }
        Ok(out)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn bits_per_component(&self) -> u32 {
        self.bits_per_component
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Bytes of pixel data per row, excluding padding.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn is_rgba8(&self) -> bool {
        self.bits_per_component == BITS_PER_COMPONENT && self.bits_per_pixel == BITS_PER_PIXEL
    }

    /// Byte offset of pixel `(x, y)`, or `None` when out of bounds.
    pub fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride + x as usize * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let off = self.pixel_offset(x, y)?;
        let px = self.data.get(off..off + BYTES_PER_PIXEL)?;
        Some(Rgba8::new(px[0], px[1], px[2], px[3]))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) -> BlendResult<()> {
        let off = self.pixel_offset(x, y).ok_or_else(|| {
            BlendError::validation(format!(
                "pixel ({x}, {y}) outside {}x{} raster",
                self.width, self.height
            ))
        })?;
        self.data[off..off + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Copy of the pixel data with row padding removed.
    pub fn to_packed_rgba8(&self) -> Vec<u8> {
        let row_bytes = self.row_bytes();
        if row_bytes == self.stride {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(row_bytes * self.height as usize);
        for row in self.data.chunks_exact(self.stride) {
            out.extend_from_slice(&row[..row_bytes]);
        }
        out
    }

    /// Check that `other` can be composited with `self`.
    ///
    /// Width, height and stride must match, and both rasters must be 8 bits per
    /// component / 32 bits per pixel.
    pub fn check_compatible(&self, other: &Self) -> BlendResult<()> {
        for (label, r) in [("top", self), ("bottom", other)] {
            if !r.is_rgba8() {
                return Err(BlendError::precondition(format!(
                    "{label} raster must be {BITS_PER_COMPONENT} bits per component and \
                     {BITS_PER_PIXEL} bits per pixel, got {}/{}",
                    r.bits_per_component, r.bits_per_pixel
                )));
            }
        }
        if self.width != other.width || self.height != other.height {
            return Err(BlendError::precondition(format!(
                "raster dimensions differ: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        if self.stride != other.stride {
            return Err(BlendError::precondition(format!(
                "raster strides differ: {} vs {}",
                self.stride, other.stride
            )));
        }
        Ok(())
    }
}

fn packed_row_bytes(width: u32) -> BlendResult<usize> {
    (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| BlendError::validation("raster width overflows usize"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
