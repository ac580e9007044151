use crate::foundation::core::{Rgba8, RgbaF32};

/// Quantize a normalized color to packed RGBA8.
///
/// Each channel is clamped to `[0, 1]`, scaled by 255 and truncated. NaN channels map to 0.
pub fn to_packed(c: RgbaF32) -> Rgba8 {
    Rgba8 {
        r: quantize(c.r),
        g: quantize(c.g),
        b: quantize(c.b),
        a: quantize(c.a),
    }
}

/// Expand a packed RGBA8 color to normalized `[0, 1]` channels.
pub fn to_normalized(c: Rgba8) -> RgbaF32 {
    RgbaF32 {
        r: expand(c.r),
        g: expand(c.g),
        b: expand(c.b),
        a: expand(c.a),
    }
}

fn quantize(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

fn expand(v: u8) -> f32 {
    f32::from(v) / 255.0
}

impl From<Rgba8> for RgbaF32 {
    fn from(c: Rgba8) -> Self {
        to_normalized(c)
    }
}

impl From<RgbaF32> for Rgba8 {
    fn from(c: RgbaF32) -> Self {
        to_packed(c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/convert.rs"]
mod tests;
