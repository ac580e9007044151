use crate::foundation::core::RgbaF32;

/// Porter-Duff source-over of two straight-alpha colors.
///
/// `top` is the layer being painted, `bottom` the layer already present. The operator is
/// not symmetric: swapping the arguments changes the result whenever either alpha is
/// below one.
///
/// ```text
/// Ra   = Sa + Da * (1 - Sa)
/// Rrgb = (Srgb * Sa + Drgb * Da * (1 - Sa)) / Ra
/// ```
///
/// When `Ra == 0` both layers are fully transparent and the result is transparent black.
pub fn blend_over(top: RgbaF32, bottom: RgbaF32) -> RgbaF32 {
    let sa = top.a;
    let inv = 1.0 - sa;
    let ra = sa + bottom.a * inv;
    if ra == 0.0 {
        return RgbaF32::new(0.0, 0.0, 0.0, ra);
    }

    let db = bottom.a * inv;
    let mix = |s: f32, d: f32| (s * sa + d * db) / ra;
    RgbaF32 {
        r: mix(top.r, bottom.r),
        g: mix(top.g, bottom.g),
        b: mix(top.b, bottom.b),
        a: ra,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/over.rs"]
mod tests;
