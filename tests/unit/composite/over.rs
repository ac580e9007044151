use super::*;

fn assert_close(got: RgbaF32, want: RgbaF32) {
    let pairs = [
        (got.r, want.r),
        (got.g, want.g),
        (got.b, want.b),
        (got.a, want.a),
    ];
    for (g, w) in pairs {
        assert!((g - w).abs() <= 1e-6, "got {got:?}, want {want:?}");
    }
}

#[test]
fn opaque_top_replaces_bottom() {
    let top = RgbaF32::new(1.0, 0.0, 0.0, 1.0);
    let bottom = RgbaF32::new(0.0, 1.0, 0.0, 1.0);
    assert_eq!(blend_over(top, bottom), top);
}

#[test]
fn transparent_top_passes_bottom_through() {
    let top = RgbaF32::new(0.3, 0.7, 0.9, 0.0);
    let bottom = RgbaF32::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(blend_over(top, bottom), bottom);
}

#[test]
fn both_transparent_is_black_without_nan() {
    let top = RgbaF32::new(0.2, 0.4, 0.6, 0.0);
    let bottom = RgbaF32::new(0.9, 0.8, 0.7, 0.0);
    let out = blend_over(top, bottom);
    assert!(!out.has_nan());
    assert_eq!(out, RgbaF32::TRANSPARENT);
}

#[test]
fn half_alpha_red_over_opaque_blue_is_magenta() {
    let top = RgbaF32::new(1.0, 0.0, 0.0, 0.5);
    let bottom = RgbaF32::new(0.0, 0.0, 1.0, 1.0);
    assert_close(
        blend_over(top, bottom),
        RgbaF32::new(0.5, 0.0, 0.5, 1.0),
    );
}

#[test]
fn top_over_transparent_bottom_keeps_top_color() {
    let top = RgbaF32::new(0.25, 0.5, 0.75, 0.4);
    let out = blend_over(top, RgbaF32::TRANSPARENT);
    assert_close(out, top);
}

#[test]
fn argument_order_matters_for_partial_alpha() {
    let a = RgbaF32::new(1.0, 0.0, 0.0, 0.5);
    let b = RgbaF32::new(0.0, 0.0, 1.0, 0.5);
    let ab = blend_over(a, b);
    let ba = blend_over(b, a);
    assert_close(ab, RgbaF32::new(2.0 / 3.0, 0.0, 1.0 / 3.0, 0.75));
    assert_close(ba, RgbaF32::new(1.0 / 3.0, 0.0, 2.0 / 3.0, 0.75));
}

#[test]
fn result_alpha_is_never_below_either_input() {
    for sa in [0.0f32, 0.1, 0.5, 0.9, 1.0] {
        for da in [0.0f32, 0.1, 0.5, 0.9, 1.0] {
            let out = blend_over(
                RgbaF32::new(0.5, 0.5, 0.5, sa),
                RgbaF32::new(0.5, 0.5, 0.5, da),
            );
            assert!(out.a + 1e-6 >= sa.max(da), "sa={sa} da={da} ra={}", out.a);
            assert!(out.a <= 1.0 + 1e-6);
        }
    }
}
