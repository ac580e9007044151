use super::*;

#[test]
fn packed_normalized_packed_is_identity_for_every_channel_value() {
    for v in 0..=255u8 {
        let px = Rgba8::new(v, v, v, v);
        assert_eq!(to_packed(to_normalized(px)), px, "value {v}");
    }
}

#[test]
fn channels_do_not_bleed_into_each_other() {
    let px = Rgba8::new(0, 64, 191, 255);
    assert_eq!(to_packed(to_normalized(px)), px);
}

#[test]
fn normalized_endpoints_are_exact() {
    assert_eq!(
        to_normalized(Rgba8::new(0, 255, 0, 255)),
        RgbaF32::new(0.0, 1.0, 0.0, 1.0)
    );
}

#[test]
fn out_of_range_values_clamp_instead_of_wrapping() {
    let px = to_packed(RgbaF32::new(-0.5, 1.5, -100.0, 42.0));
    assert_eq!(px, Rgba8::new(0, 255, 0, 255));
}

#[test]
fn infinities_clamp_to_endpoints() {
    let px = to_packed(RgbaF32::new(f32::NEG_INFINITY, f32::INFINITY, 0.0, 1.0));
    assert_eq!(px, Rgba8::new(0, 255, 0, 255));
}

#[test]
fn nan_quantizes_to_zero() {
    let px = to_packed(RgbaF32::new(f32::NAN, 1.0, f32::NAN, 1.0));
    assert_eq!(px, Rgba8::new(0, 255, 0, 255));
}

#[test]
fn packing_truncates_toward_zero() {
    // 0.999 * 255 = 254.745
    assert_eq!(to_packed(RgbaF32::new(0.999, 0.5, 0.0, 0.0)).r, 254);
    assert_eq!(to_packed(RgbaF32::new(0.999, 0.5, 0.0, 0.0)).g, 127);
}

#[test]
fn from_impls_match_free_functions() {
    let px = Rgba8::new(10, 20, 30, 40);
    let n: RgbaF32 = px.into();
    assert_eq!(n, to_normalized(px));
    let back: Rgba8 = n.into();
    assert_eq!(back, px);
}
