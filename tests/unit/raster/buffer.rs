use super::*;

#[test]
fn from_rgba8_uses_tight_stride() {
    let r = RasterBuffer::from_rgba8(3, 2, vec![0u8; 3 * 2 * 4]).unwrap();
    assert_eq!(r.stride(), 12);
    assert_eq!(r.row_bytes(), 12);
    assert!(r.is_rgba8());
}

#[test]
fn new_rejects_stride_smaller_than_row() {
    let err = RasterBuffer::new(4, 1, 15, 8, 32, vec![0u8; 15]).unwrap_err();
    assert!(matches!(err, BlendError::Validation(_)));
}

#[test]
fn new_rejects_wrong_data_length() {
    let err = RasterBuffer::new(2, 2, 8, 8, 32, vec![0u8; 15]).unwrap_err();
    assert!(err.to_string().contains("stride * height"));
}

#[test]
fn new_records_unsupported_bit_depth_without_failing() {
    let r = RasterBuffer::new(1, 1, 8, 16, 64, vec![0u8; 8]).unwrap();
    assert!(!r.is_rgba8());
}

#[test]
fn pixel_addressing_honors_stride_padding() {
    let mut r = RasterBuffer::zeroed(2, 2, 12).unwrap();
    r.set_pixel(1, 1, Rgba8::new(1, 2, 3, 4)).unwrap();
    assert_eq!(r.pixel_offset(1, 1), Some(12 + 4));
    assert_eq!(&r.as_bytes()[16..20], &[1, 2, 3, 4]);
    assert_eq!(r.pixel(1, 1), Some(Rgba8::new(1, 2, 3, 4)));
    assert_eq!(r.pixel(2, 0), None);
    assert_eq!(r.pixel(0, 2), None);
}

#[test]
fn set_pixel_out_of_bounds_is_an_error() {
    let mut r = RasterBuffer::zeroed(1, 1, 4).unwrap();
    assert!(r.set_pixel(1, 0, Rgba8::TRANSPARENT).is_err());
}

#[test]
fn filled_leaves_padding_zero() {
    let r = RasterBuffer::filled(1, 2, 8, Rgba8::new(9, 8, 7, 6)).unwrap();
    assert_eq!(r.as_bytes(), &[9, 8, 7, 6, 0, 0, 0, 0, 9, 8, 7, 6, 0, 0, 0, 0]);
}

#[test]
fn to_packed_rgba8_strips_padding() {
    let r = RasterBuffer::filled(1, 2, 8, Rgba8::new(9, 8, 7, 6)).unwrap();
    assert_eq!(r.to_packed_rgba8(), vec![9, 8, 7, 6, 9, 8, 7, 6]);
}

#[test]
fn check_compatible_accepts_matching_rasters() {
    let a = RasterBuffer::zeroed(3, 3, 16).unwrap();
    let b = RasterBuffer::zeroed(3, 3, 16).unwrap();
    a.check_compatible(&b).unwrap();
}

#[test]
fn check_compatible_rejects_each_mismatch() {
    let base = RasterBuffer::zeroed(2, 2, 8).unwrap();
    let wider = RasterBuffer::zeroed(3, 2, 12).unwrap();
    let taller = RasterBuffer::zeroed(2, 3, 8).unwrap();
    let padded = RasterBuffer::zeroed(2, 2, 12).unwrap();
    let deep = RasterBuffer::new(2, 2, 8, 16, 64, vec![0u8; 16]).unwrap();

    for other in [&wider, &taller, &padded, &deep] {
        let err = base.check_compatible(other).unwrap_err();
        assert!(err.is_precondition(), "{err}");
    }
    assert!(deep.check_compatible(&base).unwrap_err().is_precondition());
}
