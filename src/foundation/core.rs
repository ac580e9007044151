/// Bytes per packed RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;
/// Bits per channel of a packed RGBA8 pixel.
pub const BITS_PER_COMPONENT: u32 = 8;
/// Bits per packed RGBA8 pixel.
pub const BITS_PER_PIXEL: u32 = 32;

/// Packed straight-alpha RGBA8 (r,g,b independent of a).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Normalized straight-alpha color. Channels are nominally in `[0, 1]` but are not
/// clamped on construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbaF32 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RgbaF32 {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn has_nan(self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan() || self.a.is_nan()
    }
}
