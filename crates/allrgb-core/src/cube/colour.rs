// crates/allrgb-core/src/cube/colour.rs

/// One cell of the colour cube. Channel values live in `0..cube.side()`,
/// which is the full `0..=255` for the real 8-bit cube.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Integer Rec.601 luma in 0..=255 (for 8-bit channels).
    #[inline]
    pub fn luma(self) -> u8 {
        let y = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        (y / 1000) as u8
    }
}
