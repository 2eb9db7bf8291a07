// crates/allrgb-core/src/cube/enumerate.rs
//
// Total orderings of the colour cube: index <-> colour, both directions exact.

use crate::cube::colour::Rgb;
use crate::error::{AllRgbError, Result};

/// A colour cube with `bits` bits per channel: side = 2^bits, side^3 colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    bits: u8,
}

impl Cube {
    /// The real allrgb cube: 256^3 = 16_777_216 colours.
    pub const FULL: Cube = Cube { bits: 8 };

    pub fn new(bits: u8) -> Result<Self> {
        if !(1..=8).contains(&bits) {
            return Err(AllRgbError::Precondition(format!(
                "cube bits must be in 1..=8, got {bits}"
            )));
        }
        Ok(Self { bits })
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.bits
    }

    #[inline]
    pub fn side(self) -> u32 {
        1u32 << self.bits
    }

    /// Number of colours in the cube (N).
    #[inline]
    pub fn colours(self) -> u32 {
        1u32 << (3 * self.bits as u32)
    }

    #[inline]
    pub fn max_channel(self) -> u8 {
        (self.side() - 1) as u8
    }

    #[inline]
    pub fn contains(self, c: Rgb) -> bool {
        let side = self.side();
        (c.r as u32) < side && (c.g as u32) < side && (c.b as u32) < side
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ordering {
    /// Channel-major radix-`side` digits: r is the most significant.
    Sequential,
    /// Bit-interleaved Z-order: plane i puts r, g, b at bits 3i, 3i+1, 3i+2.
    Morton,
}

/// Maps indices in `0..cube.colours()` to colours and back.
///
/// `descending` walks the chosen ordering backwards, so index 0 is the
/// brightest corner instead of black.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Enumerator {
    pub cube: Cube,
    pub ordering: Ordering,
    pub descending: bool,
}

impl Enumerator {
    pub fn new(cube: Cube, ordering: Ordering, descending: bool) -> Self {
        Self {
            cube,
            ordering,
            descending,
        }
    }

    pub fn colour_at(&self, index: u32) -> Result<Rgb> {
        let n = self.cube.colours();
        if index >= n {
            return Err(AllRgbError::Precondition(format!(
                "colour index {index} out of range (cube has {n} colours)"
            )));
        }
        let i = if self.descending { n - 1 - index } else { index };
        Ok(match self.ordering {
            Ordering::Sequential => sequential_decode(self.cube.bits, i),
            Ordering::Morton => morton_decode(self.cube.bits, i),
        })
    }

    pub fn index_of(&self, c: Rgb) -> Result<u32> {
        if !self.cube.contains(c) {
            return Err(AllRgbError::Precondition(format!(
                "colour {:?} outside {}-bit cube",
                c, self.cube.bits
            )));
        }
        let i = match self.ordering {
            Ordering::Sequential => sequential_encode(self.cube.bits, c),
            Ordering::Morton => morton_encode(self.cube.bits, c),
        };
        let n = self.cube.colours();
        Ok(if self.descending { n - 1 - i } else { i })
    }
}

#[inline]
fn sequential_encode(bits: u8, c: Rgb) -> u32 {
    let s = bits as u32;
    ((c.r as u32) << (2 * s)) | ((c.g as u32) << s) | c.b as u32
}

#[inline]
fn sequential_decode(bits: u8, index: u32) -> Rgb {
    let s = bits as u32;
    let mask = (1u32 << s) - 1;
    Rgb::new(
        ((index >> (2 * s)) & mask) as u8,
        ((index >> s) & mask) as u8,
        (index & mask) as u8,
    )
}

/// Interleave bit plane i of (r, g, b) into bits (3i, 3i+1, 3i+2).
pub fn morton_encode(bits: u8, c: Rgb) -> u32 {
    let (r, g, b) = (c.r as u32, c.g as u32, c.b as u32);
    let mut code = 0u32;
    for i in 0..bits as u32 {
        code |= ((r >> i) & 1) << (3 * i);
        code |= ((g >> i) & 1) << (3 * i + 1);
        code |= ((b >> i) & 1) << (3 * i + 2);
    }
    code
}

pub fn morton_decode(bits: u8, code: u32) -> Rgb {
    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    for i in 0..bits as u32 {
        r |= ((code >> (3 * i)) & 1) << i;
        g |= ((code >> (3 * i + 1)) & 1) << i;
        b |= ((code >> (3 * i + 2)) & 1) << i;
    }
    Rgb::new(r as u8, g as u8, b as u8)
}
