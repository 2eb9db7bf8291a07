// crates/allrgb-core/src/plan/plan.rs

use crate::cube::enumerate::{Cube, Enumerator, Ordering};
use crate::error::Result;
use crate::field::julia::JuliaParams;

/// Everything that determines one run. Two equal plans render identical grids.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub version: u16,
    /// Seed for the per-bucket shuffle; ignored when `shuffle` is off.
    pub seed: u64,

    /// Bits per channel: 8 for the real 256^3 cube.
    pub cube_bits: u8,
    /// Intensity classes (B).
    pub buckets: u16,
    pub width: u32,
    pub height: u32,

    pub ordering: Ordering,
    pub descending: bool,
    pub shuffle: bool,

    pub julia: JuliaParams,
}

impl Plan {
    pub fn cube(&self) -> Result<Cube> {
        Cube::new(self.cube_bits)
    }

    pub fn enumerator(&self) -> Result<Enumerator> {
        Ok(Enumerator::new(self.cube()?, self.ordering, self.descending))
    }
}
