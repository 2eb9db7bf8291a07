// crates/allrgb-core/src/bucket/permute.rs
//
// Slot -> colour-index table: identity globally, shuffled inside each bucket.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::bucket::histogram::CumulativeOffsets;
use crate::error::{AllRgbError, Result};

/// Uniform integer draws. `next_below(n)` returns a value in `0..n`, n >= 1.
pub trait UniformSource {
    fn next_below(&mut self, n: u32) -> u32;
}

/// Seeded xoshiro256++; same seed, same draws on every platform.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: Xoshiro256PlusPlus,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededSource {
    #[inline]
    fn next_below(&mut self, n: u32) -> u32 {
        self.rng.gen_range(0..n)
    }
}

/// Durstenfeld shuffle of `slice` in place.
pub fn shuffle_slice<S: UniformSource + ?Sized>(slice: &mut [u32], src: &mut S) {
    for i in (1..slice.len()).rev() {
        let j = src.next_below(i as u32 + 1) as usize;
        slice.swap(i, j);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    table: Vec<u32>,
}

impl PermutationTable {
    pub fn identity(n: u32) -> Self {
        Self {
            table: (0..n).collect(),
        }
    }

    /// Shuffle every bucket range independently, lowest bucket first.
    pub fn shuffle_buckets<S: UniformSource + ?Sized>(
        &mut self,
        offsets: &CumulativeOffsets,
        src: &mut S,
    ) -> Result<()> {
        offsets.check_total(self.len())?;
        for b in 0..offsets.buckets() {
            let r = offsets.range(b);
            shuffle_slice(&mut self.table[r.start as usize..r.end as usize], src);
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, slot: u32) -> u32 {
        self.table[slot as usize]
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.table.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Every bucket range must map onto itself, each index exactly once.
    pub fn validate(&self, offsets: &CumulativeOffsets) -> Result<()> {
        offsets.check_total(self.len())?;
        let mut seen = vec![false; self.table.len()];
        for b in 0..offsets.buckets() {
            let r = offsets.range(b);
            for slot in r.clone() {
                let v = self.table[slot as usize];
                if !r.contains(&v) {
                    return Err(AllRgbError::Consistency(format!(
                        "slot {slot} of bucket {b} maps to {v}, outside {}..{}",
                        r.start, r.end
                    )));
                }
                if std::mem::replace(&mut seen[v as usize], true) {
                    return Err(AllRgbError::Consistency(format!(
                        "index {v} appears twice in bucket {b}"
                    )));
                }
            }
        }
        Ok(())
    }
}
