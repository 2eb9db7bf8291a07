// crates/allrgb-core/src/bucket/histogram.rs

use std::ops::Range;

use crate::error::{AllRgbError, Result};
use crate::field::grid::IntensityField;

/// Pixel count per intensity bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    /// Count labels. `IntensityField` already guarantees every label is
    /// inside `0..field.buckets()`.
    pub fn build(field: &IntensityField) -> Self {
        let mut counts = vec![0u32; field.buckets() as usize];
        for &v in field.values() {
            counts[v as usize] += 1;
        }
        Self { counts }
    }

    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline]
    pub fn buckets(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn non_empty(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// (bucket, count) of the fullest bucket; lowest bucket wins ties.
    pub fn largest(&self) -> Option<(usize, u32)> {
        self.counts
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }
}

/// Inclusive prefix sums of a histogram. Bucket `b` owns
/// `ends[b-1]..ends[b]` of the flattened colour-index space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeOffsets {
    ends: Vec<u32>,
}

impl CumulativeOffsets {
    pub fn from_histogram(h: &Histogram) -> Self {
        let mut acc = 0u32;
        let ends = h
            .counts()
            .iter()
            .map(|&c| {
                acc += c;
                acc
            })
            .collect();
        Self { ends }
    }

    #[inline]
    pub fn ends(&self) -> &[u32] {
        &self.ends
    }

    #[inline]
    pub fn buckets(&self) -> usize {
        self.ends.len()
    }

    #[inline]
    pub fn start(&self, bucket: usize) -> u32 {
        if bucket == 0 {
            0
        } else {
            self.ends[bucket - 1]
        }
    }

    #[inline]
    pub fn end(&self, bucket: usize) -> u32 {
        self.ends[bucket]
    }

    #[inline]
    pub fn range(&self, bucket: usize) -> Range<u32> {
        self.start(bucket)..self.end(bucket)
    }

    pub fn total(&self) -> u32 {
        self.ends.last().copied().unwrap_or(0)
    }

    /// The partition must cover exactly `0..n`.
    pub fn check_total(&self, n: u32) -> Result<()> {
        let total = self.total();
        if total != n {
            return Err(AllRgbError::Consistency(format!(
                "bucket ranges cover {total} slots, expected {n}"
            )));
        }
        Ok(())
    }
}
