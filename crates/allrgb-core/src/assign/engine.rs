// crates/allrgb-core/src/assign/engine.rs
//
// Single pass: pixel -> bucket slot -> permuted index -> colour.
//
// Visitation order is row-major (y outer, x inner). Within a bucket the
// first pixel visited claims the highest slot of that bucket's range.

use log::debug;

use crate::assign::grid::OutputGrid;
use crate::bucket::histogram::{CumulativeOffsets, Histogram};
use crate::bucket::permute::PermutationTable;
use crate::cube::enumerate::Enumerator;
use crate::error::{AllRgbError, Result};
use crate::field::grid::IntensityField;

pub struct AssignmentEngine<'a> {
    offsets: &'a CumulativeOffsets,
    table: &'a PermutationTable,
    enumerator: Enumerator,
    /// Live per-bucket counters, starting at the histogram counts.
    remaining: Vec<u32>,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(
        histogram: &Histogram,
        offsets: &'a CumulativeOffsets,
        table: &'a PermutationTable,
        enumerator: Enumerator,
    ) -> Result<Self> {
        if histogram.buckets() != offsets.buckets() {
            return Err(AllRgbError::Consistency(format!(
                "histogram has {} buckets, offsets have {}",
                histogram.buckets(),
                offsets.buckets()
            )));
        }
        let n = enumerator.cube.colours();
        if table.len() != n {
            return Err(AllRgbError::Consistency(format!(
                "permutation table has {} entries, cube has {n} colours",
                table.len()
            )));
        }
        table.validate(offsets)?;

        Ok(Self {
            offsets,
            table,
            enumerator,
            remaining: histogram.counts().to_vec(),
        })
    }

    /// Take the next free slot of `bucket`. Running dry means the histogram
    /// and the field disagree.
    pub fn claim_slot(&mut self, bucket: usize, x: u32, y: u32) -> Result<u32> {
        let left = self.remaining.get_mut(bucket).ok_or_else(|| {
            AllRgbError::Consistency(format!("pixel ({x},{y}) has unknown bucket {bucket}"))
        })?;
        if *left == 0 {
            return Err(AllRgbError::Consistency(format!(
                "bucket {bucket} exhausted at pixel ({x},{y})"
            )));
        }
        *left -= 1;
        Ok(self.offsets.start(bucket) + *left)
    }

    pub fn run(mut self, field: &IntensityField) -> Result<OutputGrid> {
        if field.buckets() as usize != self.remaining.len() {
            return Err(AllRgbError::Precondition(format!(
                "field has {} buckets, histogram has {}",
                field.buckets(),
                self.remaining.len()
            )));
        }
        let pixels = field.width() as u64 * field.height() as u64;
        if pixels != self.table.len() as u64 {
            return Err(AllRgbError::Precondition(format!(
                "field has {pixels} pixels, cube has {} colours",
                self.table.len()
            )));
        }

        let mut grid = OutputGrid::new(field.width(), field.height());
        for y in 0..field.height() {
            for x in 0..field.width() {
                let bucket = field.get(x, y) as usize;
                let slot = self.claim_slot(bucket, x, y)?;
                let index = self.table.get(slot);
                grid.set(x, y, self.enumerator.colour_at(index)?);
            }
        }

        if let Some((b, &left)) = self.remaining.iter().enumerate().find(|&(_, &c)| c != 0) {
            return Err(AllRgbError::Consistency(format!(
                "bucket {b} still has {left} unclaimed slots after the pass"
            )));
        }
        debug!("assigned {pixels} pixels");
        Ok(grid)
    }
}
