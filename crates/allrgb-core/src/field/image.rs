// crates/allrgb-core/src/field/image.rs

use crate::error::{AllRgbError, Result};
use crate::field::grid::FieldSource;

/// A decoded greyscale image used as the intensity source.
///
/// Samples are in `0..=maxval` (PNM convention); they are spread evenly over
/// `0..buckets`.
#[derive(Clone, Debug)]
pub struct LumaField {
    pub width: u32,
    pub height: u32,
    pub maxval: u16,
    pub buckets: u16,
    samples: Vec<u16>,
}

impl LumaField {
    pub fn new(width: u32, height: u32, maxval: u16, buckets: u16, samples: Vec<u16>) -> Result<Self> {
        if maxval == 0 {
            return Err(AllRgbError::Precondition("luma maxval must be non-zero".into()));
        }
        let n = width as usize * height as usize;
        if samples.len() != n {
            return Err(AllRgbError::Precondition(format!(
                "luma image has {} samples, expected {width}x{height}={n}",
                samples.len()
            )));
        }
        if let Some(&s) = samples.iter().find(|&&s| s > maxval) {
            return Err(AllRgbError::Precondition(format!(
                "luma sample {s} exceeds maxval {maxval}"
            )));
        }
        Ok(Self {
            width,
            height,
            maxval,
            buckets,
            samples,
        })
    }
}

impl FieldSource for LumaField {
    fn sample(&self, x: u32, y: u32) -> u16 {
        let s = self.samples[y as usize * self.width as usize + x as usize] as u32;
        (s * self.buckets as u32 / (self.maxval as u32 + 1)) as u16
    }
}
