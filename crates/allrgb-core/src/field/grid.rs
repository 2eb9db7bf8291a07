// crates/allrgb-core/src/field/grid.rs

use crate::error::{AllRgbError, Result};
use crate::validate::validate_buckets;

/// Anything that can label a pixel with an intensity bucket in `0..buckets`.
///
/// The core never looks at how the value was derived; it only checks the range.
pub trait FieldSource {
    fn sample(&self, x: u32, y: u32) -> u16;
}

impl<F> FieldSource for F
where
    F: Fn(u32, u32) -> u16,
{
    #[inline]
    fn sample(&self, x: u32, y: u32) -> u16 {
        self(x, y)
    }
}

/// W×H grid of bucket labels, row-major. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityField {
    width: u32,
    height: u32,
    buckets: u16,
    values: Vec<u8>,
}

impl IntensityField {
    /// Sample `src` at every pixel (row-major) and check each label.
    pub fn from_source<S: FieldSource + ?Sized>(
        width: u32,
        height: u32,
        buckets: u16,
        src: &S,
    ) -> Result<Self> {
        validate_buckets(buckets)?;
        let mut values = Vec::with_capacity(pixel_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                let v = src.sample(x, y);
                if v >= buckets {
                    return Err(AllRgbError::Precondition(format!(
                        "field value {v} at ({x},{y}) outside 0..{buckets}"
                    )));
                }
                values.push(v as u8);
            }
        }
        Ok(Self {
            width,
            height,
            buckets,
            values,
        })
    }

    pub fn from_values(width: u32, height: u32, buckets: u16, values: Vec<u8>) -> Result<Self> {
        validate_buckets(buckets)?;
        let n = pixel_count(width, height)?;
        if values.len() != n {
            return Err(AllRgbError::Precondition(format!(
                "field has {} values, expected {width}x{height}={n}",
                values.len()
            )));
        }
        if let Some(i) = values.iter().position(|&v| v as u16 >= buckets) {
            return Err(AllRgbError::Precondition(format!(
                "field value {} at ({},{}) outside 0..{buckets}",
                values[i],
                i % width as usize,
                i / width as usize
            )));
        }
        Ok(Self {
            width,
            height,
            buckets,
            values,
        })
    }

    pub fn constant(width: u32, height: u32, buckets: u16, value: u8) -> Result<Self> {
        let n = pixel_count(width, height)?;
        Self::from_values(width, height, buckets, vec![value; n])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn buckets(&self) -> u16 {
        self.buckets
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Row-major labels.
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(AllRgbError::Precondition(format!(
            "field dimensions must be non-zero, got {width}x{height}"
        )));
    }
    Ok(width as usize * height as usize)
}
