// crates/allrgb-core/src/assign/grid.rs

use crate::cube::colour::Rgb;
use crate::cube::enumerate::{Cube, Enumerator, Ordering};
use crate::error::{AllRgbError, Result};
use crate::plan::checksum::{blake3_16, hex16};

/// The final W×H colour grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

/// How far a grid is from using every cube colour exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    /// Colours used more than once (counted once per extra use).
    pub duplicates: u64,
    /// Cube colours never used.
    pub missing: u64,
    /// Pixels whose channels fall outside the cube.
    pub outside: u64,
}

impl Coverage {
    pub fn is_bijective(&self) -> bool {
        self.duplicates == 0 && self.missing == 0 && self.outside == 0
    }
}

impl OutputGrid {
    /// Black grid, to be filled one cell per pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    /// Rebuild a grid from packed r,g,b bytes (as read back from an image).
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let n = width as usize * height as usize;
        if bytes.len() != n * 3 {
            return Err(AllRgbError::Precondition(format!(
                "expected {} rgb bytes for {width}x{height}, got {}",
                n * 3,
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
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
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, c: Rgb) {
        self.pixels[y as usize * self.width as usize + x as usize] = c;
    }

    /// Row-major, 3 bytes per pixel, no padding.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&p.to_bytes());
        }
        out
    }

    /// Stable content id: blake3 over the packed pixels, first 16 bytes as hex.
    pub fn digest_hex(&self) -> String {
        hex16(&blake3_16(&self.to_rgb_bytes()))
    }

    pub fn coverage(&self, cube: Cube) -> Coverage {
        let e = Enumerator::new(cube, Ordering::Sequential, false);
        let mut hits = vec![0u8; cube.colours() as usize];
        let mut cov = Coverage::default();
        for &p in &self.pixels {
            match e.index_of(p) {
                Ok(i) => {
                    let h = &mut hits[i as usize];
                    if *h > 0 {
                        cov.duplicates += 1;
                    }
                    *h = h.saturating_add(1);
                }
                Err(_) => cov.outside += 1,
            }
        }
        cov.missing = hits.iter().filter(|&&h| h == 0).count() as u64;
        cov
    }

    /// Every colour of `cube` exactly once, nothing else.
    pub fn verify_bijection(&self, cube: Cube) -> Result<()> {
        let cov = self.coverage(cube);
        if !cov.is_bijective() {
            return Err(AllRgbError::Consistency(format!(
                "grid is not an allrgb image for the {}-bit cube: duplicates={} missing={} outside={}",
                cube.bits(),
                cov.duplicates,
                cov.missing,
                cov.outside
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_counts_duplicates_and_missing() {
        let cube = Cube::new(1).unwrap();
        let mut g = OutputGrid::new(4, 2);
        let e = Enumerator::new(cube, Ordering::Sequential, false);
        for i in 0..8u32 {
            g.set(i % 4, i / 4, e.colour_at(i).unwrap());
        }
        assert!(g.verify_bijection(cube).is_ok());

        g.set(0, 0, Rgb::new(1, 1, 1));
        g.set(1, 0, Rgb::new(2, 0, 0));
        let cov = g.coverage(cube);
        assert_eq!(cov.duplicates, 1);
        assert_eq!(cov.missing, 2);
        assert_eq!(cov.outside, 1);
        assert!(g.verify_bijection(cube).is_err());
    }

    #[test]
    fn rgb_bytes_are_row_major() {
        let mut g = OutputGrid::new(2, 1);
        g.set(1, 0, Rgb::new(7, 8, 9));
        assert_eq!(g.to_rgb_bytes(), vec![0, 0, 0, 7, 8, 9]);
        let back = OutputGrid::from_rgb_bytes(2, 1, &g.to_rgb_bytes()).unwrap();
        assert_eq!(back, g);
        assert!(OutputGrid::from_rgb_bytes(2, 2, &[0; 6]).is_err());
    }
}
