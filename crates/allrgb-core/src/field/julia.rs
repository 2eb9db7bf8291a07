// crates/allrgb-core/src/field/julia.rs
//
// Escape-time Julia set as an intensity source.

use crate::field::grid::FieldSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JuliaParams {
    pub iterations: u32,
    pub zoom: f64,
    pub x_pos: f64,
    pub y_pos: f64,
    pub c_re: f64,
    pub c_im: f64,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            iterations: 196,
            zoom: 1.0,
            x_pos: 0.0,
            y_pos: 0.0,
            c_re: -0.7,
            c_im: 0.27015,
        }
    }
}

#[derive(Clone, Debug)]
pub struct JuliaSet {
    pub params: JuliaParams,
    pub width: u32,
    pub height: u32,
    pub buckets: u16,
}

impl JuliaSet {
    pub fn new(params: JuliaParams, width: u32, height: u32, buckets: u16) -> Self {
        Self {
            params,
            width,
            height,
            buckets,
        }
    }

    /// Iterations before |z| exceeds 2, capped at `params.iterations`.
    pub fn escape_count(&self, x: u32, y: u32) -> u32 {
        let p = &self.params;
        let w = self.width as f64;
        let h = self.height as f64;
        let mut re = 1.5 * (x as f64 - w / 2.0) / (0.5 * p.zoom * w) + p.x_pos;
        let mut im = (y as f64 - h / 2.0) / (0.5 * p.zoom * h) + p.y_pos;

        let mut z = 0;
        while z < p.iterations {
            let (r0, i0) = (re, im);
            re = r0 * r0 - i0 * i0 + p.c_re;
            im = 2.0 * r0 * i0 + p.c_im;
            if re * re + im * im > 4.0 {
                break;
            }
            z += 1;
        }
        z
    }
}

impl FieldSource for JuliaSet {
    fn sample(&self, x: u32, y: u32) -> u16 {
        let limit = self.params.iterations.max(1) as f64;
        quantise(self.escape_count(x, y) as f64 / limit, self.buckets)
    }
}

/// Map `v` in [0, 1) onto `0..buckets`. Points that never escape (v >= 1)
/// fold into bucket 0 alongside negatives and NaN.
pub fn quantise(v: f64, buckets: u16) -> u16 {
    let v = if v.is_nan() || !(0.0..1.0).contains(&v) { 0.0 } else { v };
    let b = (v * buckets as f64) as u16;
    b.min(buckets.saturating_sub(1))
}
