use crate::cube::enumerate::Cube;
use crate::error::{AllRgbError, Result};
use crate::plan::plan::Plan;

/// Bucket labels are stored as u8, so at most 256 classes.
pub fn validate_buckets(buckets: u16) -> Result<()> {
    if !(1..=256).contains(&buckets) {
        return Err(AllRgbError::Precondition(format!(
            "bucket count must be in 1..=256, got {buckets}"
        )));
    }
    Ok(())
}

/// A bijection needs exactly one pixel per colour: W*H == N.
pub fn validate_dimensions(cube: Cube, width: u32, height: u32) -> Result<()> {
    let pixels = width as u64 * height as u64;
    let n = cube.colours() as u64;
    if pixels != n {
        return Err(AllRgbError::Precondition(format!(
            "{width}x{height}={pixels} pixels cannot hold the {}-bit cube ({n} colours)",
            cube.bits()
        )));
    }
    Ok(())
}

pub fn validate_plan(p: &Plan) -> Result<()> {
    let cube = Cube::new(p.cube_bits)?;
    validate_buckets(p.buckets)?;
    validate_dimensions(cube, p.width, p.height)?;

    // Julia sanity: escape time needs at least one step and a usable zoom.
    if p.julia.iterations == 0 {
        return Err(AllRgbError::Precondition("julia iterations must be non-zero".into()));
    }
    if !(p.julia.zoom.is_finite() && p.julia.zoom > 0.0) {
        return Err(AllRgbError::Precondition(format!(
            "julia zoom must be finite and > 0, got {}",
            p.julia.zoom
        )));
    }
    let coords = [p.julia.x_pos, p.julia.y_pos, p.julia.c_re, p.julia.c_im];
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(AllRgbError::Precondition("julia coordinates must be finite".into()));
    }

    Ok(())
}
