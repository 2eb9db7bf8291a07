// crates/allrgb-cli/src/cmd/verify.rs

use clap::Args;
use allrgb_core::validate::validate_dimensions;
use allrgb_core::{Cube, OutputGrid};

use crate::io::ppm;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// PPM (P6) to check
    #[arg(long)]
    pub r#in: String,

    /// Bits per channel; inferred from the PPM maxval when omitted
    #[arg(long)]
    pub bits: Option<u8>,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let img = ppm::read_pnm(&args.r#in)?;
    if img.channels != 3 {
        anyhow::bail!("{} is greyscale; allrgb images are P6", args.r#in);
    }

    let bits = match args.bits {
        Some(b) => b,
        None => bits_from_maxval(img.maxval)?,
    };
    let cube = Cube::new(bits)?;
    validate_dimensions(cube, img.width, img.height)?;

    let grid = OutputGrid::from_rgb_bytes(img.width, img.height, &img.data)?;
    let cov = grid.coverage(cube);

    eprintln!("--- verify ---");
    eprintln!("file            = {}", args.r#in);
    eprintln!("size            = {}x{}", img.width, img.height);
    eprintln!("cube            = {}-bit ({} colours)", bits, cube.colours());
    eprintln!("duplicates      = {}", cov.duplicates);
    eprintln!("missing         = {}", cov.missing);
    eprintln!("outside         = {}", cov.outside);
    eprintln!("digest          = {}", grid.digest_hex());

    if !cov.is_bijective() {
        anyhow::bail!("{} is not an allrgb image", args.r#in);
    }
    eprintln!("allrgb          = ok");
    Ok(())
}

/// maxval = 2^bits - 1.
fn bits_from_maxval(maxval: u16) -> anyhow::Result<u8> {
    let side = maxval as u32 + 1;
    if !side.is_power_of_two() {
        anyhow::bail!("maxval {maxval} is not 2^bits - 1; pass --bits");
    }
    Ok(side.trailing_zeros() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maxval_maps_to_bits() {
        assert_eq!(bits_from_maxval(255).unwrap(), 8);
        assert_eq!(bits_from_maxval(15).unwrap(), 4);
        assert_eq!(bits_from_maxval(1).unwrap(), 1);
        assert!(bits_from_maxval(100).is_err());
    }
}
