// crates/allrgb-cli/src/io/ppm.rs

use anyhow::Context;
use allrgb_core::{OutputGrid, Rgb};

/// Binary PNM as read from disk. Only 8-bit samples (maxval <= 255).
#[derive(Debug)]
pub struct Pnm {
    pub channels: usize,
    pub width: u32,
    pub height: u32,
    pub maxval: u16,
    pub data: Vec<u8>,
}

impl Pnm {
    /// One luma sample per pixel in `0..=maxval`.
    pub fn luma_samples(&self) -> Vec<u16> {
        match self.channels {
            1 => self.data.iter().map(|&v| v as u16).collect(),
            _ => self
                .data
                .chunks_exact(3)
                .map(|p| Rgb::new(p[0], p[1], p[2]).luma() as u16)
                .collect(),
        }
    }
}

/// P6 layout: "P6\n<w> <h>\n<maxval>\n" then row-major r,g,b bytes.
pub fn encode_ppm(width: u32, height: u32, maxval: u8, rgb: &[u8]) -> Vec<u8> {
    let header = format!("P6\n{width} {height}\n{maxval}\n");
    let mut out = Vec::with_capacity(header.len() + rgb.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(rgb);
    out
}

pub fn write_grid(path: &str, grid: &OutputGrid, maxval: u8) -> anyhow::Result<()> {
    let bytes = encode_ppm(grid.width(), grid.height(), maxval, &grid.to_rgb_bytes());
    std::fs::write(path, bytes).with_context(|| format!("write ppm {path}"))?;
    Ok(())
}

pub fn read_pnm(path: &str) -> anyhow::Result<Pnm> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    decode_pnm(&bytes).with_context(|| format!("decode {path}"))
}

pub fn decode_pnm(bytes: &[u8]) -> anyhow::Result<Pnm> {
    let mut i = 0usize;
    let magic = header_token(bytes, &mut i)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => anyhow::bail!("unsupported pnm magic {other:?} (want P5 or P6)"),
    };
    let width: u32 = header_token(bytes, &mut i)?.parse().context("pnm width")?;
    let height: u32 = header_token(bytes, &mut i)?.parse().context("pnm height")?;
    let maxval: u16 = header_token(bytes, &mut i)?.parse().context("pnm maxval")?;
    if maxval == 0 || maxval > 255 {
        anyhow::bail!("pnm maxval {maxval} unsupported (want 1..=255)");
    }
    // Exactly one whitespace byte separates the header from the raster.
    i += 1;

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| anyhow::anyhow!("pnm size {width}x{height} overflows"))?;
    let end = i
        .checked_add(len)
        .ok_or_else(|| anyhow::anyhow!("pnm size {width}x{height} overflows"))?;
    let data = bytes
        .get(i..end)
        .ok_or_else(|| anyhow::anyhow!("pnm raster truncated: want {len} bytes"))?
        .to_vec();
    if end != bytes.len() {
        anyhow::bail!("pnm has {} trailing bytes", bytes.len() - end);
    }
    if let Some(&v) = data.iter().find(|&&v| v as u16 > maxval) {
        anyhow::bail!("pnm sample {v} exceeds maxval {maxval}");
    }

    Ok(Pnm {
        channels,
        width,
        height,
        maxval,
        data,
    })
}

/// Next whitespace-delimited header token, skipping `#` comments.
fn header_token(bytes: &[u8], i: &mut usize) -> anyhow::Result<String> {
    loop {
        match bytes.get(*i) {
            Some(b'#') => {
                while bytes.get(*i).is_some_and(|&c| c != b'\n') {
                    *i += 1;
                }
            }
            Some(c) if c.is_ascii_whitespace() => *i += 1,
            Some(_) => break,
            None => anyhow::bail!("pnm header truncated"),
        }
    }
    let start = *i;
    while bytes.get(*i).is_some_and(|c| !c.is_ascii_whitespace()) {
        *i += 1;
    }
    Ok(String::from_utf8_lossy(&bytes[start..*i]).into_owned())
}
