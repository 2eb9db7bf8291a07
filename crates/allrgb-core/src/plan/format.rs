// crates/allrgb-core/src/plan/format.rs

use crate::cube::enumerate::Ordering;
use crate::error::{AllRgbError, Result};
use crate::field::julia::JuliaParams;
use crate::plan::checksum::{blake3_16, crc32, hex16};
use crate::plan::plan::Plan;

const MAGIC: &[u8; 4] = b"ARP1";

/// Binary plan file (.arp), little-endian:
/// MAGIC[4]
/// version:u16
/// flags:u16          (ordering | descending<<8 | shuffle<<9)
/// seed:u64
/// cube_bits:u8 buckets:u16 width:u32 height:u32
/// julia: iterations:u32 zoom:f64 x_pos:f64 y_pos:f64 c_re:f64 c_im:f64
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3; this is the plan id)
pub fn encode(p: &Plan) -> Vec<u8> {
    let mut b = encode_body(p);
    let h = blake3_16(&b);
    b.extend_from_slice(&h);
    b
}

fn encode_body(p: &Plan) -> Vec<u8> {
    let mut b = Vec::with_capacity(96);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&p.version.to_le_bytes());
    b.extend_from_slice(&pack_flags(p).to_le_bytes());
    b.extend_from_slice(&p.seed.to_le_bytes());

    b.push(p.cube_bits);
    b.extend_from_slice(&p.buckets.to_le_bytes());
    b.extend_from_slice(&p.width.to_le_bytes());
    b.extend_from_slice(&p.height.to_le_bytes());

    let j = &p.julia;
    b.extend_from_slice(&j.iterations.to_le_bytes());
    for v in [j.zoom, j.x_pos, j.y_pos, j.c_re, j.c_im] {
        b.extend_from_slice(&v.to_le_bytes());
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    b
}

pub fn decode(bytes: &[u8]) -> Result<Plan> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(AllRgbError::PlanFormat("bad magic".into()));
    }
    let mut i = 4usize;

    let version = u16::from_le_bytes(take(bytes, &mut i)?);
    let flags = u16::from_le_bytes(take(bytes, &mut i)?);
    let (ordering, descending, shuffle) = unpack_flags(flags)?;
    let seed = u64::from_le_bytes(take(bytes, &mut i)?);

    let [cube_bits] = take::<1>(bytes, &mut i)?;
    let buckets = u16::from_le_bytes(take(bytes, &mut i)?);
    let width = u32::from_le_bytes(take(bytes, &mut i)?);
    let height = u32::from_le_bytes(take(bytes, &mut i)?);

    let iterations = u32::from_le_bytes(take(bytes, &mut i)?);
    let mut f = [0f64; 5];
    for v in f.iter_mut() {
        *v = f64::from_le_bytes(take(bytes, &mut i)?);
    }
    let [zoom, x_pos, y_pos, c_re, c_im] = f;

    let crc_expected = u32::from_le_bytes(take(bytes, &mut i)?);
    if crc_expected != crc32(&bytes[..i - 4]) {
        return Err(AllRgbError::PlanFormat("crc32 mismatch".into()));
    }

    let h_expected: [u8; 16] = take(bytes, &mut i)?;
    if h_expected != blake3_16(&bytes[..i - 16]) {
        return Err(AllRgbError::PlanFormat("blake3 mismatch".into()));
    }
    if i != bytes.len() {
        return Err(AllRgbError::PlanFormat(format!(
            "{} trailing bytes after plan",
            bytes.len() - i
        )));
    }

    Ok(Plan {
        version,
        seed,
        cube_bits,
        buckets,
        width,
        height,
        ordering,
        descending,
        shuffle,
        julia: JuliaParams {
            iterations,
            zoom,
            x_pos,
            y_pos,
            c_re,
            c_im,
        },
    })
}

/// Stable plan identifier: the trailing blake3_16 that `encode()` appends.
pub fn plan_id_16(p: &Plan) -> [u8; 16] {
    blake3_16(&encode_body(p))
}

pub fn plan_id_hex(p: &Plan) -> String {
    hex16(&plan_id_16(p))
}

fn pack_flags(p: &Plan) -> u16 {
    let o = match p.ordering {
        Ordering::Sequential => 0u16,
        Ordering::Morton => 1u16,
    };
    o | ((p.descending as u16) << 8) | ((p.shuffle as u16) << 9)
}

fn unpack_flags(flags: u16) -> Result<(Ordering, bool, bool)> {
    let ordering = match flags & 0x00FF {
        0 => Ordering::Sequential,
        1 => Ordering::Morton,
        other => return Err(AllRgbError::PlanFormat(format!("unknown ordering {other}"))),
    };
    if flags & 0xFC00 != 0 {
        return Err(AllRgbError::PlanFormat(format!("unknown flag bits {flags:#06x}")));
    }
    Ok((ordering, flags & 0x0100 != 0, flags & 0x0200 != 0))
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    let end = *i + N;
    let out: [u8; N] = bytes
        .get(*i..end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| AllRgbError::PlanFormat("unexpected eof".into()))?;
    *i = end;
    Ok(out)
}
