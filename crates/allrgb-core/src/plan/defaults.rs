// crates/allrgb-core/src/plan/defaults.rs

use crate::cube::enumerate::Ordering;
use crate::field::julia::JuliaParams;
use crate::plan::plan::Plan;

pub const PLAN_VERSION: u16 = 1;

/// Near-square dimensions holding exactly 2^(3*bits) pixels.
/// 8 bits -> 4096x4096, 4 bits -> 64x64, 1 bit -> 4x2.
pub fn square_dims(cube_bits: u8) -> (u32, u32) {
    let total = 3 * cube_bits as u32;
    (1u32 << total.div_ceil(2), 1u32 << (total / 2))
}

/// The full allrgb render: 4096x4096, Morton order, shuffled buckets.
pub fn default_plan() -> Plan {
    reduced_plan(8)
}

/// Same knobs as `default_plan` on a smaller cube. `cube_bits` is not
/// checked here; `validate_plan` rejects anything outside 1..=8.
pub fn reduced_plan(cube_bits: u8) -> Plan {
    let (width, height) = square_dims(cube_bits.min(8));
    Plan {
        version: PLAN_VERSION,
        seed: 0x00A1_1DB6_5EED_0001,
        cube_bits,
        buckets: 256,
        width,
        height,
        ordering: Ordering::Morton,
        descending: false,
        shuffle: true,
        julia: JuliaParams::default(),
    }
}
