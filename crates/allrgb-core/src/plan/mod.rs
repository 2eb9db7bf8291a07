// crates/allrgb-core/src/plan/mod.rs

pub mod checksum;
pub mod defaults;
pub mod format;
pub mod plan;
