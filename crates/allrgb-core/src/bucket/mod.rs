// crates/allrgb-core/src/bucket/mod.rs

pub mod histogram;
pub mod permute;
