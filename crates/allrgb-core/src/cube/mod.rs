// crates/allrgb-core/src/cube/mod.rs

pub mod colour;
pub mod enumerate;
