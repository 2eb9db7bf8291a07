// crates/allrgb-core/src/assign/mod.rs

pub mod engine;
pub mod grid;
