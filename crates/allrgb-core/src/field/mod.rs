// crates/allrgb-core/src/field/mod.rs

pub mod grid;
pub mod image;
pub mod julia;
