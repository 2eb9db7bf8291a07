// crates/allrgb-cli/src/cmd/mod.rs

pub mod field;
pub mod plan;
pub mod render;
pub mod verify;
