// crates/allrgb-cli/src/io/mod.rs

pub mod plan_file;
pub mod ppm;
