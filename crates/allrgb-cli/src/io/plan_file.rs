// crates/allrgb-cli/src/io/plan_file.rs

use anyhow::{Context, Result};
use allrgb_core::plan::format as plan_format;
use allrgb_core::Plan;

/// Load a .arp plan file (magic, crc and blake3 are verified).
pub fn load_arp(path: &str) -> Result<Plan> {
    let bytes = std::fs::read(path).with_context(|| format!("read plan {path}"))?;
    let plan = plan_format::decode(&bytes).with_context(|| format!("decode plan {path}"))?;
    Ok(plan)
}

pub fn save_arp(path: &str, plan: &Plan) -> Result<()> {
    let bytes = plan_format::encode(plan);
    std::fs::write(path, bytes).with_context(|| format!("write plan {path}"))?;
    Ok(())
}
