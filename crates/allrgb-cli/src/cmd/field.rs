// crates/allrgb-cli/src/cmd/field.rs

use anyhow::Context;
use clap::Args;
use allrgb_core::bucket::histogram::Histogram;

use crate::cmd::plan::PlanOverrides;
use crate::cmd::render::load_field;
use crate::io::ppm;

#[derive(Args, Debug)]
pub struct FieldArgs {
    #[command(flatten)]
    pub plan: PlanOverrides,

    /// Output greyscale preview path (binary PPM)
    #[arg(long)]
    pub out: String,

    /// Preview an image-backed field instead of the Julia set
    #[arg(long)]
    pub field_image: Option<String>,
}

pub fn run(args: FieldArgs) -> anyhow::Result<()> {
    let p = args.plan.effective_plan()?;
    let field = load_field(&p, args.field_image.as_deref())?;

    // Spread buckets over the full grey ramp.
    let top = (p.buckets as u32).saturating_sub(1).max(1);
    let mut rgb = Vec::with_capacity(field.values().len() * 3);
    for &v in field.values() {
        let g = (v as u32 * 255 / top) as u8;
        rgb.extend_from_slice(&[g, g, g]);
    }
    let bytes = ppm::encode_ppm(field.width(), field.height(), 255, &rgb);
    std::fs::write(&args.out, bytes).with_context(|| format!("write ppm {}", args.out))?;

    let h = Histogram::build(&field);
    let total = h.total();
    eprintln!("--- field ---");
    eprintln!("size            = {}x{}", field.width(), field.height());
    eprintln!("buckets_used    = {}/{}", h.non_empty(), p.buckets);
    eprintln!("entropy_bits    = {:.6}", entropy_bits(h.counts(), total));
    eprintln!("out             = {}", args.out);

    Ok(())
}

fn entropy_bits(counts: &[u32], total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let mut ent = 0.0;
    for &c in counts {
        if c == 0 {
            continue;
        }
        let p = (c as f64) / (total as f64);
        ent -= p * p.log2();
    }
    ent
}
