// crates/allrgb-cli/src/cmd/render.rs

use clap::Args;
use allrgb_core::field::image::LumaField;
use allrgb_core::pipeline::{julia_field, render};
use allrgb_core::plan::format as plan_format;
use allrgb_core::{IntensityField, Plan};

use crate::cmd::plan::PlanOverrides;
use crate::io::{plan_file, ppm};

use std::time::Instant;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub plan: PlanOverrides,

    /// Output image path (binary PPM)
    #[arg(long)]
    pub out: String,

    /// Use a P5/P6 image's luma as the intensity field instead of the Julia set.
    /// Its size must match the plan.
    #[arg(long)]
    pub field_image: Option<String>,

    /// Save the effective plan (after overrides) to this .arp path
    #[arg(long)]
    pub save_plan: Option<String>,

    /// Re-check the grid uses every cube colour exactly once before writing
    #[arg(long)]
    pub verify: bool,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let p = args.plan.effective_plan()?;

    let t0 = Instant::now();
    let field = load_field(&p, args.field_image.as_deref())?;
    let t_field = t0.elapsed();

    let r = render(&p, &field)?;
    let t_render = t0.elapsed() - t_field;

    let cube = p.cube()?;
    if args.verify {
        r.grid.verify_bijection(cube)?;
    }
    ppm::write_grid(&args.out, &r.grid, cube.max_channel())?;
    // Only plans that actually rendered are saved.
    if let Some(path) = args.save_plan.as_deref() {
        plan_file::save_arp(path, &p)?;
    }

    let (big_b, big_n) = r.histogram.largest().unwrap_or((0, 0));
    eprintln!("--- render ---");
    eprintln!("plan_id         = {}", plan_format::plan_id_hex(&p));
    eprintln!("size            = {}x{}", p.width, p.height);
    eprintln!("cube            = {}-bit ({} colours)", p.cube_bits, cube.colours());
    eprintln!("ordering        = {:?}", p.ordering);
    eprintln!("descending      = {}", p.descending);
    eprintln!("shuffle         = {} (seed={})", p.shuffle, p.seed);
    eprintln!(
        "field           = {}",
        args.field_image.as_deref().unwrap_or("julia")
    );
    eprintln!("buckets_used    = {}/{}", r.histogram.non_empty(), p.buckets);
    eprintln!("largest_bucket  = {} ({} px)", big_b, big_n);
    eprintln!("verified        = {}", args.verify);
    eprintln!("grid_digest     = {}", r.grid.digest_hex());
    eprintln!("field_ms        = {}", t_field.as_millis());
    eprintln!("render_ms       = {}", t_render.as_millis());
    eprintln!("out             = {}", args.out);

    Ok(())
}

/// Julia set from the plan, or the luma of an image file.
pub fn load_field(p: &Plan, image: Option<&str>) -> anyhow::Result<IntensityField> {
    match image {
        None => Ok(julia_field(p)?),
        Some(path) => {
            let img = ppm::read_pnm(path)?;
            if img.width != p.width || img.height != p.height {
                anyhow::bail!(
                    "field image {path} is {}x{}, plan wants {}x{}",
                    img.width,
                    img.height,
                    p.width,
                    p.height
                );
            }
            let luma = LumaField::new(img.width, img.height, img.maxval, p.buckets, img.luma_samples())?;
            Ok(IntensityField::from_source(p.width, p.height, p.buckets, &luma)?)
        }
    }
}
