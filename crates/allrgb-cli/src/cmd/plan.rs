// crates/allrgb-cli/src/cmd/plan.rs

use clap::{Args, Subcommand, ValueEnum};
use allrgb_core::cube::enumerate::Ordering;
use allrgb_core::plan::defaults::{default_plan, reduced_plan, square_dims};
use allrgb_core::plan::format as plan_format;
use allrgb_core::validate::validate_plan;
use allrgb_core::Plan;

use crate::io::plan_file;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OrderingArg {
    /// r, g, b as radix digits (r most significant)
    Sequential,
    /// Bit-interleaved Z-order
    Morton,
}

impl From<OrderingArg> for Ordering {
    fn from(o: OrderingArg) -> Self {
        match o {
            OrderingArg::Sequential => Ordering::Sequential,
            OrderingArg::Morton => Ordering::Morton,
        }
    }
}

/// Plan selection shared by render / field / plan new.
/// Start from --plan (or the built-in default), then apply any overrides.
#[derive(Args, Debug)]
pub struct PlanOverrides {
    /// Plan path (.arp). If omitted, uses the built-in default plan.
    #[arg(long)]
    pub plan: Option<String>,

    /// Bits per channel (8 = full 256^3 cube). Resets width/height to the
    /// near-square size unless they are given too.
    #[arg(long)]
    pub bits: Option<u8>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Intensity buckets (1..=256)
    #[arg(long)]
    pub buckets: Option<u16>,

    /// Colour cube enumeration
    #[arg(long, value_enum)]
    pub ordering: Option<OrderingArg>,

    /// Walk the enumeration from the top corner down
    #[arg(long, conflicts_with = "ascending")]
    pub descending: bool,

    /// Walk the enumeration from black up (re-enable when the plan is descending)
    #[arg(long)]
    pub ascending: bool,

    /// Keep the identity permutation inside each bucket
    #[arg(long, conflicts_with = "shuffle")]
    pub no_shuffle: bool,

    /// Shuffle inside each bucket (re-enable when the plan disables it)
    #[arg(long)]
    pub shuffle: bool,

    /// Shuffle seed (u64)
    #[arg(long)]
    pub seed: Option<u64>,

    // --- Julia set ---
    #[arg(long)]
    pub iterations: Option<u32>,

    #[arg(long)]
    pub zoom: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub x_pos: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_pos: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub c_re: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub c_im: Option<f64>,
}

impl PlanOverrides {
    pub fn effective_plan(&self) -> anyhow::Result<Plan> {
        let mut p = match (self.plan.as_deref(), self.bits) {
            (Some(path), _) => plan_file::load_arp(path)?,
            (None, Some(bits)) => reduced_plan(bits),
            (None, None) => default_plan(),
        };

        if let Some(bits) = self.bits {
            p.cube_bits = bits;
            let (w, h) = square_dims(bits.min(8));
            p.width = w;
            p.height = h;
        }
        if let Some(w) = self.width {
            p.width = w;
        }
        if let Some(h) = self.height {
            p.height = h;
        }
        if let Some(b) = self.buckets {
            p.buckets = b;
        }
        if let Some(o) = self.ordering {
            p.ordering = o.into();
        }
        if self.descending {
            p.descending = true;
        }
        if self.ascending {
            p.descending = false;
        }
        if self.no_shuffle {
            p.shuffle = false;
        }
        if self.shuffle {
            p.shuffle = true;
        }
        if let Some(s) = self.seed {
            p.seed = s;
        }

        let j = &mut p.julia;
        if let Some(v) = self.iterations {
            j.iterations = v;
        }
        if let Some(v) = self.zoom {
            j.zoom = v;
        }
        if let Some(v) = self.x_pos {
            j.x_pos = v;
        }
        if let Some(v) = self.y_pos {
            j.y_pos = v;
        }
        if let Some(v) = self.c_re {
            j.c_re = v;
        }
        if let Some(v) = self.c_im {
            j.c_im = v;
        }

        validate_plan(&p)?;
        log::debug!("effective plan: {p:?}");
        Ok(p)
    }
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub cmd: PlanCmd,
}

#[derive(Subcommand)]
pub enum PlanCmd {
    /// Write a plan file from defaults + overrides and print its id
    New(NewArgs),

    /// Print all plan fields (human readable) and the plan id
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct NewArgs {
    /// Output plan path (.arp)
    #[arg(long)]
    pub out: String,

    #[command(flatten)]
    pub plan: PlanOverrides,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Plan path (.arp)
    #[arg(long)]
    pub plan: String,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    match args.cmd {
        PlanCmd::New(a) => cmd_new(a),
        PlanCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_new(a: NewArgs) -> anyhow::Result<()> {
    let p = a.plan.effective_plan()?;
    plan_file::save_arp(&a.out, &p)?;
    println!("plan_path    = {}", a.out);
    println!("plan_id      = {}", plan_format::plan_id_hex(&p));
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let p = plan_file::load_arp(&a.plan)?;

    println!("plan_path    = {}", a.plan);
    println!("plan_id      = {}", plan_format::plan_id_hex(&p));
    println!("version      = {}", p.version);
    println!("seed         = {}", p.seed);
    println!("cube_bits    = {}", p.cube_bits);
    println!("buckets      = {}", p.buckets);
    println!("size         = {}x{}", p.width, p.height);
    println!("ordering     = {:?}", p.ordering);
    println!("descending   = {}", p.descending);
    println!("shuffle      = {}", p.shuffle);
    println!("julia.iterations = {}", p.julia.iterations);
    println!("julia.zoom   = {}", p.julia.zoom);
    println!("julia.pos    = ({}, {})", p.julia.x_pos, p.julia.y_pos);
    println!("julia.c      = ({}, {})", p.julia.c_re, p.julia.c_im);

    println!();
    println!("--- diagnostics ---");
    match validate_plan(&p) {
        Ok(()) => println!("ok"),
        Err(e) => println!("WARN: {e}"),
    }
    if p.buckets == 1 {
        println!("WARN: a single bucket ignores the field entirely.");
    }
    if !p.shuffle && p.seed != default_plan().seed {
        println!("WARN: seed is set but shuffle is off; the seed has no effect.");
    }

    Ok(())
}
