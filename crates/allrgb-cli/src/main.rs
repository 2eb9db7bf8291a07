// crates/allrgb-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "allrgb-cli")]
#[command(about = "allrgb image synthesis: every 24-bit colour exactly once", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an allrgb image from a plan (Julia set or --field-image)
    Render(cmd::render::RenderArgs),

    /// Write the quantised intensity field as a greyscale preview
    Field(cmd::field::FieldArgs),

    /// Check that a PPM uses every cube colour exactly once
    Verify(cmd::verify::VerifyArgs),

    /// Plan tools (.arp)
    Plan(cmd::plan::PlanArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render(args) => cmd::render::run(args),
        Commands::Field(args) => cmd::field::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
        Commands::Plan(args) => cmd::plan::run(args),
    }
}
