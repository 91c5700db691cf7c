use std::path::PathBuf;

use clap::Parser;

/// Command-line surface. Anything set here overrides the config file.
#[derive(Parser, Debug, Default)]
#[command(name = "gridrush")]
#[command(about = "A terminal lane-crossing arcade game")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for field generation (repeatable runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames per second for the game loop
    #[arg(long)]
    pub fps: Option<f64>,

    /// Overlay hitbox extents on every entity
    #[arg(long)]
    pub debug_hitboxes: bool,
}
