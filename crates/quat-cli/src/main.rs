//! quat - axis-angle rotation of 3D points via quaternions

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quat")]
#[command(author, version, about = "Rotate 3D points about an axis using quaternions")]
#[command(long_about = "
Rotates 3D points about an arbitrary axis using quaternion algebra.

Angles follow the right-hand rule: a positive angle rotates
counterclockwise when looking down the axis toward the origin.

Examples:
  quat rotate --axis 0,0,1 --angle -1.5708 1,1,0 1,3,0
  quat rotate --axis 1,1,0 --angle 90 --degrees 0,0,1
  quat demo                             # Rotate the demo square
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate points about an axis
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Rotate the demo square 90 degrees clockwise about +z
    Demo,
}

/// Arguments for the `rotate` command.
#[derive(Args)]
struct RotateArgs {
    /// Points to rotate, each as X,Y,Z
    #[arg(required = true)]
    points: Vec<String>,

    /// Rotation axis as X,Y,Z (normalized internally)
    #[arg(short, long, default_value = "0,0,1")]
    axis: String,

    /// Rotation angle in radians (counterclockwise about the axis)
    #[arg(long, allow_hyphen_values = true)]
    angle: f64,

    /// Interpret the angle as degrees instead of radians
    #[arg(long)]
    degrees: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Rotate(args) => commands::rotate::run(args),
        Commands::Demo => commands::demo::run(),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
