//! SusanEdge CLI - SUSAN edge strength and orientation

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use susanedge_algorithms::edges::{
    edge_orientation, EdgeDetector, EdgeOrientationParams, EdgeStrengthParams, KernelMask,
    StrengthMap,
};
use susanedge_core::io::{read_image, write_raster};
use susanedge_core::{Image, Raster, ToGray};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "susanedge")]
#[command(author, version, about = "SUSAN edge strength and orientation", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every edge strength run
#[derive(Args)]
struct StrengthArgs {
    /// Brightness difference threshold
    #[arg(short, long, default_value = "27.0")]
    threshold: f64,
    /// Kernel radius in pixels
    #[arg(short, long, default_value = "3")]
    radius: usize,
    /// Rescale strength to [0, RANGE]; 0 writes raw 64-bit float values
    #[arg(short = 'n', long, default_value = "255")]
    range: u64,
    /// Only count similar cells 8-connected to the nucleus
    #[arg(short, long)]
    connected: bool,
}

impl StrengthArgs {
    fn params(&self) -> EdgeStrengthParams {
        EdgeStrengthParams {
            threshold: self.threshold,
            radius: self.radius,
            range: self.range,
            connected: self.connected,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about an image file
    Info {
        /// Input image file
        input: PathBuf,
    },
    /// Print the circular kernel for a radius
    Kernel {
        /// Kernel radius in pixels
        #[arg(short, long, default_value = "3")]
        radius: usize,
    },
    /// Compute the edge strength map of an image
    Strength {
        /// Input image file (gray or RGB)
        input: PathBuf,
        /// Output file
        output: PathBuf,
        #[command(flatten)]
        options: StrengthArgs,
    },
    /// Compute the edge orientation map from a strength map
    Orientation {
        /// Input edge strength file
        input: PathBuf,
        /// Output file
        output: PathBuf,
        /// Kernel radius in pixels
        #[arg(short, long, default_value = "3")]
        radius: usize,
        /// Only count strength cells 8-connected to the nucleus
        #[arg(short, long)]
        connected: bool,
    },
    /// Compute strength and orientation in one run
    Detect {
        /// Input image file (gray or RGB)
        input: PathBuf,
        /// Edge strength output file
        strength: PathBuf,
        /// Edge orientation output file
        orientation: PathBuf,
        #[command(flatten)]
        options: StrengthArgs,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set default subscriber")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_input(path: &Path) -> Result<Image> {
    let pb = spinner("Reading image...");
    let image = read_image(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    pb.finish_and_clear();
    info!(
        "Input: {} x {}, {} band(s)",
        image.cols(),
        image.rows(),
        image.bands()
    );
    Ok(image)
}

fn write_strength(map: &StrengthMap, path: &Path) -> Result<()> {
    let pb = spinner("Writing edge strength...");
    let written = match map {
        StrengthMap::Real(r) => write_raster(r, path),
        StrengthMap::U8(r) => write_raster(r, path),
        StrengthMap::U16(r) => write_raster(r, path),
        StrengthMap::U32(r) => write_raster(r, path),
        StrengthMap::U64(r) => write_raster(r, path),
    };
    written.context("Failed to write edge strength")?;
    pb.finish_and_clear();
    Ok(())
}

fn write_orientation(raster: &Raster<f64>, path: &Path) -> Result<()> {
    let pb = spinner("Writing edge orientation...");
    write_raster(raster, path).context("Failed to write edge orientation")?;
    pb.finish_and_clear();
    Ok(())
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

fn print_kernel(kernel: &KernelMask) {
    for row in kernel.cells().rows() {
        let line: String = row
            .iter()
            .map(|&active| if active { "# " } else { ". " })
            .collect();
        println!("{}", line.trim_end());
    }
    println!();
    println!("Radius: {}", kernel.radius());
    println!("Area: {} cells", kernel.area());
    println!("Geometric threshold: {:.2}", kernel.geometric_threshold());
    println!("Connectivity floor: {} cells", kernel.connectivity_floor());
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Info { input } => {
            let image = read_input(&input)?;
            let gray = image.to_gray().context("Failed to reduce image to gray")?;
            let stats = gray.statistics();

            println!("File: {}", input.display());
            println!(
                "Dimensions: {} x {} ({} cells)",
                image.cols(),
                image.rows(),
                gray.len()
            );
            println!("Bands: {}", image.bands());
            println!("\nBrightness:");
            if let Some(min) = stats.min {
                println!("  Min: {:.4}", min);
            }
            if let Some(max) = stats.max {
                println!("  Max: {:.4}", max);
            }
            if let Some(mean) = stats.mean {
                println!("  Mean: {:.4}", mean);
            }
            println!("  Valid cells: {}", stats.valid_count);
        }

        Commands::Kernel { radius } => {
            let kernel = KernelMask::new(radius).context("Invalid kernel radius")?;
            print_kernel(&kernel);
        }

        Commands::Strength {
            input,
            output,
            options,
        } => {
            let detector =
                EdgeDetector::new(options.params()).context("Invalid strength parameters")?;
            let image = read_input(&input)?;
            let start = Instant::now();
            let strength = detector
                .strength(&image)
                .context("Failed to compute edge strength")?;
            let elapsed = start.elapsed();
            info!("Maximum strength: {}", strength.max_value());
            write_strength(&strength, &output)?;
            done("Edge strength", &output, elapsed);
        }

        Commands::Orientation {
            input,
            output,
            radius,
            connected,
        } => {
            let strength = read_input(&input)?;
            let start = Instant::now();
            let orientation =
                edge_orientation(&strength, EdgeOrientationParams { radius, connected })
                    .context("Failed to compute edge orientation")?;
            let elapsed = start.elapsed();
            write_orientation(&orientation, &output)?;
            done("Edge orientation", &output, elapsed);
        }

        Commands::Detect {
            input,
            strength,
            orientation,
            options,
        } => {
            let detector =
                EdgeDetector::new(options.params()).context("Invalid strength parameters")?;
            let image = read_input(&input)?;
            let start = Instant::now();
            let maps = detector
                .detect(&image)
                .context("Failed to run edge detection")?;
            let elapsed = start.elapsed();
            write_strength(&maps.strength, &strength)?;
            write_orientation(&maps.orientation, &orientation)?;
            done("Edge strength", &strength, elapsed);
            println!("Edge orientation saved to: {}", orientation.display());
        }
    }

    Ok(())
}
