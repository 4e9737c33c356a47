//! Goban Bake - build the board and stones from a config and export the overlay
//!
//! Builds every solid a renderer needs, logs their sizes, and writes the baked
//! grid overlay as a PNG so it can be inspected or shipped as a static asset.
//!
//! Usage:
//!   goban_bake --config goban.json --output overlay.png
//!   goban_bake --size 13 --pixels-per-unit 8

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use goban_engine::{BoardSpec, GobanConfig, GobanResult, LatticePoint, StoneSpec, star_points};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file (missing fields use the classic dimensions)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the board to a square of this many lines
    #[arg(short, long)]
    size: Option<u32>,

    /// Override the overlay bake density
    #[arg(short, long)]
    pixels_per_unit: Option<f32>,

    /// Where to write the overlay PNG
    #[arg(short, long, default_value = "goban_overlay.png")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> GobanResult<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            GobanConfig::load(path)?
        }
        None => GobanConfig::default(),
    };
    if let Some(size) = args.size {
        config.board.rows = size;
        config.board.cols = size;
    }
    if let Some(ppu) = args.pixels_per_unit {
        config.overlay.pixels_per_unit = ppu;
    }

    let board = BoardSpec::from_config(&config.board)?;
    let dims = board.dimensions();
    let solid = board.build_solid();
    info!(
        "Board {}x{}: {:.1} x {:.1} x {:.1} mm, {} triangles in {} face groups",
        config.board.rows,
        config.board.cols,
        dims.width,
        dims.height,
        dims.depth,
        solid.mesh().triangle_count(),
        solid.groups().len()
    );

    let stars = star_points(config.board.rows);
    if stars.is_empty() || config.board.rows != config.board.cols {
        info!("No star points for a {}x{} board", config.board.rows, config.board.cols);
    } else {
        info!("{} star points", stars.len());
    }

    let overlay = board.overlay(config.overlay.pixels_per_unit)?.bake();
    overlay.save_png(&args.output)?;
    info!(
        "Overlay {}x{} px written to {}",
        overlay.width(),
        overlay.height(),
        args.output.display()
    );

    for color in ["black", "white"] {
        let stone = StoneSpec::from_config(&config.stone, color)?;
        let solid = stone.build_solid();
        info!(
            "{} stone: R = {:.3} mm, cap angle = {:.2} deg, {} vertices",
            color,
            stone.sphere_radius(),
            stone.cap_angle().to_degrees(),
            solid.mesh().vertex_count()
        );
    }

    let corner = board.stone_position(LatticePoint::new(0, 0));
    info!("Stone at (0, 0) sits at ({:.1}, {:.1}, {:.1})", corner.x, corner.y, corner.z);

    Ok(())
}
