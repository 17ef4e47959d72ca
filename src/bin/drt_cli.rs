use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};

use drt_core::dump::save_matrix;
use drt_core::{load_config, phantom, stitch, Pipeline, Projection, ReconConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PhantomKind {
    Disk,
    Checkerboard,
    Gaussian,
    Random,
}

/// Discrete Radon transform CLI.
///
/// Projects an image (an `.npy` file of f64, or a generated phantom) with the
/// configured engine, then restores it by filtered back-projection.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a 2D f64 `.npy` image
    #[arg(long, conflicts_with = "phantom")]
    input: Option<PathBuf>,

    /// Generate a synthetic image instead of reading one
    #[arg(long, value_enum)]
    phantom: Option<PhantomKind>,

    /// Side length of the generated phantom
    #[arg(long, default_value_t = 64)]
    size: usize,

    /// Seed for the random phantom
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Optional JSON pipeline configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path for the reconstructed image (.npy)
    #[arg(long)]
    output: PathBuf,

    /// Also write the conventional (r, theta) sinogram (.npy)
    #[arg(long)]
    sinogram: Option<PathBuf>,

    /// Also write the stitched quadrant view (.npy, fast engine only)
    #[arg(long)]
    stitched: Option<PathBuf>,

    /// Also write the reconstruction as a raw binary matrix dump
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn load_image(args: &Args) -> Result<Array2<f64>> {
    if let Some(path) = &args.input {
        return read_npy(path).map_err(|e| anyhow::anyhow!("Failed to read NPY {:?}: {}", path, e));
    }
    let n = args.size;
    let image = match args.phantom.unwrap_or(PhantomKind::Disk) {
        PhantomKind::Disk => phantom::disk(n, 0.6),
        PhantomKind::Checkerboard => phantom::checkerboard(n, (n / 8).max(1)),
        PhantomKind::Gaussian => phantom::gaussian(n, n as f64 / 8.0),
        PhantomKind::Random => phantom::random(n, args.seed),
    };
    Ok(image)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {:?}: {}", path, e))?,
        None => ReconConfig::default(),
    };
    let pipeline = Pipeline::new(config)?;

    let image = load_image(&args)?;
    info!(
        "Running {:?} engine on {}x{} image (expansion = {})",
        pipeline.config().engine,
        image.nrows(),
        image.ncols(),
        pipeline.config().expansion
    );

    let projection = pipeline
        .project(&image)
        .map_err(|e| anyhow::anyhow!("Forward transform failed: {}", e))?;

    if let Some(path) = &args.sinogram {
        let sinogram = pipeline.sinogram(&projection)?;
        write_npy(path, &sinogram)
            .map_err(|e| anyhow::anyhow!("Failed to write sinogram {:?}: {}", path, e))?;
        println!("Sinogram written to {:?}", path);
    }

    if let Some(path) = &args.stitched {
        match &projection {
            Projection::Fast(radon) => {
                write_npy(path, &stitch(radon))
                    .map_err(|e| anyhow::anyhow!("Failed to write stitched view {:?}: {}", path, e))?;
                println!("Stitched quadrants written to {:?}", path);
            }
            Projection::Slow { .. } => log::warn!("--stitched ignored: slow engine has no quadrants"),
        }
    }

    let restored = pipeline
        .reconstruct(&projection)
        .map_err(|e| anyhow::anyhow!("Reconstruction failed: {}", e))?;

    write_npy(&args.output, &restored)
        .map_err(|e| anyhow::anyhow!("Failed to write output NPY {:?}: {}", args.output, e))?;
    println!("Reconstruction written to {:?}", args.output);

    if let Some(path) = &args.dump {
        save_matrix(path, &restored)
            .map_err(|e| anyhow::anyhow!("Failed to write dump {:?}: {}", path, e))?;
        println!("Binary dump written to {:?}", path);
    }

    Ok(())
}
