//! Renders a noise pipeline to an 8-bit grayscale PNG.
//!
//! `visualize --ridged` draws the ridged reference scene (seed 88, 256×256,
//! 50 pixels per noise unit) to `perlin_noise.png`.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use noisefield_core::{Curve, FractalParams, PipelineConfig, ScalarField};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render a noise pipeline to a grayscale PNG")]
struct Args {
    /// Gradient noise seed.
    #[arg(short, long, default_value_t = 88)]
    seed: u32,

    /// Image width and height in pixels.
    #[arg(long, default_value_t = 256)]
    size: u32,

    /// Pixels per unit of noise space.
    #[arg(short, long, default_value_t = 50.0)]
    period: f64,

    /// Fractal octave count; 0 samples plain gradient noise.
    #[arg(short, long, default_value_t = 6)]
    octaves: u32,

    #[arg(long, default_value_t = 0.5)]
    persistence: f64,

    #[arg(long, default_value_t = 2.0)]
    lacunarity: f64,

    /// Per-octave curve, e.g. `ridge` or `gain:0.3`. Repeatable, applied in order.
    #[arg(long = "octave-curve")]
    octave_curves: Vec<Curve>,

    /// Curve applied to the final value, e.g. `smoothstep:0,0.95`. Repeatable.
    #[arg(long = "post-curve")]
    post_curves: Vec<Curve>,

    /// Render the ridged reference scene, ignoring the pipeline flags above.
    #[arg(long, conflicts_with = "config")]
    ridged: bool,

    /// Pipeline config JSON, ignoring the pipeline flags above.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = "perlin_noise.png")]
    output: PathBuf,
}

impl Args {
    fn pipeline(&self) -> Result<PipelineConfig> {
        let config: PipelineConfig = if let Some(path) = &self.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        } else if self.ridged {
            PipelineConfig::ridged(self.seed)
        } else {
            PipelineConfig {
                seed: self.seed,
                fractal: (self.octaves > 0)
                    .then(|| FractalParams::new(self.octaves, self.persistence, self.lacunarity)),
                octave_curves: self.octave_curves.clone(),
                post_curves: self.post_curves.clone(),
            }
        };
        config.validate().context("invalid pipeline config")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if args.size == 0 {
        bail!("--size must be at least 1");
    }
    if !(args.period.is_finite() && args.period > 0.0) {
        bail!("--period must be a positive number, got {}", args.period);
    }
    let config = args.pipeline()?;

    info!("sampling {}×{} pixels (seed {})", args.size, args.size, config.seed);
    let n = args.size as usize;
    let field = ScalarField::sample(&config.build(), n, n, args.period);
    let bounds = field.bounds();
    info!(min = bounds.min, max = bounds.max, "sampled field");

    let img = image::GrayImage::from_raw(args.size, args.size, field.to_luma8())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}×{}", args.size, args.size))?;
    img.save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}
