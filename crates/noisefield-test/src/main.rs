/// Regression harness: samples a pipeline over a pixel grid and compares the
/// resulting min/max bounds with a golden JSON snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use noisefield_core::{FieldBounds, PipelineConfig, ScalarField};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "noisefield-test", about = "Golden-bounds regression harness")]
struct Args {
    /// Seed of the ridged reference scene. Ignored with --config.
    #[arg(short, long, default_value_t = 88)]
    seed: u32,

    /// Pipeline config JSON to sample instead of the ridged reference scene.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width and height in pixels.
    #[arg(long, default_value_t = 256)]
    size: usize,

    /// Pixels per unit of noise space.
    #[arg(short, long, default_value_t = 50.0)]
    period: f64,

    /// Golden snapshot to compare against.
    #[arg(short, long, default_value = "data/golden/ridged_seed88.json")]
    golden: PathBuf,

    /// Overwrite the golden snapshot with the current bounds.
    #[arg(long)]
    write: bool,

    /// Allowed absolute difference per bound.
    #[arg(short, long, default_value_t = 0.0)]
    tolerance: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Snapshot {
    seed: u32,
    size: usize,
    period: f64,
    bounds: FieldBounds,
}

fn load_config(args: &Args) -> Result<PipelineConfig> {
    let config: PipelineConfig = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PipelineConfig::ridged(args.seed),
    };
    config.validate().context("invalid pipeline config")?;
    Ok(config)
}

fn check_grid(size: usize, period: f64) -> Result<()> {
    if size == 0 {
        bail!("--size must be at least 1");
    }
    if !(period.is_finite() && period > 0.0) {
        bail!("--period must be a positive number, got {period}");
    }
    Ok(())
}

fn sample_snapshot(config: &PipelineConfig, size: usize, period: f64) -> Result<Snapshot> {
    let field = ScalarField::sample(&config.build(), size, size, period);
    let bounds = field.bounds();
    if !bounds.is_finite() {
        bail!("sampled bounds are not finite (min={}, max={})", bounds.min, bounds.max);
    }
    Ok(Snapshot { seed: config.seed, size, period, bounds })
}

fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json + "\n").with_context(|| format!("writing {}", path.display()))
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading golden snapshot {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing golden snapshot {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    check_grid(args.size, args.period)?;
    let config = load_config(&args)?;

    info!(seed = config.seed, size = args.size, period = args.period, "sampling grid");
    let current = sample_snapshot(&config, args.size, args.period)?;
    println!("{}", serde_json::to_string_pretty(&current)?);

    if args.write {
        write_snapshot(&args.golden, &current)?;
        info!("wrote golden snapshot {}", args.golden.display());
        return Ok(());
    }

    let golden = read_snapshot(&args.golden)?;

    if golden.seed != current.seed || golden.size != current.size || golden.period != current.period {
        warn!(
            "golden snapshot was taken with seed={} size={} period={}; comparing anyway",
            golden.seed, golden.size, golden.period
        );
    }

    if !current.bounds.approx_eq(&golden.bounds, args.tolerance) {
        bail!(
            "bounds drifted: golden min={} max={}, current min={} max={}",
            golden.bounds.min,
            golden.bounds.max,
            current.bounds.min,
            current.bounds.max
        );
    }
    info!("bounds match golden snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_grids() {
        assert!(check_grid(0, 50.0).is_err());
        assert!(check_grid(256, 0.0).is_err());
        assert!(check_grid(256, -1.0).is_err());
        assert!(check_grid(256, f64::NAN).is_err());
        assert!(check_grid(256, f64::INFINITY).is_err());
        assert!(check_grid(256, 50.0).is_ok());
    }

    #[test]
    fn non_finite_bounds_are_refused() {
        let err = sample_snapshot(&PipelineConfig::ridged(88), 8, 0.0).unwrap_err();
        assert!(err.to_string().contains("not finite"), "{err}");
    }

    #[test]
    fn written_snapshot_reads_back_exactly() {
        let current = sample_snapshot(&PipelineConfig::ridged(88), 256, 50.0).unwrap();
        let path = std::env::temp_dir().join(format!("noisefield-golden-{}.json", std::process::id()));
        write_snapshot(&path, &current).unwrap();
        let back = read_snapshot(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(back, current);
        assert_eq!(back.bounds.min.to_bits(), current.bounds.min.to_bits());
        assert!(back.bounds.approx_eq(&current.bounds, 0.0));
    }

    #[test]
    fn shipped_golden_matches_reference_scene() {
        let golden = read_snapshot(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/golden/ridged_seed88.json")))
            .unwrap();
        let current = sample_snapshot(&PipelineConfig::ridged(golden.seed), golden.size, golden.period).unwrap();
        assert_eq!(current, golden);
    }
}
